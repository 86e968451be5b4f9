//! User data types.

use std::collections::HashMap;

/// Options for delete_user_data.
#[derive(Debug, Clone, Default)]
pub struct DeleteUserDataOptions {
    /// Customer ID labelled on the data to delete.
    pub customer_id: String,
    /// Custom headers.
    pub headers: HashMap<String, String>,
}

impl DeleteUserDataOptions {
    /// Creates options deleting the data of `customer_id`.
    pub fn new(customer_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            headers: HashMap::new(),
        }
    }
}

impl_with_header!(DeleteUserDataOptions);
