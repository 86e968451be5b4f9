//! User data service.

use async_trait::async_trait;

use crate::client::RequestExecutor;
use crate::errors::{require, DiscoveryResult};
use crate::transport::{DetailedResponse, Method, RequestBuilder};
use crate::types::user_data::DeleteUserDataOptions;

/// User data service trait.
#[async_trait]
pub trait UserDataService: Send + Sync {
    /// Deletes all data labelled with a customer ID.
    async fn delete_user_data(&self, options: &DeleteUserDataOptions) -> DiscoveryResult<DetailedResponse<()>>;
}

/// Default implementation of the user data service.
pub struct DefaultUserDataService<'a> {
    executor: &'a RequestExecutor,
}

impl<'a> DefaultUserDataService<'a> {
    /// Creates a new user data service.
    pub fn new(executor: &'a RequestExecutor) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl<'a> UserDataService for DefaultUserDataService<'a> {
    async fn delete_user_data(&self, options: &DeleteUserDataOptions) -> DiscoveryResult<DetailedResponse<()>> {
        require("customer_id", &options.customer_id)?;

        let request = RequestBuilder::new(Method::Delete, "/v1/user_data", "DeleteUserData")
            .query("customer_id", &options.customer_id)
            .headers(&options.headers);
        self.executor.invoke_empty(request).await
    }
}
