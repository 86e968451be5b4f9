//! Type definitions for the Discovery v1 API.
//!
//! Each resource module holds the response models and the per-operation
//! options. Options carry path parameters, query parameters, body fields and
//! a map of custom headers; path parameters and headers never appear in
//! serialized bodies.

/// Implements `with_header` for options structs.
macro_rules! impl_with_header {
    ($($options:ty),+ $(,)?) => {
        $(
            impl $options {
                /// Adds a custom header sent with this call.
                pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
                    self.headers.insert(name.into(), value.into());
                    self
                }
            }
        )+
    };
}

pub mod collections;
pub mod common;
pub mod configurations;
pub mod credentials;
pub mod documents;
pub mod environments;
pub mod events;
pub mod gateways;
pub mod queries;
pub mod training_data;
pub mod user_data;

pub use collections::*;
pub use common::*;
pub use configurations::*;
pub use credentials::*;
pub use documents::*;
pub use environments::*;
pub use events::*;
pub use gateways::*;
pub use queries::*;
pub use training_data::*;
pub use user_data::*;
