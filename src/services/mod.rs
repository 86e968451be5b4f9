//! Service implementations for the Discovery v1 API.
//!
//! Each resource has a trait and a default implementation that borrows the
//! client's request executor.

pub mod collections;
pub mod configurations;
pub mod credentials;
pub mod documents;
pub mod environments;
pub mod events;
pub mod gateways;
pub mod queries;
pub mod training_data;
pub mod user_data;

pub use collections::{CollectionsService, DefaultCollectionsService};
pub use configurations::{ConfigurationsService, DefaultConfigurationsService};
pub use credentials::{CredentialsService, DefaultCredentialsService};
pub use documents::{DefaultDocumentsService, DocumentsService};
pub use environments::{DefaultEnvironmentsService, EnvironmentsService};
pub use events::{DefaultEventsService, EventsService};
pub use gateways::{DefaultGatewaysService, GatewaysService};
pub use queries::{DefaultQueriesService, QueriesService};
pub use training_data::{DefaultTrainingDataService, TrainingDataService};
pub use user_data::{DefaultUserDataService, UserDataService};
