mod error;
pub use error::PublishError;

mod publisher;
pub use publisher::{RegistryConfig, RegistryPublisher};
