mod error;
pub use error::SecretError;

mod store;
pub use store::{MemoryStore, SecretStore};
