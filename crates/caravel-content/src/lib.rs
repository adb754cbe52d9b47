mod error;
pub use error::ContentError;

mod auth;
pub use auth::BearerAuth;

mod client;
pub use client::{Block, ContentClient};
