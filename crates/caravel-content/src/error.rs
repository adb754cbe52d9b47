use thiserror::Error;

use caravel_secrets::SecretError;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("content api returned status {0}")]
    Status(u16),

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("secret store error: {0}")]
    Secret(#[from] SecretError),
}
