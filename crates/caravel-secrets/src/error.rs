use thiserror::Error;

#[derive(Debug, Error)]
pub enum SecretError {
    #[error("parameter not found: {0}")]
    NotFound(String),

    #[error("secret store request failed: {0}")]
    Store(String),
}
