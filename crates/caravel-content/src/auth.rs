use caravel_secrets::SecretStore;

use crate::ContentError;

/// Bearer credential for the content API, fetched decrypted from the
/// parameter store.
#[derive(Debug, Clone)]
pub struct BearerAuth {
    token: String,
}

impl BearerAuth {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub async fn from_store(
        store: &dyn SecretStore,
        parameter: &str,
    ) -> Result<Self, ContentError> {
        let token = store.get(parameter, true).await?;
        Ok(Self::new(token))
    }

    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.token)
    }
}
