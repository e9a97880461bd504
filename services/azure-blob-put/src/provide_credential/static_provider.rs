use blobsig_core::{Context, ProvideCredential};

use crate::credential::Credential;

/// Provide a fixed account key supplied by the caller.
#[derive(Clone, Debug)]
pub struct StaticCredentialProvider {
    credential: Credential,
}

impl StaticCredentialProvider {
    /// Create a provider for the given base64 encoded account key.
    pub fn new_shared_key(account_key: &str) -> Self {
        Self {
            credential: Credential::with_shared_key(account_key),
        }
    }
}

impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    fn provide_credential(&self, _ctx: &Context) -> blobsig_core::Result<Option<Self::Credential>> {
        Ok(Some(self.credential.clone()))
    }
}
