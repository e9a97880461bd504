use blobsig_core::{Context, ProvideCredential};

use crate::constants::{AZBLOB_ACCOUNT_KEY, AZURE_STORAGE_ACCOUNT_KEY};
use crate::credential::Credential;

/// Load the account key from environment variables.
///
/// - `AZBLOB_ACCOUNT_KEY`
/// - `AZURE_STORAGE_ACCOUNT_KEY`
///
/// Empty values are treated as unset.
#[derive(Clone, Debug, Default)]
pub struct EnvCredentialProvider {}

impl EnvCredentialProvider {
    /// Create a new env credential provider.
    pub fn new() -> Self {
        Self {}
    }
}

impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    fn provide_credential(&self, ctx: &Context) -> blobsig_core::Result<Option<Self::Credential>> {
        let account_key = [AZBLOB_ACCOUNT_KEY, AZURE_STORAGE_ACCOUNT_KEY]
            .into_iter()
            .filter_map(|key| ctx.env_var(key))
            .find(|v| !v.is_empty());

        Ok(account_key.map(|v| Credential::with_shared_key(&v)))
    }
}
