use blobsig_core::{Context, ProvideCredential, ProvideCredentialChain};

use crate::provide_credential::{ConnectionStringCredentialProvider, EnvCredentialProvider};
use crate::Credential;

/// Default loader that tries multiple credential sources in order.
///
/// 1. Env (`AZBLOB_ACCOUNT_KEY`, `AZURE_STORAGE_ACCOUNT_KEY`)
/// 2. Connection string (`AZURE_STORAGE_CONNECTION_STRING`)
#[derive(Debug)]
pub struct DefaultCredentialProvider {
    chain: ProvideCredentialChain<Credential>,
}

impl Default for DefaultCredentialProvider {
    fn default() -> Self {
        let chain = ProvideCredentialChain::new()
            .push(EnvCredentialProvider::new())
            .push(ConnectionStringCredentialProvider::new());

        Self { chain }
    }
}

impl DefaultCredentialProvider {
    /// Create a new default loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Try `provider` before the default sources.
    pub fn push_front(self, provider: impl ProvideCredential<Credential = Credential>) -> Self {
        let chain = ProvideCredentialChain::new()
            .push(provider)
            .push(self.chain);

        Self { chain }
    }
}

impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    fn provide_credential(&self, ctx: &Context) -> blobsig_core::Result<Option<Self::Credential>> {
        self.chain.provide_credential(ctx)
    }
}
