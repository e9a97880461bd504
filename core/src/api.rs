use crate::{Context, Result};
use std::fmt::{self, Debug};

/// SigningCredential is the trait used by signer as the signing credential.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the signing credential is valid.
    fn is_valid(&self) -> bool;
}

impl<T: SigningCredential> SigningCredential for Option<T> {
    fn is_valid(&self) -> bool {
        let Some(ctx) = self else {
            return false;
        };

        ctx.is_valid()
    }
}

/// ProvideCredential is the trait used by signer to load the credential from the environment.
///
/// A provider returns `Ok(None)` when its source simply isn't configured, and
/// an error when the source is present but unusable.
pub trait ProvideCredential: Debug + Send + Sync + 'static {
    /// Credential returned by this loader.
    type Credential: Send + Sync + Unpin + 'static;

    /// Load signing credential from current env.
    fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>>;
}

/// SignRequest is the trait used by signer to sign a request.
pub trait SignRequest: Debug + Send + Sync + 'static {
    /// Credential used by this signer.
    type Credential: SigningCredential;

    /// Request to be signed.
    type Request;

    /// What signing produces, typically the signature plus the time it is bound to.
    type Output;

    /// Sign the request.
    ///
    /// The signing time must be read from `ctx` exactly once, so the value
    /// embedded in the signature and the value returned to the caller agree.
    fn sign_request(
        &self,
        ctx: &Context,
        req: &Self::Request,
        credential: Option<&Self::Credential>,
    ) -> Result<Self::Output>;
}

/// A chain of credential providers that will be tried in order.
pub struct ProvideCredentialChain<C: Send + Sync + Unpin + 'static> {
    providers: Vec<Box<dyn ProvideCredential<Credential = C>>>,
}

impl<C: Send + Sync + Unpin + 'static> ProvideCredentialChain<C> {
    /// Create a new empty credential provider chain.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Add a credential provider to the chain.
    pub fn push(mut self, provider: impl ProvideCredential<Credential = C>) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Number of providers in the chain.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether the chain has no providers.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl<C: Send + Sync + Unpin + 'static> Default for ProvideCredentialChain<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Send + Sync + Unpin + 'static> Debug for ProvideCredentialChain<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProvideCredentialChain")
            .field("providers", &self.providers)
            .finish()
    }
}

impl<C: Send + Sync + Unpin + 'static> ProvideCredential for ProvideCredentialChain<C> {
    type Credential = C;

    fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        for provider in &self.providers {
            log::debug!("trying credential provider: {provider:?}");

            match provider.provide_credential(ctx) {
                Ok(Some(cred)) => {
                    log::debug!("loaded credential from provider: {provider:?}");
                    return Ok(Some(cred));
                }
                Ok(None) => {
                    log::debug!("no credential found in provider: {provider:?}");
                    continue;
                }
                Err(e) => {
                    log::warn!("error loading credential from provider {provider:?}: {e:?}");
                    continue;
                }
            }
        }

        Ok(None)
    }
}
