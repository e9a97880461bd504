use crate::{Context, ProvideCredential, Result, SignRequest, SigningCredential};
use std::sync::{Arc, Mutex};

/// Signer is the main struct used to sign the request.
///
/// It loads the credential through its provider on first use and keeps it
/// for as long as [`SigningCredential::is_valid`] holds.
#[derive(Debug)]
pub struct Signer<S: SignRequest> {
    ctx: Context,
    loader: Arc<dyn ProvideCredential<Credential = S::Credential>>,
    builder: S,
    credential: Mutex<Option<S::Credential>>,
}

impl<S: SignRequest> Signer<S> {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        loader: impl ProvideCredential<Credential = S::Credential>,
        builder: S,
    ) -> Self {
        Self {
            ctx,
            loader: Arc::new(loader),
            builder,
            credential: Mutex::new(None),
        }
    }

    /// Signing request.
    pub fn sign(&self, req: &S::Request) -> Result<S::Output> {
        let credential = self.credential.lock().expect("lock poisoned").clone();
        let credential = if credential.is_valid() {
            credential
        } else {
            let loaded = self.loader.provide_credential(&self.ctx)?;
            *self.credential.lock().expect("lock poisoned") = loaded.clone();
            loaded
        };

        self.builder
            .sign_request(&self.ctx, req, credential.as_ref())
    }
}
