use blobsig_core::hash::base64_decode;
use blobsig_core::utils::Redact;
use blobsig_core::SigningCredential;
use std::fmt::{Debug, Formatter};

/// Credential that holds the storage account key used for Shared Key signing.
///
/// The account name is not part of the credential: it comes with every
/// request, the key is shared by all of them.
#[derive(Clone)]
pub struct Credential {
    /// Base64 encoded storage account key.
    pub account_key: String,
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("account_key", &Redact::from(&self.account_key))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.account_key.is_empty()
    }
}

impl Credential {
    /// Create a new credential with shared key authentication.
    pub fn with_shared_key(account_key: &str) -> Self {
        Self {
            account_key: account_key.to_string(),
        }
    }

    /// Decode the account key into the raw HMAC key bytes.
    pub fn decoded_key(&self) -> blobsig_core::Result<Vec<u8>> {
        base64_decode(&self.account_key)
    }
}
