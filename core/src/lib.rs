//! Core components for signing storage requests.
//!
//! The crate is built around a few concepts:
//!
//! - **Context**: holds the environment and the clock used while signing
//! - **Traits**: credential loading (`ProvideCredential`) and request signing (`SignRequest`)
//! - **Signer**: coordinates credential loading and request signing
//!
//! ## Example
//!
//! ```
//! use blobsig_core::{Context, ProvideCredential, Result, SignRequest, Signer, SigningCredential};
//!
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     secret: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.secret.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyLoader;
//!
//! impl ProvideCredential for MyLoader {
//!     type Credential = MyCredential;
//!
//!     fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
//!         Ok(Some(MyCredential {
//!             secret: "my-secret".to_string(),
//!         }))
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MySigner;
//!
//! impl SignRequest for MySigner {
//!     type Credential = MyCredential;
//!     type Request = String;
//!     type Output = String;
//!
//!     fn sign_request(
//!         &self,
//!         ctx: &Context,
//!         req: &String,
//!         _: Option<&MyCredential>,
//!     ) -> Result<String> {
//!         Ok(format!("{req}@{}", ctx.now().timestamp()))
//!     }
//! }
//!
//! # fn main() -> Result<()> {
//! let signer = Signer::new(Context::new(), MyLoader, MySigner);
//! let _signed = signer.sign(&"hello".to_string())?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: base64 and HMAC-SHA256 helpers
//! - [`time`]: http date formatting and the [`time::Clock`] abstraction
//! - [`utils`]: secret redaction for `Debug` output

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{Context, Env, NoopEnv, OsEnv, StaticEnv};

mod api;
pub use api::{ProvideCredential, ProvideCredentialChain, SignRequest, SigningCredential};

mod error;
pub use error::{Error, ErrorKind, Result};

mod signer;
pub use signer::Signer;
