//! Azure Blob Storage "Put Blob" signer
//!
//! This crate computes the Shared Key signature for a Put Blob request so an
//! external tool can perform the upload. It does not send anything.
//!
//! # Example
//!
//! ```rust,no_run
//! use azblob_put_sign::{Config, DefaultCredentialProvider, PutBlobRequest, RequestSigner};
//! use blobsig_core::{Context, OsEnv, Result, Signer};
//!
//! fn main() -> Result<()> {
//!     let ctx = Context::new().with_env(OsEnv);
//!     let config = Config::default().from_env(&ctx);
//!
//!     // Account key comes from AZBLOB_ACCOUNT_KEY and friends.
//!     let signer = Signer::new(ctx, DefaultCredentialProvider::new(), RequestSigner::new());
//!
//!     let req = PutBlobRequest::new("account", "container", "blob.txt", "11").with_config(&config);
//!     let signature = signer.sign(&req)?;
//!
//!     // `{signature};{request_time}`
//!     println!("{signature}");
//!
//!     // Or the whole request, ready for any http client.
//!     let http_req = signature.to_http_request(&req, &config)?;
//!     println!("{:?}", http_req.headers());
//!     Ok(())
//! }
//! ```

mod constants;

mod config;
pub use config::Config;

mod connection_string;
pub use connection_string::ConnectionString;

mod credential;
pub use credential::Credential;

mod request;
pub use request::PutBlobRequest;

mod sign_request;
pub use sign_request::{
    canonicalize_headers, canonicalize_resource, generate_signature, string_to_sign,
    PutBlobSignature, RequestSigner,
};

mod provide_credential;
pub use provide_credential::*;
