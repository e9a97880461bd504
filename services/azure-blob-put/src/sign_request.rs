use std::fmt::{Debug, Display, Formatter, Write};

use blobsig_core::hash::base64_hmac_sha256;
use blobsig_core::time::{format_http_date, DateTime};
use blobsig_core::utils::Redact;
use blobsig_core::{Context, Error, Result, SignRequest};
use http::header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE};
use http::{HeaderValue, Method};
use log::debug;
use percent_encoding::utf8_percent_encode;

use crate::constants::*;
use crate::{Config, Credential, PutBlobRequest};

/// RequestSigner that implements Azure Storage Shared Key authorization for Put Blob.
///
/// - [Authorize with Shared Key](https://docs.microsoft.com/en-us/rest/api/storageservices/authorize-with-shared-key)
#[derive(Debug, Default)]
pub struct RequestSigner {}

impl RequestSigner {
    /// Create a new request signer.
    pub fn new() -> Self {
        Self {}
    }
}

impl SignRequest for RequestSigner {
    type Credential = Credential;
    type Request = PutBlobRequest;
    type Output = PutBlobSignature;

    fn sign_request(
        &self,
        ctx: &Context,
        req: &PutBlobRequest,
        credential: Option<&Credential>,
    ) -> Result<PutBlobSignature> {
        let Some(cred) = credential else {
            return Err(Error::credential_invalid(format!(
                "no account key found, set {AZBLOB_ACCOUNT_KEY}, {AZURE_STORAGE_ACCOUNT_KEY} or {AZURE_STORAGE_CONNECTION_STRING}"
            )));
        };

        generate_signature(req, cred, ctx.now())
    }
}

/// The signature of a Put Blob request and the time it is bound to.
///
/// `Display` renders `{signature};{request_time}`.
#[derive(Clone, PartialEq, Eq)]
pub struct PutBlobSignature {
    /// Account the signature was computed for.
    pub account_name: String,
    /// Base64 encoded HMAC-SHA256 of the string to sign.
    pub signature: String,
    /// The `x-ms-date` value embedded in the string to sign.
    pub request_time: String,
}

impl Debug for PutBlobSignature {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PutBlobSignature")
            .field("account_name", &self.account_name)
            .field("signature", &Redact::from(&self.signature))
            .field("request_time", &self.request_time)
            .finish()
    }
}

impl Display for PutBlobSignature {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{};{}", self.signature, self.request_time)
    }
}

impl PutBlobSignature {
    /// Value of the `Authorization` header: `SharedKey {account}:{signature}`.
    pub fn authorization(&self) -> String {
        format!("SharedKey {}:{}", self.account_name, self.signature)
    }

    /// Build (but not send) the PUT request this signature authorizes.
    ///
    /// Azure canonicalizes the path as it appears in the URI, while the
    /// signature covers the names verbatim. Names that would need
    /// percent-encoding therefore can't be sent with this signature and
    /// fail with [`ErrorKind::InvalidArguments`](blobsig_core::ErrorKind::InvalidArguments).
    pub fn to_http_request(&self, req: &PutBlobRequest, config: &Config) -> Result<http::Request<()>> {
        let path = format!("{}/{}", req.container_name, req.blob_name);
        let encoded = utf8_percent_encode(&path, &AZURE_PATH_ENCODE_SET).to_string();
        if encoded != path {
            return Err(Error::invalid_arguments(format!(
                "path {path:?} must be sent as {encoded:?}, which differs from the signed resource"
            )));
        }

        let endpoint = config.endpoint_for(&req.account_name);
        let uri = format!("{endpoint}/{path}");

        let mut authorization: HeaderValue = self.authorization().parse()?;
        authorization.set_sensitive(true);

        let req = http::Request::builder()
            .method(Method::PUT)
            .uri(uri)
            .header(CONTENT_LENGTH, req.content_length.as_str())
            .header(CONTENT_TYPE, req.content_type.as_str())
            .header(X_MS_BLOB_TYPE, req.blob_type.as_str())
            .header(X_MS_DATE, self.request_time.as_str())
            .header(X_MS_VERSION, req.api_version.as_str())
            .header(AUTHORIZATION, authorization)
            .body(())?;

        Ok(req)
    }
}

/// Sign `req` with `cred` at time `now`.
///
/// The time is formatted once and the same string is both signed and
/// returned, so callers can send it as `x-ms-date` unchanged.
pub fn generate_signature(
    req: &PutBlobRequest,
    cred: &Credential,
    now: DateTime,
) -> Result<PutBlobSignature> {
    let request_time = format_http_date(now);
    let string_to_sign = string_to_sign(req, &request_time)?;
    let key = cred.decoded_key()?;
    let signature = base64_hmac_sha256(&key, string_to_sign.as_bytes());

    Ok(PutBlobSignature {
        account_name: req.account_name.clone(),
        signature,
        request_time,
    })
}

/// Construct string to sign
///
/// ## Format
///
/// ```text
/// VERB + "\n" +
/// Content-Encoding + "\n" +
/// Content-Language + "\n" +
/// Content-Length + "\n" +
/// Content-MD5 + "\n" +
/// Content-Type + "\n" +
/// Date + "\n" +
/// If-Modified-Since + "\n" +
/// If-Match + "\n" +
/// If-None-Match + "\n" +
/// If-Unmodified-Since + "\n" +
/// Range + "\n" +
/// CanonicalizedHeaders +
/// CanonicalizedResource;
/// ```
///
/// ## Note
///
/// Content-Length is written as given, `"0"` included. `Date` stays empty
/// because the time travels in `x-ms-date`.
///
/// ## Reference
///
/// - [Blob, Queue, and File Services (Shared Key authorization)](https://docs.microsoft.com/en-us/rest/api/storageservices/authorize-with-shared-key)
pub fn string_to_sign(req: &PutBlobRequest, request_time: &str) -> Result<String> {
    let mut s = String::with_capacity(256);

    writeln!(&mut s, "{}", Method::PUT.as_str())?;
    // Content-Encoding
    writeln!(&mut s)?;
    // Content-Language
    writeln!(&mut s)?;
    writeln!(&mut s, "{}", req.content_length)?;
    // Content-MD5
    writeln!(&mut s)?;
    writeln!(&mut s, "{}", req.content_type)?;
    // Date, If-Modified-Since, If-Match, If-None-Match, If-Unmodified-Since, Range
    for _ in 0..6 {
        writeln!(&mut s)?;
    }
    write!(&mut s, "{}", canonicalize_headers(req, request_time))?;
    write!(&mut s, "{}", canonicalize_resource(req))?;

    debug!("string to sign: {:?}", &s);

    Ok(s)
}

/// Every line ends with `\n`, sorted by header name.
///
/// ## Reference
///
/// - [Constructing the canonicalized headers string](https://docs.microsoft.com/en-us/rest/api/storageservices/authorize-with-shared-key#constructing-the-canonicalized-headers-string)
pub fn canonicalize_headers(req: &PutBlobRequest, request_time: &str) -> String {
    format!(
        "{X_MS_BLOB_TYPE}:{}\n{X_MS_DATE}:{request_time}\n{X_MS_VERSION}:{}\n",
        req.blob_type, req.api_version
    )
}

/// `/{account}/{container}/{blob}`, without trailing newline.
///
/// ## Reference
///
/// - [Constructing the canonicalized resource string](https://docs.microsoft.com/en-us/rest/api/storageservices/authorize-with-shared-key#constructing-the-canonicalized-resource-string)
pub fn canonicalize_resource(req: &PutBlobRequest) -> String {
    format!(
        "/{}/{}/{}",
        req.account_name, req.container_name, req.blob_name
    )
}
