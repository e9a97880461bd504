use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

// Headers used in azure services.
pub const X_MS_BLOB_TYPE: &str = "x-ms-blob-type";
pub const X_MS_DATE: &str = "x-ms-date";
pub const X_MS_VERSION: &str = "x-ms-version";

// Put Blob defaults.
pub const AZURE_API_VERSION: &str = "2015-02-21";
pub const DEFAULT_BLOB_TYPE: &str = "BlockBlob";
pub const DEFAULT_CONTENT_TYPE: &str = "text/plain; charset=UTF-8";
pub const BLOB_ENDPOINT_SUFFIX: &str = "blob.core.windows.net";

// Env values used to configure the signer.
pub const AZBLOB_ACCOUNT_KEY: &str = "AZBLOB_ACCOUNT_KEY";
pub const AZURE_STORAGE_ACCOUNT_KEY: &str = "AZURE_STORAGE_ACCOUNT_KEY";
pub const AZURE_STORAGE_CONNECTION_STRING: &str = "AZURE_STORAGE_CONNECTION_STRING";
pub const AZBLOB_API_VERSION: &str = "AZBLOB_API_VERSION";
pub const AZBLOB_CONTENT_TYPE: &str = "AZBLOB_CONTENT_TYPE";
pub const AZBLOB_ENDPOINT: &str = "AZBLOB_ENDPOINT";

/// AsciiSet of characters a blob path can't carry unencoded in the request URI.
///
/// Unreserved characters and `/` (virtual directories) pass through.
pub static AZURE_PATH_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');
