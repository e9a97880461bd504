use crate::constants::*;
use crate::Config;

/// PutBlobRequest describes the upload that is about to be signed.
///
/// All fields are taken verbatim. Nothing is validated or normalized here:
/// an empty or odd value simply produces a signature Azure will reject.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PutBlobRequest {
    /// Azure storage account name.
    pub account_name: String,
    /// Target container.
    pub container_name: String,
    /// Target blob, may contain `/` for virtual directories.
    pub blob_name: String,
    /// `Content-Length` of the upcoming PUT, never parsed.
    pub content_length: String,
    /// `Content-Type` of the upcoming PUT.
    pub content_type: String,
    /// `x-ms-blob-type` of the upcoming PUT.
    pub blob_type: String,
    /// `x-ms-version` of the upcoming PUT.
    pub api_version: String,
}

impl PutBlobRequest {
    /// Create a request with the default content type, blob type and api version.
    pub fn new(
        account_name: impl Into<String>,
        container_name: impl Into<String>,
        blob_name: impl Into<String>,
        content_length: impl Into<String>,
    ) -> Self {
        Self {
            account_name: account_name.into(),
            container_name: container_name.into(),
            blob_name: blob_name.into(),
            content_length: content_length.into(),
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            blob_type: DEFAULT_BLOB_TYPE.to_string(),
            api_version: AZURE_API_VERSION.to_string(),
        }
    }

    /// Apply the configured api version and content type.
    pub fn with_config(mut self, config: &Config) -> Self {
        self.api_version = config.api_version.clone();
        self.content_type = config.content_type.clone();
        self
    }
}
