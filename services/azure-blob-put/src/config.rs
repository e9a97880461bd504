use blobsig_core::Context;
use log::warn;

use crate::connection_string::ConnectionString;
use crate::constants::*;

/// Config carries the non-secret knobs of a Put Blob request.
///
/// Every field has a default that reproduces the classic upload helper
/// byte for byte, so an empty environment signs exactly what the
/// orchestration expects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// `api_version` will be loaded from
    ///
    /// - this field if set explicitly
    /// - env value: [`AZBLOB_API_VERSION`]
    /// - default: `2015-02-21`
    pub api_version: String,
    /// `content_type` will be loaded from
    ///
    /// - this field if set explicitly
    /// - env value: [`AZBLOB_CONTENT_TYPE`]
    /// - default: `text/plain; charset=UTF-8`
    pub content_type: String,
    /// Blob service endpoint without trailing slash, for example
    /// `http://127.0.0.1:10000/devstoreaccount1`.
    ///
    /// - env value: [`AZBLOB_ENDPOINT`]
    /// - default: `https://{account}.blob.core.windows.net`
    pub endpoint: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_version: AZURE_API_VERSION.to_string(),
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            endpoint: None,
        }
    }
}

impl Config {
    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(AZBLOB_API_VERSION).filter(|v| !v.is_empty()) {
            self.api_version = v;
        }

        if let Some(v) = ctx.env_var(AZBLOB_CONTENT_TYPE).filter(|v| !v.is_empty()) {
            self.content_type = v;
        }

        if let Some(v) = ctx.env_var(AZBLOB_ENDPOINT).filter(|v| !v.is_empty()) {
            self.endpoint = Some(v.trim_end_matches('/').to_string());
        } else if let Some(conn_str) = ctx.env_var(AZURE_STORAGE_CONNECTION_STRING) {
            match ConnectionString::parse(&conn_str) {
                Ok(ConnectionString {
                    blob_endpoint: Some(endpoint),
                    ..
                }) => self.endpoint = Some(endpoint.trim_end_matches('/').to_string()),
                Ok(_) => {}
                // The credential provider reports the same error with more context.
                Err(e) => warn!("ignoring endpoint from {AZURE_STORAGE_CONNECTION_STRING}: {e}"),
            }
        }

        self
    }

    /// Set the api version.
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Set the content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Set the blob service endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into().trim_end_matches('/').to_string());
        self
    }

    /// Resolve the blob service endpoint for the given account.
    pub fn endpoint_for(&self, account_name: &str) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => format!("https://{account_name}.{BLOB_ENDPOINT_SUFFIX}"),
        }
    }
}
