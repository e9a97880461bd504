use std::collections::HashMap;

use blobsig_core::{Error, Result};

use crate::constants::BLOB_ENDPOINT_SUFFIX;

// Azurite defaults.
const AZURITE_DEFAULT_STORAGE_ACCOUNT_NAME: &str = "devstoreaccount1";
const AZURITE_DEFAULT_STORAGE_ACCOUNT_KEY: &str =
    "Eby8vdM02xNOcqFlqUwJPLlmEtlCDXJ1OUzFT50uSRZ6IFsuFq2UVErCz4I6tq/K1SZFPTOtr/KBHBeksoGMGw==";
const AZURITE_DEFAULT_BLOB_URI: &str = "http://127.0.0.1:10000";

/// The blob related parts of an [Azure connection string][1].
///
/// [1]: https://learn.microsoft.com/en-us/azure/storage/common/storage-configure-connection-string
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ConnectionString {
    /// `AccountName`
    pub account_name: Option<String>,
    /// `AccountKey`, base64 encoded.
    pub account_key: Option<String>,
    /// `BlobEndpoint`, or the endpoint built from
    /// `DefaultEndpointsProtocol`, `AccountName` and `EndpointSuffix`.
    pub blob_endpoint: Option<String>,
}

impl std::fmt::Debug for ConnectionString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionString")
            .field("account_name", &self.account_name)
            .field(
                "account_key",
                &self.account_key.as_ref().map(blobsig_core::utils::Redact::from),
            )
            .field("blob_endpoint", &self.blob_endpoint)
            .finish()
    }
}

impl ConnectionString {
    /// Parses a connection string like:
    ///
    /// ```txt
    /// AccountName=mystorageaccount;
    /// AccountKey=Eby8vdM02xNOcqFlqUwJPLlmEtlCDXJ1OUzFT50uSRZ6IFsuFq2UVErCz4I6tq/K1SZFPTOtr/KBHBeksoGMGw==;
    /// BlobEndpoint=https://mystorageaccount.blob.core.windows.net
    /// ```
    ///
    /// `UseDevelopmentStorage=true` resolves to the Azurite emulator with its
    /// well-known account, unless the string overrides them.
    pub fn parse(conn_str: &str) -> Result<Self> {
        let key_values = parse_into_key_values(conn_str)?;

        if let Some(development) = collect_development_config(&key_values) {
            return Ok(development);
        }

        Ok(Self {
            account_name: key_values.get("AccountName").cloned(),
            account_key: key_values.get("AccountKey").cloned(),
            blob_endpoint: collect_blob_endpoint(&key_values)?,
        })
    }
}

fn parse_into_key_values(conn_str: &str) -> Result<HashMap<String, String>> {
    conn_str
        .trim()
        .replace('\n', "")
        .split(';')
        .filter(|field| !field.trim().is_empty())
        .map(|field| {
            // Only split on the first `=`, base64 keys end with padding.
            let (key, value) = field.trim().split_once('=').ok_or_else(|| {
                Error::config_invalid(format!(
                    "invalid connection string, expected '=' in field: {}",
                    field.trim()
                ))
            })?;
            Ok((key.to_string(), value.to_string()))
        })
        .collect()
}

fn collect_development_config(key_values: &HashMap<String, String>) -> Option<ConnectionString> {
    if key_values.get("UseDevelopmentStorage").map(String::as_str) != Some("true") {
        return None;
    }

    let account_name = key_values
        .get("AccountName")
        .cloned()
        .unwrap_or_else(|| AZURITE_DEFAULT_STORAGE_ACCOUNT_NAME.to_string());
    let account_key = key_values
        .get("AccountKey")
        .cloned()
        .unwrap_or_else(|| AZURITE_DEFAULT_STORAGE_ACCOUNT_KEY.to_string());
    let proxy_uri = key_values
        .get("DevelopmentStorageProxyUri")
        .map(String::as_str)
        .unwrap_or(AZURITE_DEFAULT_BLOB_URI);

    Some(ConnectionString {
        blob_endpoint: Some(format!("{proxy_uri}/{account_name}")),
        account_name: Some(account_name),
        account_key: Some(account_key),
    })
}

fn collect_blob_endpoint(key_values: &HashMap<String, String>) -> Result<Option<String>> {
    if let Some(endpoint) = key_values.get("BlobEndpoint") {
        return Ok(Some(endpoint.clone()));
    }

    let Some(account_name) = key_values.get("AccountName") else {
        return Ok(None);
    };
    let endpoint_suffix = key_values
        .get("EndpointSuffix")
        .map(String::as_str)
        .unwrap_or("core.windows.net");

    let protocol = key_values
        .get("DefaultEndpointsProtocol")
        .map(String::as_str)
        .unwrap_or("https");
    if protocol != "http" && protocol != "https" {
        return Err(Error::config_invalid(format!(
            "invalid DefaultEndpointsProtocol: {protocol}"
        )));
    }

    // `blob.core.windows.net` is `blob.` + the default suffix.
    let host_suffix = if endpoint_suffix == "core.windows.net" {
        BLOB_ENDPOINT_SUFFIX.to_string()
    } else {
        format!("blob.{endpoint_suffix}")
    };

    Ok(Some(format!("{protocol}://{account_name}.{host_suffix}")))
}
