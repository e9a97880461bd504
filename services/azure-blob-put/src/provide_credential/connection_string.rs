use blobsig_core::{Context, Error, ProvideCredential};

use crate::connection_string::ConnectionString;
use crate::constants::AZURE_STORAGE_CONNECTION_STRING;
use crate::credential::Credential;

/// Load the account key from `AZURE_STORAGE_CONNECTION_STRING`.
///
/// A connection string without `AccountKey` yields no credential; a
/// malformed one is an error.
#[derive(Clone, Debug, Default)]
pub struct ConnectionStringCredentialProvider {
    conn_str: Option<String>,
}

impl ConnectionStringCredentialProvider {
    /// Create a provider reading the connection string from env.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given connection string instead of reading env.
    pub fn with_connection_string(mut self, conn_str: impl Into<String>) -> Self {
        self.conn_str = Some(conn_str.into());
        self
    }
}

impl ProvideCredential for ConnectionStringCredentialProvider {
    type Credential = Credential;

    fn provide_credential(&self, ctx: &Context) -> blobsig_core::Result<Option<Self::Credential>> {
        let Some(conn_str) = self
            .conn_str
            .clone()
            .or_else(|| ctx.env_var(AZURE_STORAGE_CONNECTION_STRING))
            .filter(|v| !v.trim().is_empty())
        else {
            return Ok(None);
        };

        let parsed = ConnectionString::parse(&conn_str).map_err(|e| {
            Error::config_invalid(format!("failed to parse {AZURE_STORAGE_CONNECTION_STRING}"))
                .with_source(e)
        })?;

        Ok(parsed
            .account_key
            .filter(|v| !v.is_empty())
            .map(|v| Credential::with_shared_key(&v)))
    }
}
