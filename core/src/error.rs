use std::fmt;
use thiserror::Error;

/// The error type for blobsig operations
#[derive(Error, Debug)]
#[error("{kind}: {message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Inputs can't be rendered into a valid request (bad URI, bad header value)
    InvalidArguments,

    /// The account key is not valid base64
    InvalidKeyEncoding,

    /// No usable credential could be loaded
    CredentialInvalid,

    /// Configuration error (malformed connection string, invalid values)
    ConfigInvalid,

    /// Unexpected errors
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

// Convenience constructors
impl Error {
    /// Create an invalid arguments error
    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArguments, message)
    }

    /// Create an invalid key encoding error
    pub fn invalid_key_encoding(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidKeyEncoding, message)
    }

    /// Create a credential invalid error
    pub fn credential_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CredentialInvalid, message)
    }

    /// Create a config invalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidArguments => write!(f, "invalid arguments"),
            ErrorKind::InvalidKeyEncoding => write!(f, "invalid key encoding"),
            ErrorKind::CredentialInvalid => write!(f, "invalid credentials"),
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Self::invalid_arguments(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::invalid_arguments(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::uri::InvalidUri> for Error {
    fn from(err: http::uri::InvalidUri) -> Self {
        Self::invalid_arguments(err.to_string()).with_source(anyhow::Error::from(err))
    }
}
