//! Utility functions and types.

use std::fmt::Debug;

/// Redacts a secret for `Debug` output.
///
/// - Empty input prints `EMPTY`.
/// - Input shorter than 12 characters is fully hidden.
/// - Longer input keeps only its first and last three characters, so two
///   account keys can still be told apart in logs.
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_str())
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let length = self.0.len();
        if length == 0 {
            f.write_str("EMPTY")
        } else if length < 12 || !self.0.is_ascii() {
            f.write_str("***")
        } else {
            f.write_str(&self.0[..3])?;
            f.write_str("***")?;
            f.write_str(&self.0[length - 3..])
        }
    }
}
