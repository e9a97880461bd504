//! Time related utils.

use crate::Error;
use chrono::NaiveDateTime;
use chrono::Utc;
use std::fmt::Debug;

/// DateTime is the alias for `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// HTTP date format: "Wed, 01 Jan 2025 12:00:00 GMT"
const HTTP_DATE: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into http date: `Sun, 06 Nov 1994 08:49:37 GMT`
///
/// ## Note
///
/// HTTP date is slightly different from RFC2822.
///
/// - Timezone is fixed to GMT.
/// - Day must be 2 digit.
pub fn format_http_date(t: DateTime) -> String {
    t.format(HTTP_DATE).to_string()
}

/// Parse http date like `Sun, 06 Nov 1994 08:49:37 GMT` into datetime.
pub fn parse_http_date(s: &str) -> crate::Result<DateTime> {
    let t = NaiveDateTime::parse_from_str(s, HTTP_DATE)
        .map_err(|e| Error::invalid_arguments(format!("invalid http date: {s}")).with_source(e))?;
    Ok(t.and_utc())
}

/// Clock is the source of the signing time.
///
/// Signers must read the time from here instead of calling [`now`]
/// directly, so that tests can pin the time.
pub trait Clock: Debug + Send + Sync + 'static {
    /// Return the current time.
    fn now(&self) -> DateTime;
}

/// SystemClock reads the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime {
        now()
    }
}

/// FixedClock always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime);

impl Clock for FixedClock {
    fn now(&self) -> DateTime {
        self.0
    }
}
