//! Expiry timestamp for auth47 URIs and challenges.

use std::fmt;
use std::str::FromStr;

use crate::clock::Clock;
use crate::error::ExpiryError;

/// An expiry timestamp in unix seconds.
///
/// Parsing is strict base-10: fractional or scientific notation fails.
/// Whether the timestamp must lie in the future depends on context —
/// a bare [`crate::Auth47Uri`] only records it, while
/// [`crate::Challenge`] validation requires it to be strictly greater
/// than the clock's "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Expiry(i64);

impl Expiry {
    /// Parses an expiry from its decimal string form.
    ///
    /// # Errors
    ///
    /// Returns `ExpiryError::NotAnInteger` if the value is not a base-10
    /// integer.
    pub fn parse(input: &str) -> Result<Self, ExpiryError> {
        input
            .parse::<i64>()
            .map(Self)
            .map_err(|_| ExpiryError::NotAnInteger)
    }

    /// Creates an expiry from a unix timestamp in seconds.
    #[must_use]
    pub const fn from_timestamp(secs: i64) -> Self {
        Self(secs)
    }

    /// Returns the timestamp in unix seconds.
    #[must_use]
    pub const fn timestamp(&self) -> i64 {
        self.0
    }

    /// Returns true if the timestamp is strictly greater than the clock's
    /// current time.
    pub fn is_future(&self, clock: &impl Clock) -> bool {
        self.0 > clock.now_unix()
    }
}

impl fmt::Display for Expiry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Expiry {
    type Err = ExpiryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<i64> for Expiry {
    fn from(secs: i64) -> Self {
        Self(secs)
    }
}
