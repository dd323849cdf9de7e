//! Nonce type for auth47 URIs and challenges.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::error::NonceError;

/// A validated auth47 nonce.
///
/// Nonces are non-empty ASCII-alphanumeric strings chosen by the verifier
/// to make each issued challenge unique.
///
/// # Examples
///
/// ```
/// use auth47::Nonce;
///
/// let nonce = Nonce::parse("aZrzsdfsfs343432sdf").unwrap();
/// assert_eq!(nonce.as_str(), "aZrzsdfsfs343432sdf");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Nonce(String);

impl Nonce {
    /// Parses a nonce from a string.
    ///
    /// # Errors
    ///
    /// Returns `NonceError` if the input is empty or contains a character
    /// outside `[A-Za-z0-9]`.
    pub fn parse(input: &str) -> Result<Self, NonceError> {
        if input.is_empty() {
            return Err(NonceError::Empty);
        }
        for (i, c) in input.chars().enumerate() {
            if !c.is_ascii_alphanumeric() {
                return Err(NonceError::InvalidChar { char: c, position: i });
            }
        }
        Ok(Self(input.to_string()))
    }

    /// Returns the nonce as a string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Nonce {
    type Err = NonceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Nonce {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Nonce {
    type Error = NonceError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl Deref for Nonce {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Nonce {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Nonce {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
