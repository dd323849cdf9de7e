//! Callback (`c` parameter) validation.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::{CallbackError, HttpUrlError};
use crate::soroban::SorobanUri;

/// A validated callback endpoint: where the prover should deliver its proof.
///
/// Either a Soroban channel or a plain HTTP(S) URL. The core never dials
/// the callback; it only guarantees the address is well-formed.
///
/// # Examples
///
/// ```
/// use auth47::Callback;
///
/// let cb = Callback::parse("https://samourai.io/auth").unwrap();
/// assert!(cb.is_http());
///
/// let cb = Callback::parse("srbn://123aef4567890aef").unwrap();
/// assert!(cb.is_soroban());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Callback {
    /// An HTTP(S) callback URL (no userinfo, query, or fragment).
    Http(Url),
    /// A Soroban channel address.
    Soroban(SorobanUri),
}

impl Callback {
    /// Parses a callback value.
    ///
    /// A value announcing the `srbn`/`srbns` scheme is parsed as a Soroban
    /// URI; anything else must be an HTTP(S) URL with no userinfo, query,
    /// or fragment.
    ///
    /// # Errors
    ///
    /// Returns `CallbackError` describing the Soroban or HTTP violation.
    pub fn parse(input: &str) -> Result<Self, CallbackError> {
        if input.starts_with("srbn://") || input.starts_with("srbns://") {
            return SorobanUri::parse(input)
                .map(Self::Soroban)
                .map_err(CallbackError::Soroban);
        }
        parse_http_url(input).map(Self::Http).map_err(CallbackError::Http)
    }

    /// Returns true for an HTTP(S) callback.
    #[must_use]
    pub const fn is_http(&self) -> bool {
        matches!(self, Self::Http(_))
    }

    /// Returns true for a Soroban callback.
    #[must_use]
    pub const fn is_soroban(&self) -> bool {
        matches!(self, Self::Soroban(_))
    }

    /// Returns the HTTP URL, if this is an HTTP callback.
    #[must_use]
    pub const fn as_http(&self) -> Option<&Url> {
        match self {
            Self::Http(url) => Some(url),
            Self::Soroban(_) => None,
        }
    }

    /// Returns the Soroban URI, if this is a Soroban callback.
    #[must_use]
    pub const fn as_soroban(&self) -> Option<&SorobanUri> {
        match self {
            Self::Soroban(uri) => Some(uri),
            Self::Http(_) => None,
        }
    }
}

impl fmt::Display for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(url) => write!(f, "{url}"),
            Self::Soroban(uri) => write!(f, "{uri}"),
        }
    }
}

impl FromStr for Callback {
    type Err = CallbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Callback {
    type Error = CallbackError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

/// Parses an HTTP(S) URL and enforces the rules shared by callbacks and
/// resources: `http`/`https` scheme only, no userinfo, no query, no
/// fragment.
pub(crate) fn parse_http_url(input: &str) -> Result<Url, HttpUrlError> {
    let url = Url::parse(input).map_err(|_| HttpUrlError::NotAUrl)?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(HttpUrlError::UnsupportedScheme {
                found: other.to_string(),
            });
        }
    }
    if !url.username().is_empty() || url.password().is_some() {
        return Err(HttpUrlError::ForbiddenUserinfo);
    }
    if url.query().is_some() {
        return Err(HttpUrlError::ForbiddenQuery);
    }
    if url.fragment().is_some() {
        return Err(HttpUrlError::ForbiddenFragment);
    }

    Ok(url)
}
