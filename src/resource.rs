//! Resource (`r` parameter) validation.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::callback::{Callback, parse_http_url};
use crate::constants::SOROBAN_SCHEME;
use crate::error::{HttpUrlError, ResourceError};

/// The resource a challenge grants access to.
///
/// Either the literal `srbn` (access negotiated over the Soroban channel)
/// or an HTTP(S) URL with no query component. A Soroban *URI* is not a
/// valid resource; only the bare literal is.
///
/// Fragments are rejected: historical validators disagreed on them, and a
/// fragment has no place in a string that ends up signed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    /// The literal `srbn`.
    Soroban,
    /// An HTTP(S) resource URL.
    Http(Url),
}

impl Resource {
    /// Parses a resource value.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError` if the value is neither the `srbn` literal
    /// nor an HTTP(S) URL free of userinfo, query, and fragment.
    pub fn parse(input: &str) -> Result<Self, ResourceError> {
        if input == SOROBAN_SCHEME {
            return Ok(Self::Soroban);
        }
        match parse_http_url(input) {
            Ok(url) => Ok(Self::Http(url)),
            Err(HttpUrlError::NotAUrl) => Err(ResourceError::NotAUrl),
            Err(HttpUrlError::UnsupportedScheme { found }) => {
                Err(ResourceError::UnsupportedScheme { found })
            }
            Err(HttpUrlError::ForbiddenUserinfo) => Err(ResourceError::ForbiddenUserinfo),
            Err(HttpUrlError::ForbiddenQuery) => Err(ResourceError::ForbiddenQuery),
            Err(HttpUrlError::ForbiddenFragment) => Err(ResourceError::ForbiddenFragment),
        }
    }

    /// Derives the effective resource from a callback when no explicit
    /// `r` parameter was given: an HTTP callback doubles as the resource,
    /// a Soroban callback implies the `srbn` literal.
    #[must_use]
    pub fn from_callback(callback: &Callback) -> Self {
        match callback {
            Callback::Http(url) => Self::Http(url.clone()),
            Callback::Soroban(_) => Self::Soroban,
        }
    }

    /// Returns true for the `srbn` literal.
    #[must_use]
    pub const fn is_soroban(&self) -> bool {
        matches!(self, Self::Soroban)
    }

    /// Returns true for an HTTP(S) resource.
    #[must_use]
    pub const fn is_http(&self) -> bool {
        matches!(self, Self::Http(_))
    }

    /// Returns the URL, if this is an HTTP resource.
    #[must_use]
    pub const fn as_http(&self) -> Option<&Url> {
        match self {
            Self::Http(url) => Some(url),
            Self::Soroban => None,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Soroban => write!(f, "{SOROBAN_SCHEME}"),
            Self::Http(url) => write!(f, "{url}"),
        }
    }
}

impl FromStr for Resource {
    type Err = ResourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Resource {
    type Error = ResourceError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_srbn_literal() {
        let resource = Resource::parse("srbn").unwrap();
        assert!(resource.is_soroban());
        assert!(!resource.is_http());
    }

    #[test]
    fn parse_http_url() {
        let resource = Resource::parse("https://samourai.io/resource1").unwrap();
        assert!(resource.is_http());
        assert_eq!(resource.as_http().unwrap().path(), "/resource1");
    }

    #[test]
    fn soroban_uri_is_not_a_resource() {
        // The literal is accepted; a full channel URI is not.
        let result = Resource::parse("srbn://123aef4567890aef");
        assert!(matches!(
            result,
            Err(ResourceError::UnsupportedScheme { .. })
        ));
    }

    #[test]
    fn srbns_literal_is_not_a_resource() {
        assert!(matches!(
            Resource::parse("srbns"),
            Err(ResourceError::NotAUrl)
        ));
    }

    #[test]
    fn parse_ftp_fails() {
        assert!(matches!(
            Resource::parse("ftp://samourai.io"),
            Err(ResourceError::UnsupportedScheme { .. })
        ));
    }

    #[test]
    fn parse_url_with_query_fails() {
        assert!(matches!(
            Resource::parse("http://samourai.io/?arg=notgood"),
            Err(ResourceError::ForbiddenQuery)
        ));
    }

    #[test]
    fn parse_url_with_fragment_fails() {
        assert!(matches!(
            Resource::parse("http://samourai.io/test#hash"),
            Err(ResourceError::ForbiddenFragment)
        ));
    }

    #[test]
    fn from_http_callback_reuses_url() {
        let callback = Callback::parse("https://samourai.io/cb").unwrap();
        let resource = Resource::from_callback(&callback);
        assert_eq!(resource.as_http().unwrap().as_str(), "https://samourai.io/cb");
    }

    #[test]
    fn from_soroban_callback_is_literal() {
        let callback = Callback::parse("srbn://123aef4567890aef").unwrap();
        assert!(Resource::from_callback(&callback).is_soroban());
    }

    #[test]
    fn display_srbn_literal() {
        assert_eq!(Resource::Soroban.to_string(), "srbn");
    }
}
