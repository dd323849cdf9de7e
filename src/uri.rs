//! The full auth47 URI: the artifact a verifier issues.

use std::fmt;
use std::str::FromStr;

use crate::callback::Callback;
use crate::challenge::Challenge;
use crate::error::{ParseError, ParseErrorKind};
use crate::expiry::Expiry;
use crate::nonce::Nonce;
use crate::resource::Resource;
use crate::tokenizer::{Mode, ParamName, tokenize};

/// A parsed and validated auth47 URI.
///
/// The URI is what a verifier hands to a prover: a nonce, a mandatory
/// callback, and an optional resource and expiry. Dropping the callback
/// and resolving the effective resource narrows it to a [`Challenge`].
///
/// Unlike challenge validation, parsing a bare URI never consults the
/// clock — the expiry is recorded as-is.
///
/// # Structure
///
/// ```text
/// auth47://{nonce}?c={callback}[&r={resource}][&e={expiry}]
/// ```
///
/// # Examples
///
/// ```
/// use auth47::Auth47Uri;
///
/// let uri = Auth47Uri::parse(
///     "auth47://aZrzsdfsfs343432sdf?c=srbn://123aef4567890aef",
/// ).unwrap();
/// assert!(uri.is_soroban_callback());
/// assert!(uri.to_challenge().is_soroban_resource());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Auth47Uri {
    nonce: Nonce,
    callback: Callback,
    resource: Option<Resource>,
    expiry: Option<Expiry>,
}

impl Auth47Uri {
    /// Parses an auth47 URI from a string.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the grammar is violated, a parameter fails
    /// its semantic check, or the callback is missing.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Self::parse_inner(input).map_err(|kind| ParseError {
            input: input.to_string(),
            mode: Mode::Uri,
            kind,
        })
    }

    /// Creates a URI from its components.
    #[must_use]
    pub const fn new(
        nonce: Nonce,
        callback: Callback,
        resource: Option<Resource>,
        expiry: Option<Expiry>,
    ) -> Self {
        Self {
            nonce,
            callback,
            resource,
            expiry,
        }
    }

    /// Returns the nonce.
    #[must_use]
    pub const fn nonce(&self) -> &Nonce {
        &self.nonce
    }

    /// Returns the callback.
    #[must_use]
    pub const fn callback(&self) -> &Callback {
        &self.callback
    }

    /// Returns the explicitly declared resource, if any.
    #[must_use]
    pub const fn resource(&self) -> Option<&Resource> {
        self.resource.as_ref()
    }

    /// Returns the expiry, if present.
    #[must_use]
    pub const fn expiry(&self) -> Option<Expiry> {
        self.expiry
    }

    /// Resolves the effective resource: the declared `r` parameter if
    /// present, otherwise derived from the callback (an HTTP callback is
    /// its own resource, a Soroban callback implies `srbn`).
    #[must_use]
    pub fn effective_resource(&self) -> Resource {
        match &self.resource {
            Some(resource) => resource.clone(),
            None => Resource::from_callback(&self.callback),
        }
    }

    /// Returns true if the callback is an HTTP(S) URL.
    #[must_use]
    pub const fn is_http_callback(&self) -> bool {
        self.callback.is_http()
    }

    /// Returns true if the callback is a Soroban channel.
    #[must_use]
    pub const fn is_soroban_callback(&self) -> bool {
        self.callback.is_soroban()
    }

    /// Returns true if the effective resource is an HTTP(S) URL.
    #[must_use]
    pub fn is_http_resource(&self) -> bool {
        self.effective_resource().is_http()
    }

    /// Returns true if the effective resource is the `srbn` literal.
    #[must_use]
    pub fn is_soroban_resource(&self) -> bool {
        self.effective_resource().is_soroban()
    }

    /// Narrows this URI to the challenge the prover signs.
    #[must_use]
    pub fn to_challenge(&self) -> Challenge {
        Challenge::from_uri(self)
    }

    /// Round-trips the serialized form through the parser and reports
    /// whether it survives, without panicking.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        Self::parse(&self.to_string()).is_ok()
    }

    fn parse_inner(input: &str) -> Result<Self, ParseErrorKind> {
        let parts = tokenize(input, Mode::Uri)?;

        let mut callback = None;
        let mut resource = None;
        let mut expiry = None;
        for (name, raw) in parts.params {
            match name {
                ParamName::Callback => {
                    callback =
                        Some(Callback::parse(raw).map_err(ParseErrorKind::InvalidCallback)?);
                }
                ParamName::Resource => {
                    resource =
                        Some(Resource::parse(raw).map_err(ParseErrorKind::InvalidResource)?);
                }
                ParamName::Expiry => {
                    expiry = Some(Expiry::parse(raw).map_err(ParseErrorKind::InvalidExpiry)?);
                }
            }
        }

        let callback = callback.ok_or(ParseErrorKind::MissingParam {
            param: ParamName::Callback,
        })?;

        Ok(Self {
            nonce: parts.nonce,
            callback,
            resource,
            expiry,
        })
    }
}

impl fmt::Display for Auth47Uri {
    /// Serializes with parameters in the fixed order `c`, `r`, `e` so that
    /// signatures over the serialized string are deterministic.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "auth47://{}?c={}", self.nonce, self.callback)?;
        if let Some(resource) = &self.resource {
            write!(f, "&r={resource}")?;
        }
        if let Some(expiry) = self.expiry {
            write!(f, "&e={expiry}")?;
        }
        Ok(())
    }
}

impl FromStr for Auth47Uri {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Auth47Uri {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Auth47Uri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Auth47Uri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
