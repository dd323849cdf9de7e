//! The auth47 challenge: the payload a prover signs.

use std::fmt;
use std::str::FromStr;

use crate::clock::{Clock, SystemClock};
use crate::error::{ExpiryError, ParseError, ParseErrorKind};
use crate::expiry::Expiry;
use crate::nonce::Nonce;
use crate::resource::Resource;
use crate::tokenizer::{Mode, ParamName, tokenize};
use crate::uri::Auth47Uri;

/// A parsed and validated auth47 challenge.
///
/// The challenge is the string a prover signs: nonce, resource, and an
/// optional expiry. It never carries a callback — the `c` parameter is a
/// parse error here. Validation is time-dependent: an expiry that is not
/// strictly in the future (per the supplied clock) is rejected.
///
/// # Structure
///
/// ```text
/// auth47://{nonce}?r={resource}[&e={expiry}]
/// ```
///
/// # Examples
///
/// ```
/// use auth47::Challenge;
///
/// let challenge = Challenge::parse("auth47://aZrzsdfsfs343432sdf?r=srbn").unwrap();
/// assert_eq!(challenge.nonce().as_str(), "aZrzsdfsfs343432sdf");
/// assert!(challenge.resource().is_soroban());
/// assert!(challenge.expiry().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    nonce: Nonce,
    resource: Resource,
    expiry: Option<Expiry>,
}

impl Challenge {
    /// Parses a challenge against the system clock.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the grammar is violated, a parameter fails
    /// its semantic check, the resource is missing, a callback is present,
    /// or the expiry is not strictly in the future.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Self::parse_with_clock(input, &SystemClock)
    }

    /// Parses a challenge against an injected clock.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Challenge::parse`], with "now" taken from
    /// `clock`.
    pub fn parse_with_clock(input: &str, clock: &impl Clock) -> Result<Self, ParseError> {
        Self::parse_inner(input, clock).map_err(|kind| ParseError {
            input: input.to_string(),
            mode: Mode::Challenge,
            kind,
        })
    }

    /// Projects a challenge out of a full URI by dropping the callback and
    /// resolving the effective resource.
    #[must_use]
    pub fn from_uri(uri: &Auth47Uri) -> Self {
        Self {
            nonce: uri.nonce().clone(),
            resource: uri.effective_resource(),
            expiry: uri.expiry(),
        }
    }

    /// Returns the nonce.
    #[must_use]
    pub const fn nonce(&self) -> &Nonce {
        &self.nonce
    }

    /// Returns the resource.
    #[must_use]
    pub const fn resource(&self) -> &Resource {
        &self.resource
    }

    /// Returns the expiry, if present.
    #[must_use]
    pub const fn expiry(&self) -> Option<Expiry> {
        self.expiry
    }

    /// Returns true if the resource is an HTTP(S) URL.
    #[must_use]
    pub const fn is_http_resource(&self) -> bool {
        self.resource.is_http()
    }

    /// Returns true if the resource is the `srbn` literal.
    #[must_use]
    pub const fn is_soroban_resource(&self) -> bool {
        self.resource.is_soroban()
    }

    /// Round-trips the serialized form through the parser (system clock)
    /// and reports whether it survives, without panicking.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        Self::parse(&self.to_string()).is_ok()
    }

    fn parse_inner(input: &str, clock: &impl Clock) -> Result<Self, ParseErrorKind> {
        let parts = tokenize(input, Mode::Challenge)?;

        let mut resource = None;
        let mut expiry = None;
        for (name, raw) in parts.params {
            match name {
                ParamName::Callback => {
                    return Err(ParseErrorKind::ForbiddenParam { param: name });
                }
                ParamName::Resource => {
                    resource =
                        Some(Resource::parse(raw).map_err(ParseErrorKind::InvalidResource)?);
                }
                ParamName::Expiry => {
                    let value = Expiry::parse(raw).map_err(ParseErrorKind::InvalidExpiry)?;
                    if !value.is_future(clock) {
                        return Err(ParseErrorKind::InvalidExpiry(
                            ExpiryError::Expired,
                        ));
                    }
                    expiry = Some(value);
                }
            }
        }

        let resource = resource.ok_or(ParseErrorKind::MissingParam {
            param: ParamName::Resource,
        })?;

        Ok(Self {
            nonce: parts.nonce,
            resource,
            expiry,
        })
    }
}

impl fmt::Display for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "auth47://{}?r={}", self.nonce, self.resource)?;
        if let Some(expiry) = self.expiry {
            write!(f, "&e={expiry}")?;
        }
        Ok(())
    }
}

impl FromStr for Challenge {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Challenge {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Challenge {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
