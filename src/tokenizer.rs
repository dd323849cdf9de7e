//! Grammar tokenizer for auth47 URIs and challenges.
//!
//! Splits a raw string into `{scheme, nonce, param…}` tokens and enforces
//! the structural rules shared by both parse modes: segment counts, the
//! `auth47` scheme literal, nonce shape, and the closed parameter-name set.
//! Semantic validation of parameter values belongs to the typed field
//! parsers ([`crate::Callback`], [`crate::Resource`], [`crate::Expiry`]).

use std::fmt;

use crate::constants::SCHEME;
use crate::error::ParseErrorKind;
use crate::nonce::Nonce;

/// Parse mode, selecting which parameters are admissible.
///
/// Challenges are the signed payload and must never carry a callback, so
/// the `c` parameter is rejected in [`Mode::Challenge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Full URI: callback mandatory, resource and expiry optional.
    Uri,
    /// Challenge: resource mandatory, callback forbidden.
    Challenge,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uri => write!(f, "URI"),
            Self::Challenge => write!(f, "challenge"),
        }
    }
}

/// The closed set of auth47 parameter names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamName {
    /// `c` — the callback URI
    Callback,
    /// `e` — the expiry timestamp
    Expiry,
    /// `r` — the resource URI
    Resource,
}

impl ParamName {
    /// Returns the single-letter wire token for this parameter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Callback => "c",
            Self::Expiry => "e",
            Self::Resource => "r",
        }
    }

    /// Returns the human-readable field name for error messages.
    #[must_use]
    pub const fn field_name(&self) -> &'static str {
        match self {
            Self::Callback => "callback",
            Self::Expiry => "expiry",
            Self::Resource => "resource",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "c" => Some(Self::Callback),
            "e" => Some(Self::Expiry),
            "r" => Some(Self::Resource),
            _ => None,
        }
    }
}

impl fmt::Display for ParamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Shape-validated tokens with unvalidated parameter values.
pub(crate) struct RawParts<'a> {
    pub nonce: Nonce,
    pub params: Vec<(ParamName, &'a str)>,
}

/// Tokenizes `input` according to the auth47 grammar.
///
/// Grammar: split on `?` (exactly two segments), split the first segment on
/// `://` (exactly two parts), split the query segment on `&` (at least one
/// part), then split each parameter on its first `=` into name and raw
/// value. Any shape violation aborts; no partial token list is returned.
pub(crate) fn tokenize(input: &str, mode: Mode) -> Result<RawParts<'_>, ParseErrorKind> {
    if input.is_empty() {
        return Err(ParseErrorKind::Empty);
    }

    let query_segments: Vec<&str> = input.split('?').collect();
    if query_segments.len() != 2 {
        return Err(ParseErrorKind::MalformedQuery {
            segments: query_segments.len(),
        });
    }

    let scheme_segments: Vec<&str> = query_segments[0].split("://").collect();
    if scheme_segments.len() != 2 {
        return Err(ParseErrorKind::MalformedScheme {
            segments: scheme_segments.len(),
        });
    }

    if scheme_segments[0] != SCHEME {
        return Err(ParseErrorKind::InvalidScheme {
            found: scheme_segments[0].to_string(),
        });
    }

    let nonce = Nonce::parse(scheme_segments[1]).map_err(ParseErrorKind::InvalidNonce)?;

    let mut params: Vec<(ParamName, &str)> = Vec::new();
    for token in query_segments[1].split('&') {
        let Some((name, value)) = token.split_once('=') else {
            return Err(ParseErrorKind::MalformedParam {
                param: token.to_string(),
            });
        };

        let Some(param) = ParamName::from_token(name) else {
            return Err(ParseErrorKind::UnknownParam {
                name: name.to_string(),
            });
        };

        if param == ParamName::Callback && mode == Mode::Challenge {
            return Err(ParseErrorKind::ForbiddenParam { param });
        }

        if params.iter().any(|(seen, _)| *seen == param) {
            return Err(ParseErrorKind::DuplicateParam { param });
        }

        params.push((param, value));
    }

    Ok(RawParts { nonce, params })
}
