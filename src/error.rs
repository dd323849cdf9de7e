//! Error types for auth47 URI and challenge parsing.

use std::fmt;

use crate::tokenizer::{Mode, ParamName};

/// Errors that can occur when parsing an auth47 URI or challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The mode the parser was running in
    pub mode: Mode,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

/// Specific parsing error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input is empty
    Empty,
    /// Wrong number of `?`-separated segments (exactly 2 required)
    MalformedQuery {
        /// Number of segments found
        segments: usize,
    },
    /// Wrong number of `://`-separated segments (exactly 2 required)
    MalformedScheme {
        /// Number of segments found
        segments: usize,
    },
    /// Scheme is not the `auth47` literal
    InvalidScheme {
        /// The scheme that was found
        found: String,
    },
    /// Nonce validation failed
    InvalidNonce(NonceError),
    /// A parameter token has no `=` separator
    MalformedParam {
        /// The raw parameter token
        param: String,
    },
    /// Parameter name outside the closed `{c, e, r}` set
    UnknownParam {
        /// The unrecognized name
        name: String,
    },
    /// Parameter is not admissible in the current mode
    ForbiddenParam {
        /// The offending parameter
        param: ParamName,
    },
    /// A required parameter is absent
    MissingParam {
        /// The absent parameter
        param: ParamName,
    },
    /// The same parameter appears more than once
    DuplicateParam {
        /// The repeated parameter
        param: ParamName,
    },
    /// Callback validation failed
    InvalidCallback(CallbackError),
    /// Resource validation failed
    InvalidResource(ResourceError),
    /// Expiry validation failed
    InvalidExpiry(ExpiryError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.mode, self.kind)
    }
}

impl std::error::Error for ParseError {}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "input is empty"),
            Self::MalformedQuery { segments } => {
                write!(
                    f,
                    "expected exactly 2 '?'-separated segments, found {segments}"
                )
            }
            Self::MalformedScheme { segments } => {
                write!(
                    f,
                    "expected exactly 2 '://'-separated segments, found {segments}"
                )
            }
            Self::InvalidScheme { found } => {
                write!(f, "expected scheme \"auth47\", found \"{found}\"")
            }
            Self::InvalidNonce(e) => write!(f, "invalid nonce: {e}"),
            Self::MalformedParam { param } => {
                write!(f, "parameter \"{param}\" is missing an '=' separator")
            }
            Self::UnknownParam { name } => write!(f, "unknown parameter \"{name}\""),
            Self::ForbiddenParam { param } => {
                write!(f, "unwanted parameter \"{param}\" is present")
            }
            Self::MissingParam { param } => write!(f, "missing {}", param.field_name()),
            Self::DuplicateParam { param } => write!(f, "duplicate parameter \"{param}\""),
            Self::InvalidCallback(e) => write!(f, "callback: {e}"),
            Self::InvalidResource(e) => write!(f, "resource: {e}"),
            Self::InvalidExpiry(e) => write!(f, "expiry: {e}"),
        }
    }
}

/// Errors for nonce validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NonceError {
    /// Nonce is empty
    Empty,
    /// Invalid character (not ASCII alphanumeric)
    InvalidChar {
        /// The invalid character
        char: char,
        /// Position in the input
        position: usize,
    },
}

impl fmt::Display for NonceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "nonce cannot be empty"),
            Self::InvalidChar { char, position } => {
                write!(
                    f,
                    "invalid character '{char}' at position {position}; only ASCII letters and digits allowed"
                )
            }
        }
    }
}

impl std::error::Error for NonceError {}

/// Errors for Soroban URI parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SorobanUriError {
    /// URI is empty
    Empty,
    /// Wrong number of `://` separators (exactly one required)
    MalformedSeparator {
        /// Number of separators found
        count: usize,
    },
    /// Scheme is not `srbn` or `srbns`
    UnsupportedScheme {
        /// The scheme that was found
        found: String,
    },
    /// Channel is not exactly 16 characters
    InvalidChannelLength {
        /// Actual channel length
        actual: usize,
    },
    /// Channel contains a non-hex character
    InvalidChannelChar {
        /// The invalid character
        char: char,
        /// Position in the channel
        position: usize,
    },
    /// Gateway component is invalid
    InvalidGateway {
        /// Reason for invalidity
        reason: &'static str,
    },
}

impl fmt::Display for SorobanUriError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "input is empty"),
            Self::MalformedSeparator { count } => {
                write!(f, "expected exactly one '://' separator, found {count}")
            }
            Self::UnsupportedScheme { found } => {
                write!(f, "unsupported scheme \"{found}\"; expected \"srbn\" or \"srbns\"")
            }
            Self::InvalidChannelLength { actual } => {
                write!(f, "channel must be exactly 16 hex characters, got {actual}")
            }
            Self::InvalidChannelChar { char, position } => {
                write!(
                    f,
                    "invalid character '{char}' at position {position} in channel; only hex digits allowed"
                )
            }
            Self::InvalidGateway { reason } => write!(f, "invalid gateway: {reason}"),
        }
    }
}

impl std::error::Error for SorobanUriError {}

/// Violations of the HTTP(S) URL rules shared by callbacks and resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpUrlError {
    /// Value does not parse as a URL at all
    NotAUrl,
    /// URL scheme is not `http` or `https`
    UnsupportedScheme {
        /// The scheme that was found
        found: String,
    },
    /// URL carries userinfo (username or password)
    ForbiddenUserinfo,
    /// URL carries a query component
    ForbiddenQuery,
    /// URL carries a fragment
    ForbiddenFragment,
}

impl fmt::Display for HttpUrlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAUrl => write!(f, "not a valid URL"),
            Self::UnsupportedScheme { found } => {
                write!(f, "unsupported scheme \"{found}\"; expected \"http\" or \"https\"")
            }
            Self::ForbiddenUserinfo => write!(f, "URL must not contain userinfo"),
            Self::ForbiddenQuery => write!(f, "URL must not contain a query"),
            Self::ForbiddenFragment => write!(f, "URL must not contain a fragment"),
        }
    }
}

impl std::error::Error for HttpUrlError {}

/// Errors for callback (`c` parameter) validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackError {
    /// Value announced a Soroban scheme but is not a valid Soroban URI
    Soroban(SorobanUriError),
    /// Value is not an acceptable HTTP(S) URL
    Http(HttpUrlError),
}

impl fmt::Display for CallbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Soroban(e) => write!(f, "invalid Soroban URI: {e}"),
            Self::Http(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CallbackError {}

/// Errors for resource (`r` parameter) validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceError {
    /// Value is neither the `srbn` literal nor a parseable URL
    NotAUrl,
    /// URL scheme is not `http` or `https`
    UnsupportedScheme {
        /// The scheme that was found
        found: String,
    },
    /// Resource URL carries userinfo
    ForbiddenUserinfo,
    /// Resource URL carries a query component
    ForbiddenQuery,
    /// Resource URL carries a fragment
    ForbiddenFragment,
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAUrl => {
                write!(f, "expected the literal \"srbn\" or a valid http(s) URL")
            }
            Self::UnsupportedScheme { found } => {
                write!(
                    f,
                    "unsupported scheme \"{found}\"; resources must be \"srbn\" or http(s)"
                )
            }
            Self::ForbiddenUserinfo => write!(f, "resource URL must not contain userinfo"),
            Self::ForbiddenQuery => write!(f, "resource URL must not contain a query"),
            Self::ForbiddenFragment => write!(f, "resource URL must not contain a fragment"),
        }
    }
}

impl std::error::Error for ResourceError {}

/// Errors for expiry (`e` parameter) validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpiryError {
    /// Value is not a base-10 integer
    NotAnInteger,
    /// Timestamp is not strictly in the future
    Expired,
}

impl fmt::Display for ExpiryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnInteger => write!(f, "expected an integer value"),
            Self::Expired => write!(f, "expired proof"),
        }
    }
}

impl std::error::Error for ExpiryError {}
