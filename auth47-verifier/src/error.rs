//! Error types for proof decoding and verification.

use std::fmt;

use auth47::{NonceError, ParseError};

/// Errors from the structural decode of a proof object.
///
/// Every message is prefixed with the offending field name, giving a
/// single human-readable path to the first failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProofError {
    /// The proof is not a JSON object
    NotAnObject,
    /// A required field was not provided
    MissingField {
        /// Name of the missing field
        field: &'static str,
    },
    /// A field holds a non-string value
    NotAString {
        /// Name of the field
        field: &'static str,
    },
    /// `auth47_response` is not the `1.0` literal
    InvalidVersion {
        /// The value that was found
        found: String,
    },
    /// The embedded challenge string failed validation
    InvalidChallenge(ParseError),
    /// `signature` is empty or not base64
    InvalidSignature,
    /// `nym` is not a well-formed payment code
    InvalidNym,
    /// `address` is not a well-formed Bitcoin address
    InvalidAddress,
    /// Neither `nym` nor `address` is present
    MissingIdentity,
    /// Both `nym` and `address` are present
    AmbiguousIdentity,
}

impl fmt::Display for ProofError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject => write!(f, "expected a proof object"),
            Self::MissingField { field } => write!(f, "missing property \"{field}\""),
            Self::NotAString { field } => write!(f, "\"{field}\": expected a string"),
            Self::InvalidVersion { found } => {
                write!(f, "\"auth47_response\": received {found}, expected 1.0")
            }
            Self::InvalidChallenge(e) => write!(f, "\"challenge\": {e}"),
            Self::InvalidSignature => {
                write!(f, "\"signature\": expected a non-empty base64 string")
            }
            Self::InvalidNym => write!(f, "\"nym\": expected a valid payment code"),
            Self::InvalidAddress => {
                write!(f, "\"address\": expected a valid Bitcoin address")
            }
            Self::MissingIdentity => write!(f, "missing property \"nym\" or \"address\""),
            Self::AmbiguousIdentity => {
                write!(f, "properties \"nym\" and \"address\" are mutually exclusive")
            }
        }
    }
}

impl std::error::Error for ProofError {}

/// Errors from `verify_proof`.
///
/// Cryptographic failures are deliberately undifferentiated: a bad
/// signature, a malformed payment code, and a failed derivation all
/// surface as the same `invalid signature`, so a prober learns nothing
/// about *why* a proof was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    /// The proof failed structural decoding
    Proof(ProofError),
    /// The signature did not verify
    InvalidSignature,
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Proof(e) => write!(f, "{e}"),
            Self::InvalidSignature => write!(f, "invalid signature"),
        }
    }
}

impl std::error::Error for VerifyError {}

impl From<ProofError> for VerifyError {
    fn from(e: ProofError) -> Self {
        Self::Proof(e)
    }
}

/// Errors from `generate_uri`.
///
/// Issuing a malformed challenge is itself a security defect, so these
/// fail loudly instead of producing a partial URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The nonce argument is not alphanumeric
    InvalidNonce(NonceError),
    /// The resource argument is empty
    EmptyResource,
    /// The expiry argument is not strictly in the future
    PastExpiry,
    /// The assembled URI does not re-parse
    Malformed(ParseError),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNonce(e) => write!(f, "nonce: {e}"),
            Self::EmptyResource => write!(f, "resource: expected a non-empty string"),
            Self::PastExpiry => write!(f, "expires: expected a future date"),
            Self::Malformed(e) => write!(f, "generated URI failed validation: {e}"),
        }
    }
}

impl std::error::Error for GenerateError {}
