//! The consumed cryptographic capability.
//!
//! The verifier does not implement secp256k1. Message-signature checking
//! and BIP47 notification-address derivation are injected through
//! [`CryptoBackend`], the way the original protocol implementations accept
//! an elliptic-curve module from their host application.

use std::fmt;

use crate::network::Network;

/// An opaque failure inside the crypto backend.
///
/// The verifier collapses every backend failure into `invalid signature`,
/// so the reason is for the backend's own diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendError {
    reason: String,
}

impl BackendError {
    /// Creates a backend error with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Returns the reason.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "crypto backend error: {}", self.reason)
    }
}

impl std::error::Error for BackendError {}

/// Signature verification and payment-code derivation, implemented
/// elsewhere and consumed here as a black box.
pub trait CryptoBackend {
    /// Verifies a Bitcoin signed message.
    ///
    /// The scheme is the standard one: double-SHA256 over the network's
    /// `message_prefix` plus the length-prefixed message, with ECDSA
    /// public-key recovery (or direct verification) against the given
    /// address. `signature_base64` is the compact recoverable signature in
    /// base64.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the signature cannot be decoded or
    /// recovery fails outright. Returning `Ok(false)` and returning an
    /// error are treated identically by the verifier.
    fn verify_message(
        &self,
        message: &str,
        address: &str,
        signature_base64: &str,
        message_prefix: &str,
    ) -> Result<bool, BackendError>;

    /// Derives the deterministic notification address of a BIP47 payment
    /// code for the given network.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the payment code cannot be deserialized
    /// or the derivation fails.
    fn notification_address(
        &self,
        payment_code: &str,
        network: Network,
    ) -> Result<String, BackendError>;
}
