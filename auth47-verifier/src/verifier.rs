//! The auth47 verifier: issue URIs, accept proofs.

use chrono::{DateTime, Utc};
use serde_json::Value;

use auth47::{Auth47Uri, Callback, CallbackError, Clock, Nonce, SystemClock};

use crate::backend::CryptoBackend;
use crate::error::{GenerateError, VerifyError};
use crate::network::Network;
use crate::proof::{ProofContainer, ValidatedProof};

/// An expiry argument for [`Auth47Verifier::generate_uri`]: either unix
/// seconds or a concrete date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryArg {
    /// Unix timestamp in seconds.
    Timestamp(i64),
    /// A date, truncated to whole seconds.
    Date(DateTime<Utc>),
}

impl ExpiryArg {
    /// Returns the argument as unix seconds.
    #[must_use]
    pub fn timestamp(&self) -> i64 {
        match self {
            Self::Timestamp(secs) => *secs,
            Self::Date(date) => date.timestamp(),
        }
    }
}

impl From<i64> for ExpiryArg {
    fn from(secs: i64) -> Self {
        Self::Timestamp(secs)
    }
}

impl From<DateTime<Utc>> for ExpiryArg {
    fn from(date: DateTime<Utc>) -> Self {
        Self::Date(date)
    }
}

/// Issues auth47 URIs and verifies returned proofs.
///
/// The verifier holds one immutable, pre-validated callback URI — its
/// construction fails on an invalid one — plus the injected crypto
/// backend and clock. It carries no other state, so concurrent
/// verification calls need no locking.
///
/// # Example
///
/// ```
/// use auth47_verifier::{Auth47Verifier, BackendError, CryptoBackend, Network};
///
/// struct Backend;
///
/// impl CryptoBackend for Backend {
///     fn verify_message(&self, _m: &str, _a: &str, _s: &str, _p: &str)
///         -> Result<bool, BackendError> {
///         Ok(true) // real implementations check the recoverable signature
///     }
///     fn notification_address(&self, _pc: &str, _n: Network)
///         -> Result<String, BackendError> {
///         Ok("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa".into())
///     }
/// }
///
/// let verifier = Auth47Verifier::new("https://samourai.io/auth", Backend).unwrap();
/// let uri = verifier.generate_uri("aZrzsdfsfs343432sdf", None, None).unwrap();
/// assert_eq!(uri, "auth47://aZrzsdfsfs343432sdf?c=https://samourai.io/auth");
/// ```
#[derive(Debug, Clone)]
pub struct Auth47Verifier<B, C = SystemClock> {
    callback: Callback,
    backend: B,
    clock: C,
}

impl<B: CryptoBackend> Auth47Verifier<B, SystemClock> {
    /// Creates a verifier with the system clock.
    ///
    /// # Errors
    ///
    /// Returns `CallbackError` if `callback_uri` is not a valid Soroban or
    /// HTTP(S) callback.
    pub fn new(callback_uri: &str, backend: B) -> Result<Self, CallbackError> {
        Self::with_clock(callback_uri, backend, SystemClock)
    }
}

impl<B: CryptoBackend, C: Clock> Auth47Verifier<B, C> {
    /// Creates a verifier with an injected clock.
    ///
    /// # Errors
    ///
    /// Returns `CallbackError` if `callback_uri` is not a valid Soroban or
    /// HTTP(S) callback.
    pub fn with_clock(callback_uri: &str, backend: B, clock: C) -> Result<Self, CallbackError> {
        let callback = Callback::parse(callback_uri)?;
        Ok(Self {
            callback,
            backend,
            clock,
        })
    }

    /// Returns the configured callback.
    #[must_use]
    pub const fn callback(&self) -> &Callback {
        &self.callback
    }

    /// Generates a serialized auth47 URI for the given nonce.
    ///
    /// The result is fully percent-decoded and always emits parameters in
    /// the order `c`, `r`, `e`. As a final coherence guard, the assembled
    /// string is re-parsed before being returned; a malformed URI is never
    /// issued.
    ///
    /// # Errors
    ///
    /// Returns `GenerateError` naming the offending argument: a
    /// non-alphanumeric nonce, an empty resource, an expiry that is not
    /// strictly in the future, or a resource that does not serialize into
    /// a valid URI.
    pub fn generate_uri(
        &self,
        nonce: &str,
        resource: Option<&str>,
        expiry: Option<ExpiryArg>,
    ) -> Result<String, GenerateError> {
        let nonce = Nonce::parse(nonce).map_err(GenerateError::InvalidNonce)?;

        if let Some(resource) = resource {
            if resource.trim().is_empty() {
                return Err(GenerateError::EmptyResource);
            }
        }

        let expiry = match expiry {
            Some(arg) => {
                let secs = arg.timestamp();
                if secs <= self.clock.now_unix() {
                    return Err(GenerateError::PastExpiry);
                }
                Some(secs)
            }
            None => None,
        };

        let mut uri = format!("auth47://{nonce}?c={}", self.callback);
        if let Some(resource) = resource {
            uri.push_str("&r=");
            uri.push_str(resource);
        }
        if let Some(expiry) = expiry {
            uri.push_str("&e=");
            uri.push_str(&expiry.to_string());
        }

        Auth47Uri::parse(&uri).map_err(GenerateError::Malformed)?;

        Ok(uri)
    }

    /// Verifies a received proof object against the given network.
    ///
    /// Decodes the proof structurally, resolves the signing address (the
    /// payment code's notification address for a nym proof, the claimed
    /// address verbatim otherwise), and checks the signature over the
    /// exact challenge string with the network's message prefix. Never
    /// panics; always returns a tagged result.
    ///
    /// # Errors
    ///
    /// Returns `VerifyError::Proof` for structural failures, with the
    /// offending field named. Every cryptographic failure — undecodable
    /// signature, derivation failure, recovery mismatch — collapses to
    /// `VerifyError::InvalidSignature`.
    pub fn verify_proof(
        &self,
        proof: &Value,
        network: Network,
    ) -> Result<ValidatedProof, VerifyError> {
        let container = ProofContainer::decode(proof, &self.clock)?;

        let signer_address = match &container {
            ProofContainer::Nym(p) => self
                .backend
                .notification_address(p.nym(), network)
                .map_err(|_| VerifyError::InvalidSignature)?,
            ProofContainer::Address(p) => p.address().to_string(),
        };

        let verified = self
            .backend
            .verify_message(
                container.challenge(),
                &signer_address,
                container.signature(),
                network.message_prefix(),
            )
            .map_err(|_| VerifyError::InvalidSignature)?;

        if !verified {
            return Err(VerifyError::InvalidSignature);
        }

        Ok(ValidatedProof::new(container, signer_address))
    }
}
