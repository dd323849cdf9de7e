//! Proof verification for the auth47 authentication scheme.
//!
//! This crate sits on top of the `auth47` grammar crate and implements the
//! verifier side of the protocol: issuing challenge URIs and accepting (or
//! rejecting) signed proofs. Elliptic-curve signature checking and BIP47
//! notification-address derivation are *not* implemented here — they are
//! consumed through the [`CryptoBackend`] trait, keeping this crate free
//! of curve arithmetic.
//!
//! # Overview
//!
//! A proof travels through a one-way pipeline:
//!
//! ```text
//! Received → StructurallyDecoded → IdentityResolved → SignatureChecked
//!          → Accepted | Rejected(reason)
//! ```
//!
//! Failure at any stage short-circuits with a field- or stage-qualified
//! reason. Cryptographic failures are deliberately collapsed into the
//! single message `invalid signature` so that a prober cannot distinguish
//! a bad payment code from a tampered challenge byte.
//!
//! # Example
//!
//! ```rust
//! use auth47_verifier::{Auth47Verifier, BackendError, CryptoBackend, Network};
//! use serde_json::json;
//!
//! struct Backend;
//!
//! impl CryptoBackend for Backend {
//!     fn verify_message(&self, _m: &str, _a: &str, _s: &str, _p: &str)
//!         -> Result<bool, BackendError> {
//!         Ok(true)
//!     }
//!     fn notification_address(&self, _pc: &str, _n: Network)
//!         -> Result<String, BackendError> {
//!         Ok("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa".into())
//!     }
//! }
//!
//! let verifier = Auth47Verifier::new("https://samourai.io/auth", Backend).unwrap();
//!
//! // Issue a URI for the prover
//! let uri = verifier.generate_uri("aZrzsdfsfs343432sdf", None, None).unwrap();
//!
//! // Accept a returned proof
//! let proof = json!({
//!     "auth47_response": "1.0",
//!     "challenge": "auth47://aZrzsdfsfs343432sdf?r=srbn",
//!     "signature": "Hyn9En/w5I2LHRNE1iuV+r3pFnSdBj9XZHtXuqZjcAjXdh3IsdUR9c5rTnQibGRb6aowfXY21G+Nyct8mbFD86o=",
//!     "nym": "PM8TJTLJbPRGxSbc8EJi42Wrr6QbNSaSSVJ5Y3E4pbCYiTHUskHg13935Ubb7q8tx9GVbh2UuRnBc3WSyJHhUrw8KhprKnn9eDznYGieTzFcwQRya4GA",
//! });
//! let validated = verifier.verify_proof(&proof, Network::Bitcoin).unwrap();
//! assert_eq!(validated.signer_address(), "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa");
//! ```
//!
//! # Networks
//!
//! Verification targets one of a fixed set of networks — `bitcoin`,
//! `testnet`, `regtest` — each carrying its own signed-message prefix and
//! address version bytes. Unknown network names are an error, never a
//! silent default.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod address;
mod backend;
mod error;
mod network;
mod proof;
mod verifier;

pub use backend::{BackendError, CryptoBackend};
pub use error::{GenerateError, ProofError, VerifyError};
pub use network::{Network, NetworkError};
pub use proof::{AddressProof, NymProof, PROTOCOL_VERSION, ProofContainer, ValidatedProof};
pub use verifier::{Auth47Verifier, ExpiryArg};

/// A prelude module for convenient imports.
///
/// # Example
///
/// ```rust
/// use auth47_verifier::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        AddressProof, Auth47Verifier, BackendError, CryptoBackend, ExpiryArg, GenerateError,
        Network, NetworkError, NymProof, PROTOCOL_VERSION, ProofContainer, ProofError,
        ValidatedProof, VerifyError,
    };
}
