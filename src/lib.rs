//! Parser and validator for the auth47 challenge/response scheme.
//!
//! This crate implements parsing, validation, and serialization of auth47
//! URIs and challenges: a verifier issues a URI encoding a challenge, a
//! prover signs the challenge, and the verifier checks the returned proof.
//! The grammar and validation pipeline live here; cryptographic proof
//! verification lives in the companion `auth47-verifier` crate.
//!
//! # Overview
//!
//! Auth47 URIs carry a nonce, a callback, and an optional resource and
//! expiry:
//!
//! ```text
//! auth47://{nonce}?c={callback}[&r={resource}][&e={expiry}]
//! ```
//!
//! The challenge — the string a prover actually signs — is the same URI
//! with the callback dropped and the resource made explicit:
//!
//! ```text
//! auth47://{nonce}?r={resource}[&e={expiry}]
//! ```
//!
//! Callbacks are either HTTP(S) URLs or Soroban channel URIs
//! (`srbn(s)://{16-hex-channel}[@{host}{path}]`).
//!
//! # Quick Start
//!
//! ```rust
//! use auth47::{Auth47Uri, Challenge};
//!
//! // Parse an issued URI
//! let uri = Auth47Uri::parse(
//!     "auth47://aZrzsdfsfs343432sdf?c=srbn://123aef4567890aef"
//! ).unwrap();
//! assert!(uri.is_soroban_callback());
//!
//! // Narrow it to the challenge the prover signs
//! let challenge = uri.to_challenge();
//! assert_eq!(challenge.to_string(), "auth47://aZrzsdfsfs343432sdf?r=srbn");
//!
//! // Parse a received challenge string
//! let challenge = Challenge::parse("auth47://aZrzsdfsfs343432sdf?r=srbn").unwrap();
//! assert!(challenge.is_soroban_resource());
//! ```
//!
//! # Time
//!
//! Challenge validation is time-dependent: an `e` parameter must be
//! strictly in the future. The clock is injectable so tests can pin it:
//!
//! ```rust
//! use auth47::{Challenge, FixedClock};
//!
//! let clock = FixedClock::new(1_600_000_000);
//! let result = Challenge::parse_with_clock("auth47://abc?r=srbn&e=100000", &clock);
//! assert!(result.is_err()); // expired
//! ```

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod callback;
mod challenge;
mod clock;
mod constants;
mod error;
mod expiry;
mod nonce;
pub mod prelude;
mod resource;
mod soroban;
mod tokenizer;
mod uri;

pub use callback::Callback;
pub use challenge::Challenge;
pub use clock::{Clock, FixedClock, SystemClock};
pub use constants::{CHANNEL_LENGTH, SCHEME, SOROBAN_SCHEME, SOROBAN_TLS_SCHEME};
pub use error::{
    CallbackError, ExpiryError, HttpUrlError, NonceError, ParseError, ParseErrorKind,
    ResourceError, SorobanUriError,
};
pub use expiry::Expiry;
pub use nonce::Nonce;
pub use resource::Resource;
pub use soroban::{SorobanScheme, SorobanUri};
pub use tokenizer::{Mode, ParamName};
pub use uri::Auth47Uri;
