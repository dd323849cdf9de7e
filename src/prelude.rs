//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use auth47::prelude::*;
//!
//! let uri = Auth47Uri::parse("auth47://abc?c=srbn://123aef4567890aef").unwrap();
//! assert!(uri.is_soroban_callback());
//! ```

pub use crate::{
    // Core types
    Auth47Uri, Callback, Challenge, Expiry, Nonce, Resource, SorobanScheme, SorobanUri,
    // Clock
    Clock, FixedClock, SystemClock,
    // Errors
    CallbackError, ExpiryError, HttpUrlError, Mode, NonceError, ParamName, ParseError,
    ParseErrorKind, ResourceError, SorobanUriError,
    // Constants
    CHANNEL_LENGTH, SCHEME, SOROBAN_SCHEME, SOROBAN_TLS_SCHEME,
};
