//! Constants for auth47 URI validation.

/// The auth47 URI scheme.
pub const SCHEME: &str = "auth47";

/// The Soroban channel scheme (cleartext gateway transport).
pub const SOROBAN_SCHEME: &str = "srbn";

/// The Soroban channel scheme over TLS.
pub const SOROBAN_TLS_SCHEME: &str = "srbns";

/// Exact length of a Soroban channel identifier in hex characters.
pub const CHANNEL_LENGTH: usize = 16;
