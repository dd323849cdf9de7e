//! Bitcoin network parameters for message verification.

use std::fmt;
use std::str::FromStr;

/// The Bitcoin network a proof is verified against.
///
/// Each network carries its own signed-message prefix and address version
/// bytes. There is no default fallback: an unrecognized network name is an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    /// Bitcoin mainnet
    Bitcoin,
    /// Bitcoin testnet
    Testnet,
    /// Local regtest
    Regtest,
}

impl Network {
    /// Returns the prefix prepended to messages in the Bitcoin
    /// signed-message scheme.
    #[must_use]
    pub const fn message_prefix(&self) -> &'static str {
        match self {
            Self::Bitcoin => "\u{18}Bitcoin Signed Message:\n",
            Self::Testnet => "\u{18}Bitcoin Signed Message:\n",
            Self::Regtest => "\u{18}Bitcoin Signed Message:\n",
        }
    }

    /// Returns the P2PKH address version byte.
    #[must_use]
    pub const fn pubkey_hash_version(&self) -> u8 {
        match self {
            Self::Bitcoin => 0x00,
            Self::Testnet | Self::Regtest => 0x6f,
        }
    }

    /// Returns the P2SH address version byte.
    #[must_use]
    pub const fn script_hash_version(&self) -> u8 {
        match self {
            Self::Bitcoin => 0x05,
            Self::Testnet | Self::Regtest => 0xc4,
        }
    }

    /// Returns the bech32 human-readable part for segwit addresses.
    #[must_use]
    pub const fn bech32_hrp(&self) -> &'static str {
        match self {
            Self::Bitcoin => "bc",
            Self::Testnet => "tb",
            Self::Regtest => "bcrt",
        }
    }

    /// Returns the canonical network name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bitcoin => "bitcoin",
            Self::Testnet => "testnet",
            Self::Regtest => "regtest",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Network {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bitcoin" => Ok(Self::Bitcoin),
            "testnet" => Ok(Self::Testnet),
            "regtest" => Ok(Self::Regtest),
            other => Err(NetworkError {
                name: other.to_string(),
            }),
        }
    }
}

/// Error for an unrecognized network name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkError {
    /// The name that was not recognized
    pub name: String,
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown network \"{}\"; expected \"bitcoin\", \"testnet\", or \"regtest\"",
            self.name
        )
    }
}

impl std::error::Error for NetworkError {}
