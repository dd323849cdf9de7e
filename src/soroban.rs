//! Soroban channel-addressing URIs (`srbn://` and `srbns://`).

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::constants::{CHANNEL_LENGTH, SOROBAN_SCHEME, SOROBAN_TLS_SCHEME};
use crate::error::SorobanUriError;

/// The Soroban transport scheme, determining the gateway protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SorobanScheme {
    /// `srbn` — gateway reached over `http`
    Srbn,
    /// `srbns` — gateway reached over `https`
    Srbns,
}

impl SorobanScheme {
    /// Returns the wire form of the scheme.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Srbn => SOROBAN_SCHEME,
            Self::Srbns => SOROBAN_TLS_SCHEME,
        }
    }

    /// Returns the HTTP scheme used to reconstruct the gateway URL.
    #[must_use]
    pub const fn gateway_scheme(&self) -> &'static str {
        match self {
            Self::Srbn => "http",
            Self::Srbns => "https",
        }
    }
}

impl fmt::Display for SorobanScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A parsed Soroban channel URI.
///
/// Structure: `srbn(s)://{16-hex-channel}[@{host}{path}]`. The channel
/// identifies a rendezvous on the Soroban network; the optional gateway
/// names a specific entry node. Gateway URLs must carry no userinfo,
/// query, or fragment.
///
/// # Examples
///
/// ```
/// use auth47::SorobanUri;
///
/// let uri = SorobanUri::parse("srbn://123aef4567890aef@samourai.onion/rpc").unwrap();
/// assert_eq!(uri.channel(), "123aef4567890aef");
/// assert_eq!(uri.gateway().map(|g| g.host_str()), Some(Some("samourai.onion")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SorobanUri {
    scheme: SorobanScheme,
    channel: String,
    gateway: Option<Url>,
}

impl SorobanUri {
    /// Parses a Soroban URI from a string.
    ///
    /// # Errors
    ///
    /// Returns `SorobanUriError` if:
    /// - The scheme is not `srbn` or `srbns`
    /// - The channel is not exactly 16 hex characters
    /// - The gateway is present but carries userinfo, a query, or a fragment
    pub fn parse(input: &str) -> Result<Self, SorobanUriError> {
        if input.is_empty() {
            return Err(SorobanUriError::Empty);
        }

        let segments: Vec<&str> = input.split("://").collect();
        if segments.len() != 2 {
            return Err(SorobanUriError::MalformedSeparator {
                count: segments.len() - 1,
            });
        }

        let scheme = match segments[0] {
            SOROBAN_SCHEME => SorobanScheme::Srbn,
            SOROBAN_TLS_SCHEME => SorobanScheme::Srbns,
            other => {
                return Err(SorobanUriError::UnsupportedScheme {
                    found: other.to_string(),
                });
            }
        };

        let (channel, gateway_str) = match segments[1].split_once('@') {
            Some((channel, gateway)) => (channel, Some(gateway)),
            None => (segments[1], None),
        };

        if channel.len() != CHANNEL_LENGTH {
            return Err(SorobanUriError::InvalidChannelLength {
                actual: channel.len(),
            });
        }
        for (i, c) in channel.chars().enumerate() {
            if !c.is_ascii_hexdigit() {
                return Err(SorobanUriError::InvalidChannelChar { char: c, position: i });
            }
        }

        let gateway = match gateway_str {
            Some(g) => Some(Self::parse_gateway(scheme, g)?),
            None => None,
        };

        Ok(Self {
            scheme,
            channel: channel.to_string(),
            gateway,
        })
    }

    /// Returns the scheme.
    #[must_use]
    pub const fn scheme(&self) -> SorobanScheme {
        self.scheme
    }

    /// Returns the channel identifier (16 hex characters, case preserved).
    #[must_use]
    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Returns the gateway URL, if present, reconstructed as `http` for
    /// `srbn` or `https` for `srbns`.
    #[must_use]
    pub const fn gateway(&self) -> Option<&Url> {
        self.gateway.as_ref()
    }

    /// Round-trips the serialized form through the parser and reports
    /// whether it survives, without panicking.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        Self::parse(&self.to_string()).is_ok()
    }

    fn parse_gateway(scheme: SorobanScheme, gateway: &str) -> Result<Url, SorobanUriError> {
        let url = Url::parse(&format!("{}://{gateway}", scheme.gateway_scheme()))
            .map_err(|_| SorobanUriError::InvalidGateway {
                reason: "not a valid URL",
            })?;

        if !url.username().is_empty() || url.password().is_some() {
            return Err(SorobanUriError::InvalidGateway {
                reason: "userinfo is forbidden",
            });
        }
        if url.query().is_some() {
            return Err(SorobanUriError::InvalidGateway {
                reason: "query is forbidden",
            });
        }
        if url.fragment().is_some() {
            return Err(SorobanUriError::InvalidGateway {
                reason: "fragment is forbidden",
            });
        }

        Ok(url)
    }
}

impl fmt::Display for SorobanUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.channel)?;
        if let Some(gateway) = &self.gateway {
            write!(f, "@{}", gateway.host_str().unwrap_or_default())?;
            if let Some(port) = gateway.port() {
                write!(f, ":{port}")?;
            }
            write!(f, "{}", gateway.path())?;
        }
        Ok(())
    }
}

impl FromStr for SorobanUri {
    type Err = SorobanUriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for SorobanUri {
    type Error = SorobanUriError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SorobanUri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SorobanUri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bare_channel() {
        let uri = SorobanUri::parse("srbn://123aef4567890aef").unwrap();
        assert_eq!(uri.scheme(), SorobanScheme::Srbn);
        assert_eq!(uri.channel(), "123aef4567890aef");
        assert!(uri.gateway().is_none());
    }

    #[test]
    fn parse_with_gateway_host() {
        let uri = SorobanUri::parse("srbn://123aef4567890aef@samourai.onion").unwrap();
        let gateway = uri.gateway().unwrap();
        assert_eq!(gateway.scheme(), "http");
        assert_eq!(gateway.host_str(), Some("samourai.onion"));
    }

    #[test]
    fn parse_with_gateway_path() {
        let uri = SorobanUri::parse("srbn://123aef4567890aef@samourai.onion/rpc").unwrap();
        assert_eq!(uri.gateway().unwrap().path(), "/rpc");
    }

    #[test]
    fn tls_scheme_derives_https_gateway() {
        let uri = SorobanUri::parse("srbns://123aef4567890aef@samourai.io").unwrap();
        assert_eq!(uri.scheme(), SorobanScheme::Srbns);
        assert_eq!(uri.gateway().unwrap().scheme(), "https");
    }

    #[test]
    fn parse_unsupported_scheme_fails() {
        let result = SorobanUri::parse("ftp://123aef4567890aef");
        assert!(matches!(
            result,
            Err(SorobanUriError::UnsupportedScheme { .. })
        ));
    }

    #[test]
    fn parse_short_channel_fails() {
        let result = SorobanUri::parse("srbn://123aef4");
        assert!(matches!(
            result,
            Err(SorobanUriError::InvalidChannelLength { actual: 7 })
        ));
    }

    #[test]
    fn parse_non_hex_channel_fails() {
        let result = SorobanUri::parse("srbn://1G3aef4567890aef");
        assert!(matches!(
            result,
            Err(SorobanUriError::InvalidChannelChar { char: 'G', position: 1 })
        ));
    }

    #[test]
    fn gateway_with_query_fails() {
        let result = SorobanUri::parse("srbn://123aef4567890aef@samourai.onion/rpc?arg=test");
        assert!(matches!(
            result,
            Err(SorobanUriError::InvalidGateway { reason: "query is forbidden" })
        ));
    }

    #[test]
    fn gateway_with_fragment_fails() {
        let result = SorobanUri::parse("srbn://123aef4567890aef@samourai.onion/rpc#hash");
        assert!(matches!(
            result,
            Err(SorobanUriError::InvalidGateway { reason: "fragment is forbidden" })
        ));
    }

    #[test]
    fn second_at_sign_lands_in_userinfo() {
        let result = SorobanUri::parse("srbn://123aef4567890aef@user@samourai.onion");
        assert!(matches!(
            result,
            Err(SorobanUriError::InvalidGateway { reason: "userinfo is forbidden" })
        ));
    }

    #[test]
    fn missing_separator_fails() {
        assert!(matches!(
            SorobanUri::parse("srbn:123aef4567890aef"),
            Err(SorobanUriError::MalformedSeparator { count: 0 })
        ));
    }

    #[test]
    fn display_bare_channel_roundtrip() {
        let uri = SorobanUri::parse("srbn://123aef4567890aef").unwrap();
        assert_eq!(uri.to_string(), "srbn://123aef4567890aef");
    }

    #[test]
    fn display_with_gateway_keeps_path() {
        let uri = SorobanUri::parse("srbn://123aef4567890aef@samourai.onion/rpc").unwrap();
        assert_eq!(uri.to_string(), "srbn://123aef4567890aef@samourai.onion/rpc");
    }

    #[test]
    fn is_valid_roundtrips() {
        for input in [
            "srbn://123aef4567890aef",
            "srbn://123aef4567890aef@samourai.onion",
            "srbns://123aef4567890aef@samourai.io",
        ] {
            assert!(SorobanUri::parse(input).unwrap().is_valid(), "{input}");
        }
    }
}
