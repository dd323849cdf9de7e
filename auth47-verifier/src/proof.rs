//! Structural decoding of received proof objects.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::ser::SerializeStruct;
use serde_json::Value;

use auth47::{Challenge, Clock};

use crate::address::{is_bitcoin_address, is_payment_code};
use crate::error::ProofError;

/// The protocol version every proof must announce.
pub const PROTOCOL_VERSION: &str = "1.0";

/// A proof whose identity assertion is a BIP47 payment code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NymProof {
    challenge: String,
    signature: String,
    nym: String,
}

impl NymProof {
    /// Returns the challenge string, byte-for-byte as received.
    #[must_use]
    pub fn challenge(&self) -> &str {
        &self.challenge
    }

    /// Returns the base64 signature.
    #[must_use]
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Returns the serialized payment code.
    #[must_use]
    pub fn nym(&self) -> &str {
        &self.nym
    }
}

/// A proof whose identity assertion is a bare Bitcoin address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressProof {
    challenge: String,
    signature: String,
    address: String,
}

impl AddressProof {
    /// Returns the challenge string, byte-for-byte as received.
    #[must_use]
    pub fn challenge(&self) -> &str {
        &self.challenge
    }

    /// Returns the base64 signature.
    #[must_use]
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Returns the claimed address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }
}

/// A structurally valid proof object carrying exactly one identity
/// assertion.
///
/// Decoding is total: a container exists only if every field validated.
/// Structural validity says nothing about the signature — see
/// [`crate::ValidatedProof`] for the post-verification state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProofContainer {
    /// Identity asserted via payment code.
    Nym(NymProof),
    /// Identity asserted via bare address.
    Address(AddressProof),
}

impl ProofContainer {
    /// Decodes and validates a raw proof object.
    ///
    /// Two passes: structural (`auth47_response` literal, challenge-string
    /// validation against `clock`, non-empty base64 signature), then
    /// identity (exactly one of `nym`/`address`, each shape-checked).
    /// Fail-fast: the first violation aborts the decode.
    ///
    /// # Errors
    ///
    /// Returns `ProofError` with the offending field named in the message.
    pub fn decode(value: &Value, clock: &impl Clock) -> Result<Self, ProofError> {
        let obj = value.as_object().ok_or(ProofError::NotAnObject)?;

        let version = obj
            .get("auth47_response")
            .ok_or(ProofError::MissingField {
                field: "auth47_response",
            })?;
        if version.as_str() != Some(PROTOCOL_VERSION) {
            return Err(ProofError::InvalidVersion {
                found: render(version),
            });
        }

        let challenge = string_field(obj, "challenge")?;
        Challenge::parse_with_clock(challenge, clock).map_err(ProofError::InvalidChallenge)?;

        let signature = string_field(obj, "signature")?;
        if signature.is_empty() || BASE64.decode(signature).is_err() {
            return Err(ProofError::InvalidSignature);
        }

        match (obj.get("nym"), obj.get("address")) {
            (Some(_), Some(_)) => Err(ProofError::AmbiguousIdentity),
            (None, None) => Err(ProofError::MissingIdentity),
            (Some(nym), None) => {
                let nym = nym.as_str().ok_or(ProofError::NotAString { field: "nym" })?;
                if !is_payment_code(nym) {
                    return Err(ProofError::InvalidNym);
                }
                Ok(Self::Nym(NymProof {
                    challenge: challenge.to_string(),
                    signature: signature.to_string(),
                    nym: nym.to_string(),
                }))
            }
            (None, Some(address)) => {
                let address = address
                    .as_str()
                    .ok_or(ProofError::NotAString { field: "address" })?;
                if !is_bitcoin_address(address) {
                    return Err(ProofError::InvalidAddress);
                }
                Ok(Self::Address(AddressProof {
                    challenge: challenge.to_string(),
                    signature: signature.to_string(),
                    address: address.to_string(),
                }))
            }
        }
    }

    /// Returns the challenge string, byte-for-byte as received.
    #[must_use]
    pub fn challenge(&self) -> &str {
        match self {
            Self::Nym(p) => p.challenge(),
            Self::Address(p) => p.challenge(),
        }
    }

    /// Returns the base64 signature.
    #[must_use]
    pub fn signature(&self) -> &str {
        match self {
            Self::Nym(p) => p.signature(),
            Self::Address(p) => p.signature(),
        }
    }

    /// Returns the payment code, if identity is asserted via nym.
    #[must_use]
    pub fn nym(&self) -> Option<&str> {
        match self {
            Self::Nym(p) => Some(p.nym()),
            Self::Address(_) => None,
        }
    }

    /// Returns the claimed address, if identity is asserted via address.
    #[must_use]
    pub fn address(&self) -> Option<&str> {
        match self {
            Self::Address(p) => Some(p.address()),
            Self::Nym(_) => None,
        }
    }
}

fn string_field<'a>(
    obj: &'a serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<&'a str, ProofError> {
    obj.get(field)
        .ok_or(ProofError::MissingField { field })?
        .as_str()
        .ok_or(ProofError::NotAString { field })
}

fn render(value: &Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}

impl serde::Serialize for NymProof {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("NymProof", 4)?;
        state.serialize_field("auth47_response", PROTOCOL_VERSION)?;
        state.serialize_field("challenge", &self.challenge)?;
        state.serialize_field("signature", &self.signature)?;
        state.serialize_field("nym", &self.nym)?;
        state.end()
    }
}

impl serde::Serialize for AddressProof {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("AddressProof", 4)?;
        state.serialize_field("auth47_response", PROTOCOL_VERSION)?;
        state.serialize_field("challenge", &self.challenge)?;
        state.serialize_field("signature", &self.signature)?;
        state.serialize_field("address", &self.address)?;
        state.end()
    }
}

impl serde::Serialize for ProofContainer {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Nym(p) => p.serialize(serializer),
            Self::Address(p) => p.serialize(serializer),
        }
    }
}

/// A proof that has additionally passed cryptographic verification.
///
/// Constructed only by [`crate::Auth47Verifier::verify_proof`], so an
/// unverified [`ProofContainer`] can never be mistaken for an accepted
/// identity assertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedProof {
    proof: ProofContainer,
    signer_address: String,
}

impl ValidatedProof {
    pub(crate) fn new(proof: ProofContainer, signer_address: String) -> Self {
        Self {
            proof,
            signer_address,
        }
    }

    /// Returns the verified proof container.
    #[must_use]
    pub const fn proof(&self) -> &ProofContainer {
        &self.proof
    }

    /// Returns the address the signature was verified against: the
    /// payment code's notification address for a nym proof, the claimed
    /// address otherwise.
    #[must_use]
    pub fn signer_address(&self) -> &str {
        &self.signer_address
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth47::FixedClock;
    use serde_json::json;

    const NOW: FixedClock = FixedClock::new(1_600_000_000);
    const NYM: &str = "PM8TJTLJbPRGxSbc8EJi42Wrr6QbNSaSSVJ5Y3E4pbCYiTHUskHg13935Ubb7q8tx9GVbh2UuRnBc3WSyJHhUrw8KhprKnn9eDznYGieTzFcwQRya4GA";
    const SIG: &str = "Hyn9En/w5I2LHRNE1iuV+r3pFnSdBj9XZHtXuqZjcAjXdh3IsdUR9c5rTnQibGRb6aowfXY21G+Nyct8mbFD86o=";

    #[test]
    fn decode_valid_nym_proof() {
        let value = json!({
            "auth47_response": "1.0",
            "challenge": "auth47://aerezerzerze23131d?r=srbn",
            "signature": SIG,
            "nym": NYM,
        });
        let proof = ProofContainer::decode(&value, &NOW).unwrap();
        assert_eq!(proof.challenge(), "auth47://aerezerzerze23131d?r=srbn");
        assert_eq!(proof.nym(), Some(NYM));
        assert_eq!(proof.address(), None);
    }

    #[test]
    fn decode_valid_address_proof() {
        let value = json!({
            "auth47_response": "1.0",
            "challenge": "auth47://aerezerzerze23131d?r=srbn",
            "signature": SIG,
            "address": "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa",
        });
        let proof = ProofContainer::decode(&value, &NOW).unwrap();
        assert_eq!(proof.address(), Some("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa"));
        assert_eq!(proof.nym(), None);
    }

    #[test]
    fn wrong_version_message_is_exact() {
        let value = json!({
            "auth47_response": "2.0",
            "challenge": "auth47://aerezerzerze23131d?r=srbn",
            "signature": SIG,
            "nym": NYM,
        });
        let err = ProofContainer::decode(&value, &NOW).unwrap_err();
        assert_eq!(
            err.to_string(),
            "\"auth47_response\": received 2.0, expected 1.0"
        );
    }

    #[test]
    fn missing_version_is_rejected() {
        let value = json!({
            "challenge": "auth47://aerezerzerze23131d?r=srbn",
            "signature": SIG,
            "nym": NYM,
        });
        let err = ProofContainer::decode(&value, &NOW).unwrap_err();
        assert_eq!(err.to_string(), "missing property \"auth47_response\"");
    }

    #[test]
    fn challenge_with_callback_is_rejected_with_prefix() {
        let value = json!({
            "auth47_response": "1.0",
            "challenge": "auth47://aerezerzerze23131d?c=srbn",
            "signature": SIG,
            "nym": NYM,
        });
        let err = ProofContainer::decode(&value, &NOW).unwrap_err();
        assert!(matches!(err, ProofError::InvalidChallenge(_)));
        assert!(err.to_string().starts_with("\"challenge\": invalid challenge:"));
    }

    #[test]
    fn expired_challenge_message_composes_full_path() {
        let value = json!({
            "auth47_response": "1.0",
            "challenge": "auth47://aerezerzerze23131d?r=srbn&e=100000",
            "signature": SIG,
            "nym": NYM,
        });
        let err = ProofContainer::decode(&value, &NOW).unwrap_err();
        assert_eq!(
            err.to_string(),
            "\"challenge\": invalid challenge: expiry: expired proof"
        );
    }

    #[test]
    fn empty_signature_is_rejected() {
        let value = json!({
            "auth47_response": "1.0",
            "challenge": "auth47://aerezerzerze23131d?r=srbn",
            "signature": "",
            "nym": NYM,
        });
        assert!(matches!(
            ProofContainer::decode(&value, &NOW),
            Err(ProofError::InvalidSignature)
        ));
    }

    #[test]
    fn non_base64_signature_is_rejected() {
        let value = json!({
            "auth47_response": "1.0",
            "challenge": "auth47://aerezerzerze23131d?r=srbn",
            "signature": "not base64!!",
            "nym": NYM,
        });
        assert!(matches!(
            ProofContainer::decode(&value, &NOW),
            Err(ProofError::InvalidSignature)
        ));
    }

    #[test]
    fn both_identities_are_rejected() {
        let value = json!({
            "auth47_response": "1.0",
            "challenge": "auth47://aerezerzerze23131d?r=srbn",
            "signature": SIG,
            "nym": NYM,
            "address": "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa",
        });
        assert!(matches!(
            ProofContainer::decode(&value, &NOW),
            Err(ProofError::AmbiguousIdentity)
        ));
    }

    #[test]
    fn neither_identity_is_rejected() {
        let value = json!({
            "auth47_response": "1.0",
            "challenge": "auth47://aerezerzerze23131d?r=srbn",
            "signature": SIG,
        });
        let err = ProofContainer::decode(&value, &NOW).unwrap_err();
        assert_eq!(err.to_string(), "missing property \"nym\" or \"address\"");
    }

    #[test]
    fn malformed_nym_is_rejected() {
        let value = json!({
            "auth47_response": "1.0",
            "challenge": "auth47://aerezerzerze23131d?r=srbn",
            "signature": SIG,
            "nym": "PM8TJnotapaymentcode",
        });
        assert!(matches!(
            ProofContainer::decode(&value, &NOW),
            Err(ProofError::InvalidNym)
        ));
    }

    #[test]
    fn malformed_address_is_rejected() {
        let value = json!({
            "auth47_response": "1.0",
            "challenge": "auth47://aerezerzerze23131d?r=srbn",
            "signature": SIG,
            "address": "notanaddress",
        });
        assert!(matches!(
            ProofContainer::decode(&value, &NOW),
            Err(ProofError::InvalidAddress)
        ));
    }

    #[test]
    fn non_object_is_rejected() {
        assert!(matches!(
            ProofContainer::decode(&json!("proof"), &NOW),
            Err(ProofError::NotAnObject)
        ));
    }

    #[test]
    fn serialization_uses_wire_field_names() {
        let value = json!({
            "auth47_response": "1.0",
            "challenge": "auth47://aerezerzerze23131d?r=srbn",
            "signature": SIG,
            "nym": NYM,
        });
        let proof = ProofContainer::decode(&value, &NOW).unwrap();
        let reencoded = serde_json::to_value(&proof).unwrap();
        assert_eq!(reencoded, value);
    }
}
