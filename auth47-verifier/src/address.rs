//! Shape validation for payment codes and Bitcoin addresses.
//!
//! These are structural checks only — charset, length, leading bytes.
//! Whether an identity actually controls the signature is decided later by
//! the crypto backend. Matches are anchored to the whole string; a valid
//! address embedded in junk does not pass.

/// Serialized BIP47 payment codes are always 116 base58 characters.
pub(crate) const PAYMENT_CODE_LENGTH: usize = 116;

const fn is_base58_char(c: char) -> bool {
    // Bitcoin base58: alphanumerics minus 0, O, I, l.
    c.is_ascii_alphanumeric() && !matches!(c, '0' | 'O' | 'I' | 'l')
}

const fn is_bech32_data_char(c: char) -> bool {
    // The bech32 charset, lowercase form: alphanumerics minus 1, b, i, o.
    (c.is_ascii_lowercase() || c.is_ascii_digit()) && !matches!(c, '1' | 'b' | 'i' | 'o')
}

/// Returns true for a well-formed serialized payment code: base58, first
/// character `P`, exactly 116 characters.
pub(crate) fn is_payment_code(s: &str) -> bool {
    s.len() == PAYMENT_CODE_LENGTH
        && s.starts_with('P')
        && s.chars().all(is_base58_char)
}

fn is_segwit_address(s: &str, hrp: &str) -> bool {
    let Some(rest) = s.strip_prefix(hrp) else {
        return false;
    };
    let mut chars = rest.chars();
    let Some(version) = chars.next() else {
        return false;
    };
    let data = chars.as_str();
    if !data.chars().all(is_bech32_data_char) {
        return false;
    }
    match version {
        '0' => data.len() == 39 || data.len() == 59,
        '1' => (8..=87).contains(&data.len()),
        _ => false,
    }
}

fn is_legacy_address(s: &str, leading: &[char], max_rest: usize) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !leading.contains(&first) {
        return false;
    }
    let rest = chars.as_str();
    (25..=max_rest).contains(&rest.len()) && rest.chars().all(is_base58_char)
}

/// Returns true for a mainnet address shape: `bc…` segwit or a base58
/// address with a `1`/`3` prefix.
pub(crate) fn is_mainnet_address(s: &str) -> bool {
    is_segwit_address(s, "bc") || is_legacy_address(s, &['1', '3'], 35)
}

/// Returns true for a testnet address shape: `tb…` segwit or a base58
/// address with a `2`/`m`/`n` prefix.
pub(crate) fn is_testnet_address(s: &str) -> bool {
    is_segwit_address(s, "tb") || is_legacy_address(s, &['2', 'm', 'n'], 39)
}

/// Returns true for any recognized Bitcoin address shape, mainnet or
/// testnet. Network agreement is settled by signature verification, not
/// here.
pub(crate) fn is_bitcoin_address(s: &str) -> bool {
    is_mainnet_address(s) || is_testnet_address(s)
}
