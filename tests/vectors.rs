//! Canonical acceptance and rejection vectors for the auth47 grammar.

use auth47::{Auth47Uri, Challenge, FixedClock, SorobanUri};

const NOW: FixedClock = FixedClock::new(1_600_000_000);

const VALID_SOROBAN_URIS: &[&str] = &[
    "srbn://123aef4567890aef",
    "srbn://123aef4567890aef@samourai.onion",
    "srbn://123aef4567890aef@samourai.onion/rpc",
    "srbns://123aef4567890aef@samourai.io",
];

const INVALID_SOROBAN_URIS: &[&str] = &[
    // invalid scheme
    "ftp://123aef4567890aef",
    // channel with invalid length
    "srbn://123aef4",
    // channel with non hex value
    "srbn://1G3aef4567890aef",
    // gateway uri with unsupported query
    "srbn://123aef4567890aef@samourai.onion/rpc?arg=test",
    // gateway uri with fragment
    "srbn://123aef4567890aef@samourai.onion/rpc#hash",
];

const VALID_AUTH47_URIS: &[&str] = &[
    "auth47://aZrzsdfsfs343432sdf?c=srbn://123aef4567890aef@samourai.onion/rpc",
    "auth47://aZrzsdfsfs343432sdf?c=srbn://123aef4567890aef@samourai.onion",
    "auth47://aZrzsdfsfs343432sdf?c=srbn://123aef4567890aef",
    "auth47://aZrzsdfsfs343432sdf?c=srbns://123aef4567890aef@samourai.io",
    "auth47://aZrzsdfsfs343432sdf?c=srbn://123aef4567890aef@samourai.onion&r=srbn",
    "auth47://aZrzsdfsfs343432sdf?c=srbn://123aef4567890aef@samourai.onion&e=2208988800",
    "auth47://aZrzsdfsfs343432sdf?c=srbn://123aef4567890aef@samourai.onion&e=2208988800&r=srbn",
    "auth47://aZrzsdfsfs343432sdf?c=http://samourai.io",
    "auth47://aZrzsdfsfs343432sdf?c=https://samourai.io",
    "auth47://aZrzsdfsfs343432sdf?c=https://samourai.io&r=https://samourai.io/resource1",
    "auth47://aZrzsdfsfs343432sdf?c=https://samourai.io&e=2208988800",
    "auth47://aZrzsdfsfs343432sdf?c=https://samourai.io&e=2208988800&r=https://samourai.io/resource1",
];

const INVALID_AUTH47_URIS: &[&str] = &[
    // invalid scheme
    "auth48://aZrzsdfsfs343432sdf?c=srbn://123aef4567890aef@samourai.onion",
    // nonce with invalid character
    "auth47://a#rzsdfsfs343432sdf?c=srbn://123aef4567890aef@samourai.onion",
    // missing callback URI
    "auth47://aZrzsdfsfs343432sdf",
    // unsupported protocol for callback URI
    "auth47://aZrzsdfsfs343432sdf?c=ftp://samourai.io",
    // callback URI with a query
    "auth47://aZrzsdfsfs343432sdf?c=http://samourai.io?arg=notgood",
    // callback URI with a fragment
    "auth47://aZrzsdfsfs343432sdf?c=http://samourai.io/test#hash",
    // invalid expiry param
    "auth47://aZrzsdfsfs343432sdf?c=https://samourai.io&e=timestamp",
    // unsupported protocol for resource URI
    "auth47://aZrzsdfsfs343432sdf?c=https://samourai.io&r=ftp://samourai.io",
    // resource must be the literal, not a Soroban URI
    "auth47://aZrzsdfsfs343432sdf?c=https://samourai.io&r=srbn://123aef4567890aef",
    // srbns is not a valid resource literal
    "auth47://aZrzsdfsfs343432sdf?c=https://samourai.io&r=srbns",
];

const VALID_AUTH47_CHALLENGES: &[&str] = &[
    "auth47://aZrzsdfsfs343432sdf?r=srbn",
    "auth47://aZrzsdfsfs343432sdf?r=srbn&e=2208988800",
    "auth47://aZrzsdfsfs343432sdf?r=http://samourai.io",
    "auth47://aZrzsdfsfs343432sdf?r=https://samourai.io",
    "auth47://aZrzsdfsfs343432sdf?r=https://samourai.io/resource1",
    "auth47://aZrzsdfsfs343432sdf?r=https://samourai.io&e=2208988800",
];

const INVALID_AUTH47_CHALLENGES: &[&str] = &[
    // invalid scheme
    "auth48://aZrzsdfsfs343432sdf?r=srbn",
    // nonce with invalid character
    "auth47://a#rzsdfsfs343432sdf?r=srbn",
    // missing resource URI
    "auth47://aZrzsdfsfs343432sdf",
    // unsupported protocol for resource URI
    "auth47://aZrzsdfsfs343432sdf?r=ftp://samourai.io",
    // resource URI with a query
    "auth47://aZrzsdfsfs343432sdf?r=http://samourai.io?arg=notgood",
    // resource URI with a fragment
    "auth47://aZrzsdfsfs343432sdf?r=http://samourai.io/test#hash",
    // invalid expiry param
    "auth47://aZrzsdfsfs343432sdf?r=https://samourai.io&e=timestamp",
    // a Soroban URI is not a valid resource
    "auth47://aZrzsdfsfs343432sdf?r=srbn://123aef4567890aef",
    // srbns is not a valid resource literal
    "auth47://aZrzsdfsfs343432sdf?r=srbns",
    // challenges must not carry a callback
    "auth47://aZrzsdfsfs343432sdf?r=srbn&c=https://samourai.io",
];

#[test]
fn valid_soroban_uris_parse() {
    for input in VALID_SOROBAN_URIS {
        assert!(SorobanUri::parse(input).is_ok(), "{input}");
    }
}

#[test]
fn invalid_soroban_uris_are_rejected() {
    for input in INVALID_SOROBAN_URIS {
        assert!(SorobanUri::parse(input).is_err(), "{input}");
    }
}

#[test]
fn valid_soroban_uris_survive_roundtrip() {
    for input in VALID_SOROBAN_URIS {
        let uri = SorobanUri::parse(input).unwrap();
        assert!(uri.is_valid(), "{input}");
    }
}

#[test]
fn valid_auth47_uris_parse() {
    for input in VALID_AUTH47_URIS {
        assert!(Auth47Uri::parse(input).is_ok(), "{input}");
    }
}

#[test]
fn invalid_auth47_uris_are_rejected() {
    for input in INVALID_AUTH47_URIS {
        assert!(Auth47Uri::parse(input).is_err(), "{input}");
    }
}

#[test]
fn valid_auth47_uris_survive_roundtrip() {
    for input in VALID_AUTH47_URIS {
        let uri = Auth47Uri::parse(input).unwrap();
        assert!(uri.is_valid(), "{input}");
        let reparsed = Auth47Uri::parse(&uri.to_string()).unwrap();
        assert_eq!(uri, reparsed, "{input}");
    }
}

#[test]
fn valid_challenges_parse() {
    for input in VALID_AUTH47_CHALLENGES {
        assert!(Challenge::parse_with_clock(input, &NOW).is_ok(), "{input}");
    }
}

#[test]
fn invalid_challenges_are_rejected() {
    for input in INVALID_AUTH47_CHALLENGES {
        assert!(Challenge::parse_with_clock(input, &NOW).is_err(), "{input}");
    }
}

#[test]
fn valid_challenges_survive_roundtrip() {
    for input in VALID_AUTH47_CHALLENGES {
        let challenge = Challenge::parse_with_clock(input, &NOW).unwrap();
        let reparsed = Challenge::parse_with_clock(&challenge.to_string(), &NOW).unwrap();
        assert_eq!(challenge, reparsed, "{input}");
    }
}

#[test]
fn every_valid_uri_narrows_to_a_valid_challenge() {
    for input in VALID_AUTH47_URIS {
        let uri = Auth47Uri::parse(input).unwrap();
        let challenge = uri.to_challenge();
        assert!(
            Challenge::parse_with_clock(&challenge.to_string(), &NOW).is_ok(),
            "{input}"
        );
    }
}
