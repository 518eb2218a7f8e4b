//! Round-trip, ordering and arithmetic properties of the inet codec.
//!
//! These tests go through the public API only, the same way an engine
//! binding would.

use inetsql_core::{
    offset, parse, AddressFamily, Inet, InetRecord, KeyEncoding, OrderCodec, ParseErrorKind,
    RangeError,
};

// ============================================================================
// Test Helpers
// ============================================================================

fn inet(s: &str) -> Inet {
    s.parse()
        .unwrap_or_else(|e| panic!("{s:?} should parse: {e}"))
}

fn canonical(s: &str) -> String {
    inet(s).to_string()
}

/// A spread of values covering both families, every zero-run shape and
/// the embedded-IPv4 forms.
fn sample_values() -> Vec<Inet> {
    let mut values = Vec::new();
    for magnitude in [0u32, 1, 0x0A00_0001, 0xC0A8_0101, 0x7FFF_FFFF, u32::MAX] {
        for prefix in [0, 8, 24, 31, 32] {
            values.push(Inet::from_ipv4(magnitude, prefix).unwrap());
        }
    }
    let v6 = [
        0u128,
        1,
        2,
        0xffff,
        0x0102_0304,
        0x0002_0001,
        0xffff_0000_0000,
        0xffff_0102_0304,
        0xffff_0000_0102_0304,
        0x2001_0db8_0000_0000_0000_cef3_0035_0363,
        0x0000_0000_0001_0000_0000_0002_0000_0000,
        0x0001_0000_0001_0000_0001_0000_0001_0000,
        0x0001_0000_0000_0002_0000_0000_0000_0003,
        1 << 112,
        1 << 127,
        u128::MAX,
    ];
    for magnitude in v6 {
        for prefix in [0, 10, 64, 96, 127, 128] {
            values.push(Inet::from_ipv6(magnitude, prefix).unwrap());
        }
    }
    values
}

// ============================================================================
// Round Trip
// ============================================================================

#[test]
fn test_parse_format_round_trip() {
    for value in sample_values() {
        let text = value.to_string();
        assert_eq!(inet(&text), value, "round trip through {text:?}");
    }
}

#[test]
fn test_canonical_idempotence() {
    for value in sample_values() {
        let once = value.to_string();
        let twice = inet(&once).to_string();
        assert_eq!(once, twice);
    }
}

#[test]
fn test_non_canonical_inputs_normalise() {
    let same = [
        "2001:0db8:0000:0000:0000:cef3:0035:0363",
        "2001:db8:0:0:0:cef3:35:363",
        "2001:DB8::CEF3:35:363",
        "2001:db8:0::cef3:35:363",
    ];
    for input in same {
        assert_eq!(canonical(input), "2001:db8::cef3:35:363", "{input}");
    }

    assert_eq!(canonical("::ffff:0102:0304"), "::ffff:1.2.3.4");
    assert_eq!(canonical("0:0:0:0:0:0:0:1"), "::1");
    assert_eq!(canonical("1.2.3.4/32"), "1.2.3.4");
    assert_eq!(canonical("::/128"), "::");
}

// ============================================================================
// Formatting Rules
// ============================================================================

#[test]
fn test_zero_run_tie_picks_leftmost() {
    assert_eq!(canonical("0:0:1:0:0:2:0:0"), "::1:0:0:2:0:0");
}

#[test]
fn test_double_colon_both_ends() {
    assert_eq!(canonical("::"), "::");
    assert_eq!(canonical("::1"), "::1");
    assert_eq!(canonical("1::"), "1::");
}

#[test]
fn test_mask_default_suppression() {
    let full = Inet::from_ipv4(0x0102_0304, 32).unwrap().to_string();
    assert!(!full.contains('/'));
    let narrow = Inet::from_ipv4(0x0102_0304, 24).unwrap().to_string();
    assert!(narrow.ends_with("/24"));

    assert!(!canonical("fe80::1").contains('/'));
    assert_eq!(canonical("fe80::1/64"), "fe80::1/64");
}

#[test]
fn test_host_drops_mask() {
    assert_eq!(inet("192.168.1.5/24").host().to_string(), "192.168.1.5");
    assert_eq!(inet("2001:db8::1/32").host().to_string(), "2001:db8::1");
}

// ============================================================================
// Rejection
// ============================================================================

#[test]
fn test_ipv4_rejects() {
    for input in ["1.2.3.256", "1.2.3", "1.2.3.4.5", "1.2.3.4/33", "1.2.3.4/", "1.2.3.-4"] {
        assert!(input.parse::<Inet>().is_err(), "{input} should be rejected");
    }
}

#[test]
fn test_ipv4_leading_zero_policy() {
    // leading zeros are rejected so every accepted string is canonical
    assert_eq!(
        "01.2.3.4".parse::<Inet>().unwrap_err().kind(),
        ParseErrorKind::LeadingZero
    );
    assert_eq!(
        "010.0.0.1".parse::<Inet>().unwrap_err().kind(),
        ParseErrorKind::LeadingZero
    );
    assert_eq!(canonical("0.0.0.0"), "0.0.0.0");
    assert_eq!(canonical("10.0.0.1"), "10.0.0.1");
}

#[test]
fn test_invalid_input_rejected_whole() {
    for input in ["1.2.3.4.5", "gggg::1", ":::1", "1:2:3:4:5:6:7:8:9"] {
        assert!(parse(input.as_bytes()).is_err(), "{input} should be rejected");
    }
}

#[test]
fn test_distinct_failure_reasons() {
    let cases = [
        ("hello", ParseErrorKind::NotAnAddress),
        ("1.2.3.999", ParseErrorKind::OctetOutOfRange),
        ("12345::", ParseErrorKind::QuibbleTooLong),
        ("1::2::3", ParseErrorKind::MultipleDoubleColons),
        (":::1", ParseErrorKind::TripleColon),
        ("1:2:3", ParseErrorKind::WrongQuibbleCount),
        ("1.2.3.4 ", ParseErrorKind::ExpectedSlash),
        ("1.2.3.4/8 ", ParseErrorKind::TrailingCharacters),
        ("1:2:3:4:5:6:7:8 ", ParseErrorKind::UnexpectedCharacter),
    ];
    for (input, expected) in cases {
        assert_eq!(parse(input.as_bytes()).unwrap_err().kind(), expected, "{input}");
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

#[test]
fn test_offset_examples() {
    assert_eq!(offset(&inet("10.0.0.1"), 1), Ok(inet("10.0.0.2")));
    assert!(offset(&inet("0.0.0.0"), -1).is_err());
    assert_eq!(offset(&inet("255.255.255.255"), 1), Err(RangeError::OutsideIpv4));
    assert_eq!(offset(&inet("::"), 1), Ok(inet("::1")));
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn test_keys_preserve_ipv6_order() {
    let mut values: Vec<Inet> = sample_values()
        .into_iter()
        .filter(|v| v.family() == AddressFamily::Ipv6)
        .collect();
    values.sort();
    values.dedup_by_key(|v| v.magnitude());

    let unsigned = OrderCodec::new(KeyEncoding::Unsigned);
    let legacy = OrderCodec::new(KeyEncoding::LegacySigned);
    for pair in values.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.magnitude() < b.magnitude());
        assert!(unsigned.encode(a) < unsigned.encode(b));
        assert!(legacy.encode_signed(a) < legacy.encode_signed(b));
    }
}

#[test]
fn test_records_round_trip_in_both_encodings() {
    for encoding in [KeyEncoding::Unsigned, KeyEncoding::LegacySigned] {
        for value in sample_values() {
            let bytes = InetRecord::encode(&value, encoding).to_bytes();
            let record = InetRecord::from_bytes(&bytes).unwrap();
            assert_eq!(record.decode(encoding).unwrap(), value);
        }
    }
}

#[test]
fn test_concurrent_use() {
    let values = sample_values();
    std::thread::scope(|scope| {
        for chunk in values.chunks(16) {
            scope.spawn(move || {
                for value in chunk {
                    assert_eq!(inet(&value.to_string()), *value);
                }
            });
        }
    });
}
