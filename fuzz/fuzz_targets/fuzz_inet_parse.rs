//! Fuzz target for the inet text parser.
//!
//! Any accepted input must format to a canonical string that parses back to
//! the same value and formats identically again.

#![no_main]

use libfuzzer_sys::fuzz_target;
use inetsql_core::{parse, InetRecord, KeyEncoding};

fuzz_target!(|data: &[u8]| {
    let Ok(inet) = parse(data) else {
        return;
    };

    let text = inet.to_string();
    let reparsed = parse(text.as_bytes()).expect("canonical text must parse");
    assert_eq!(reparsed, inet, "round trip through {text:?}");
    assert_eq!(reparsed.to_string(), text);

    for encoding in [KeyEncoding::Unsigned, KeyEncoding::LegacySigned] {
        let record = InetRecord::encode(&inet, encoding);
        assert_eq!(record.decode(encoding), Ok(inet));
    }
});
