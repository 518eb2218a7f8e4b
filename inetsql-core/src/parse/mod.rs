//! Text to [`Inet`] parsing.
//!
//! The family is picked from the first character after the leading run of
//! hex digits: `.` selects the IPv4 grammar, `:` the IPv6 grammar. Input is
//! taken as bytes and is never trimmed.
//!
//! | Input | Family | Prefix |
//! |-------|--------|--------|
//! | `10.0.0.1` | IPv4 | 32 |
//! | `192.168.0.0/16` | IPv4 | 16 |
//! | `2001:db8::1` | IPv6 | 128 |
//! | `::ffff:1.2.3.4/96` | IPv6 | 96 |

mod ipv4;
mod ipv6;

use std::str::FromStr;

use crate::address::Inet;
use crate::error::{ParseError, ParseErrorKind};

/// Parse inet text.
///
/// # Example
///
/// ```
/// use inetsql_core::parse;
///
/// let inet = parse(b"2001:0db8:0000:0000:0000:cef3:0035:0363").unwrap();
/// assert_eq!(inet.to_string(), "2001:db8::cef3:35:363");
///
/// assert!(parse(b"1.2.3.256").is_err());
/// ```
pub fn parse(input: &[u8]) -> Result<Inet, ParseError> {
    detect_and_parse(input).map_err(|kind| ParseError::new(input, kind))
}

fn detect_and_parse(input: &[u8]) -> Result<Inet, ParseErrorKind> {
    // "::1" has no leading hex digit
    if input.first() == Some(&b':') {
        return ipv6::parse_ipv6(input);
    }

    let hex = count_while(input, |b| b.is_ascii_hexdigit());
    if hex == 0 {
        return Err(ParseErrorKind::NotAnAddress);
    }
    match input.get(hex) {
        Some(b'.') => ipv4::parse_ipv4(input),
        Some(b':') => ipv6::parse_ipv6(input),
        _ => Err(ParseErrorKind::NotAnAddress),
    }
}

impl FromStr for Inet {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s.as_bytes())
    }
}

impl TryFrom<&[u8]> for Inet {
    type Error = ParseError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        parse(value)
    }
}

/// Length of the leading run of bytes matching `pred`.
fn count_while(input: &[u8], pred: impl Fn(u8) -> bool) -> usize {
    input.iter().take_while(|&&b| pred(b)).count()
}

/// Parse an optional `/<decimal>` suffix that must run to end of input.
///
/// `missing_slash` is reported when something other than `/` follows the
/// address.
fn parse_prefix(rest: &[u8], max: u16, missing_slash: ParseErrorKind) -> Result<u16, ParseErrorKind> {
    let digits = match rest.split_first() {
        None => return Ok(max),
        Some((b'/', digits)) => digits,
        Some(_) => return Err(missing_slash),
    };

    let len = count_while(digits, |b| b.is_ascii_digit());
    let invalid = ParseErrorKind::InvalidPrefix { max };
    if len == 0 {
        return Err(invalid);
    }
    let value = digits[..len]
        .iter()
        .try_fold(0u16, |acc, &d| acc.checked_mul(10)?.checked_add((d - b'0') as u16))
        .filter(|&v| v <= max)
        .ok_or(invalid)?;

    if len < digits.len() {
        return Err(ParseErrorKind::TrailingCharacters);
    }
    Ok(value)
}
