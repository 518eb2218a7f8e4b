//! IPv4 dotted-decimal grammar.

use super::{count_while, parse_prefix};
use crate::address::{AddressFamily, Inet, IPV4_BITS};
use crate::error::ParseErrorKind;

const NUM_OCTETS: usize = 4;

/// Parse `a.b.c.d` with an optional `/n` suffix.
pub(super) fn parse_ipv4(input: &[u8]) -> Result<Inet, ParseErrorKind> {
    let (address, consumed) = parse_dotted(input)?;
    let prefix = parse_prefix(&input[consumed..], IPV4_BITS, ParseErrorKind::ExpectedSlash)?;
    Ok(Inet::new_unchecked(
        AddressFamily::Ipv4,
        address as u128,
        prefix,
    ))
}

/// Scan exactly four dot-separated octets from the start of `input`.
///
/// Returns the packed address and the number of bytes consumed. Anything
/// after the fourth octet is left for the caller.
pub(super) fn parse_dotted(input: &[u8]) -> Result<(u32, usize), ParseErrorKind> {
    let mut pos = 0;
    let mut address = 0u32;

    for index in 0..NUM_OCTETS {
        if index > 0 {
            if input.get(pos) != Some(&b'.') {
                return Err(ParseErrorKind::ExpectedDot);
            }
            pos += 1;
        }
        let len = count_while(&input[pos..], |b| b.is_ascii_digit());
        let octet = parse_octet(&input[pos..pos + len])?;
        address = (address << 8) | octet as u32;
        pos += len;
    }

    Ok((address, pos))
}

/// Decimal octet in 0..=255 with no leading zeros.
fn parse_octet(digits: &[u8]) -> Result<u8, ParseErrorKind> {
    match digits {
        [] => Err(ParseErrorKind::ExpectedNumber),
        [b'0', _, ..] => Err(ParseErrorKind::LeadingZero),
        _ if digits.len() > 3 => Err(ParseErrorKind::OctetOutOfRange),
        _ => {
            let value = digits
                .iter()
                .fold(0u16, |acc, &d| acc * 10 + (d - b'0') as u16);
            u8::try_from(value).map_err(|_| ParseErrorKind::OctetOutOfRange)
        }
    }
}
