//! IPv6 grammar.
//!
//! An address is 8 groups of 1 to 4 hex digits ("quibbles") separated by
//! `:`. One `::` may stand in for a run of zero quibbles, and the last two
//! quibbles may be written as dotted-decimal IPv4.
//!
//! Quibbles before the `::` are collected in `head`, those after it in
//! `tail`; the elided zeros go between them.

use smallvec::SmallVec;

use super::{count_while, ipv4, parse_prefix};
use crate::address::{AddressFamily, Inet, IPV6_BITS, IPV6_NUM_QUIBBLES, IPV6_QUIBBLE_BITS};
use crate::error::ParseErrorKind;

const MAX_QUIBBLE_DIGITS: usize = 4;

type Quibbles = SmallVec<[u16; IPV6_NUM_QUIBBLES]>;

/// Parse an IPv6 address with an optional `/n` suffix.
pub(super) fn parse_ipv6(input: &[u8]) -> Result<Inet, ParseErrorKind> {
    let mut head = Quibbles::new();
    let mut tail = Quibbles::new();
    let mut elided = false;
    let mut pos = 0;

    if input.starts_with(b"::") {
        if input.get(2) == Some(&b':') {
            return Err(ParseErrorKind::TripleColon);
        }
        elided = true;
        pos = 2;
    } else if input.first() == Some(&b':') {
        return Err(ParseErrorKind::MissingQuibble);
    }

    // After a single ':' a quibble is required; after '::' the address may end.
    let mut need_quibble = !elided;

    loop {
        let start = pos;
        pos += count_while(&input[pos..], |b| b.is_ascii_hexdigit());
        let digits = pos - start;

        if input.get(pos) == Some(&b'.') {
            let end = start + count_while(&input[start..], |b| b.is_ascii_digit() || b == b'.');
            if end < input.len() && input[end] != b'/' {
                return Err(ParseErrorKind::EmbeddedIpv4NotFinal);
            }
            let (address, consumed) = ipv4::parse_dotted(&input[start..end])?;
            if start + consumed != end {
                return Err(ParseErrorKind::TrailingCharacters);
            }
            let group = if elided { &mut tail } else { &mut head };
            group.push((address >> IPV6_QUIBBLE_BITS) as u16);
            group.push(address as u16);
            pos = end;
            break;
        }

        if digits == 0 {
            if need_quibble {
                return Err(match input.get(pos) {
                    None | Some(b'/') => ParseErrorKind::MissingQuibble,
                    Some(_) => ParseErrorKind::UnexpectedCharacter,
                });
            }
            break;
        }
        if digits > MAX_QUIBBLE_DIGITS {
            return Err(ParseErrorKind::QuibbleTooLong);
        }

        let quibble = input[start..pos]
            .iter()
            .fold(0u16, |acc, &d| (acc << 4) | hex_value(d));
        let group = if elided { &mut tail } else { &mut head };
        group.push(quibble);
        if head.len() + tail.len() > IPV6_NUM_QUIBBLES {
            return Err(ParseErrorKind::WrongQuibbleCount);
        }

        match (input.get(pos), input.get(pos + 1)) {
            (Some(b':'), Some(b':')) => {
                if elided {
                    return Err(ParseErrorKind::MultipleDoubleColons);
                }
                if input.get(pos + 2) == Some(&b':') {
                    return Err(ParseErrorKind::TripleColon);
                }
                elided = true;
                need_quibble = false;
                pos += 2;
            }
            (Some(b':'), _) => {
                need_quibble = true;
                pos += 1;
            }
            _ => break,
        }
    }

    if pos < input.len() && input[pos] != b'/' {
        return Err(ParseErrorKind::UnexpectedCharacter);
    }
    let prefix = parse_prefix(&input[pos..], IPV6_BITS, ParseErrorKind::UnexpectedCharacter)?;

    let count = head.len() + tail.len();
    if count > IPV6_NUM_QUIBBLES {
        return Err(ParseErrorKind::WrongQuibbleCount);
    }
    if elided && count == IPV6_NUM_QUIBBLES {
        return Err(ParseErrorKind::DoubleColonWithoutElision);
    }
    if !elided && count < IPV6_NUM_QUIBBLES {
        return Err(ParseErrorKind::WrongQuibbleCount);
    }

    let mut quibbles = [0u16; IPV6_NUM_QUIBBLES];
    quibbles[..head.len()].copy_from_slice(&head);
    quibbles[IPV6_NUM_QUIBBLES - tail.len()..].copy_from_slice(&tail);
    let address = quibbles
        .iter()
        .fold(0u128, |acc, &q| (acc << IPV6_QUIBBLE_BITS) | q as u128);

    Ok(Inet::new_unchecked(AddressFamily::Ipv6, address, prefix))
}

fn hex_value(digit: u8) -> u16 {
    match digit {
        b'0'..=b'9' => (digit - b'0') as u16,
        b'a'..=b'f' => (digit - b'a' + 10) as u16,
        b'A'..=b'F' => (digit - b'A' + 10) as u16,
        _ => 0,
    }
}
