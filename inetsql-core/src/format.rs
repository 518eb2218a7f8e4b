//! Canonical text rendering of [`Inet`] values.
//!
//! IPv4 is written as four decimal octets. IPv6 is written as lowercase hex
//! quibbles with the longest run of two or more zero quibbles collapsed to
//! `::` (left-most run on ties), and with the low 32 bits in dotted-decimal
//! for the IPv4-mapped, IPv4-translated and deprecated IPv4-compatible forms.
//! The `/n` suffix is written only when it differs from the family width.

use std::fmt::{self, Write};

use crate::address::{AddressFamily, Inet, IPV4_BITS, IPV6_BITS, IPV6_NUM_QUIBBLES, IPV6_QUIBBLE_BITS};

/// Render the canonical text of `inet`.
///
/// This is the same as `inet.to_string()`.
pub fn format(inet: &Inet) -> String {
    inet.to_string()
}

impl fmt::Display for Inet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.family() {
            AddressFamily::Ipv4 => {
                write_ipv4(f, self.magnitude() as u32)?;
                write_prefix(f, self.prefix_len(), IPV4_BITS)
            }
            AddressFamily::Ipv6 => {
                write_ipv6(f, self.magnitude())?;
                write_prefix(f, self.prefix_len(), IPV6_BITS)
            }
            AddressFamily::Invalid => unreachable!("Inet is never built with an invalid family"),
        }
    }
}

fn write_prefix(f: &mut fmt::Formatter<'_>, prefix: u16, default: u16) -> fmt::Result {
    if prefix != default {
        write!(f, "/{prefix}")?;
    }
    Ok(())
}

fn write_ipv4(f: &mut fmt::Formatter<'_>, address: u32) -> fmt::Result {
    let [a, b, c, d] = address.to_be_bytes();
    write!(f, "{a}.{b}.{c}.{d}")
}

fn write_ipv6(f: &mut fmt::Formatter<'_>, address: u128) -> fmt::Result {
    let quibbles = split_quibbles(address);
    let run = longest_zero_run(&quibbles);
    let dotted_tail = run.is_some_and(|run| embeds_ipv4(&quibbles, run));

    let mut separate = false;
    let mut i = 0;
    while i < IPV6_NUM_QUIBBLES {
        if let Some(run) = run.filter(|run| run.start == i) {
            f.write_str("::")?;
            separate = false;
            i = run.end;
            continue;
        }
        if separate {
            f.write_char(':')?;
        }
        if i == 6 && dotted_tail {
            return write_ipv4(f, address as u32);
        }
        write!(f, "{:x}", quibbles[i])?;
        separate = true;
        i += 1;
    }
    Ok(())
}

/// A half-open range of zero quibbles chosen for `::` compression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ZeroRun {
    start: usize,
    end: usize,
}

impl ZeroRun {
    fn len(&self) -> usize {
        self.end - self.start
    }
}

fn split_quibbles(address: u128) -> [u16; IPV6_NUM_QUIBBLES] {
    let mut quibbles = [0u16; IPV6_NUM_QUIBBLES];
    for (i, quibble) in quibbles.iter_mut().enumerate() {
        let shift = (IPV6_NUM_QUIBBLES - 1 - i) as u32 * IPV6_QUIBBLE_BITS;
        *quibble = (address >> shift) as u16;
    }
    quibbles
}

/// Longest run of at least two zero quibbles; the earliest wins a tie.
fn longest_zero_run(quibbles: &[u16; IPV6_NUM_QUIBBLES]) -> Option<ZeroRun> {
    let mut best: Option<ZeroRun> = None;
    let mut i = 0;
    while i < IPV6_NUM_QUIBBLES {
        if quibbles[i] != 0 {
            i += 1;
            continue;
        }
        let start = i;
        while i < IPV6_NUM_QUIBBLES && quibbles[i] == 0 {
            i += 1;
        }
        let candidate = ZeroRun { start, end: i };
        if candidate.len() > 1 && best.map_or(true, |b| candidate.len() > b.len()) {
            best = Some(candidate);
        }
    }
    best
}

/// Whether the low 32 bits are written in dotted-decimal.
///
/// - `::ffff:a.b.c.d` (IPv4-mapped)
/// - `::ffff:0:a.b.c.d` (IPv4-translated)
/// - `::a.b.c.d` (deprecated IPv4-compatible), except when the last quibble is 1
fn embeds_ipv4(quibbles: &[u16; IPV6_NUM_QUIBBLES], run: ZeroRun) -> bool {
    if run.start != 0 {
        return false;
    }
    match run.end {
        6 => quibbles[7] != 1,
        5 => quibbles[5] == 0xffff,
        4 => quibbles[4] == 0xffff && quibbles[5] == 0,
        _ => false,
    }
}
