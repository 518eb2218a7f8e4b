//! Order-preserving keys and the persisted record layout.
//!
//! A key is a 128-bit integer whose numeric order matches address order
//! within one family. The family travels next to the key, never inside it.
//!
//! ## Key encodings
//!
//! | Encoding | Key | Compared as |
//! |----------|-----|-------------|
//! | [`KeyEncoding::Unsigned`] | the magnitude | `u128` |
//! | [`KeyEncoding::LegacySigned`] | IPv6: magnitude with bit 127 flipped, IPv4: the magnitude | `i128` |
//!
//! `LegacySigned` exists only to read and write stores that persisted the
//! address as a signed 128-bit integer. New stores should use `Unsigned`.
//! IPv4 keys are identical in both encodings since bit 127 is never set.

use std::fmt;
use std::str::FromStr;

use crate::address::{AddressFamily, Inet};
use crate::error::RecordError;

const SIGN_BIT: u128 = 1 << 127;

/// How magnitudes are laid out in a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEncoding {
    /// Key is the magnitude.
    #[default]
    Unsigned,
    /// Key is read as a signed integer; IPv6 keys have the top bit flipped.
    LegacySigned,
}

impl KeyEncoding {
    pub fn name(&self) -> &'static str {
        match self {
            KeyEncoding::Unsigned => "unsigned",
            KeyEncoding::LegacySigned => "legacy-signed",
        }
    }
}

impl fmt::Display for KeyEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KeyEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unsigned" => Ok(KeyEncoding::Unsigned),
            "legacy-signed" | "legacy_signed" | "signed" => Ok(KeyEncoding::LegacySigned),
            other => Err(format!("unknown key encoding: {other}")),
        }
    }
}

/// Converts between magnitudes and keys for one [`KeyEncoding`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderCodec {
    encoding: KeyEncoding,
}

impl OrderCodec {
    pub const fn new(encoding: KeyEncoding) -> Self {
        Self { encoding }
    }

    pub const fn encoding(&self) -> KeyEncoding {
        self.encoding
    }

    /// Key bits for `inet`.
    ///
    /// Under `LegacySigned`, reinterpret the result with `as i128` (or use
    /// [`OrderCodec::encode_signed`]) before comparing.
    pub fn encode(&self, inet: &Inet) -> u128 {
        self.flip(inet.magnitude(), inet.family())
    }

    /// Magnitude stored under `key`.
    pub fn decode(&self, key: u128, family: AddressFamily) -> u128 {
        self.flip(key, family)
    }

    /// Key as the signed integer a legacy store holds.
    pub fn encode_signed(&self, inet: &Inet) -> i128 {
        self.encode(inet) as i128
    }

    /// Magnitude from a key read back as a signed integer.
    pub fn decode_signed(&self, key: i128, family: AddressFamily) -> u128 {
        self.decode(key as u128, family)
    }

    // The flip is its own inverse, so encode and decode share it.
    fn flip(&self, bits: u128, family: AddressFamily) -> u128 {
        match (self.encoding, family) {
            (KeyEncoding::LegacySigned, AddressFamily::Ipv6) => bits ^ SIGN_BIT,
            _ => bits,
        }
    }
}

/// Size of an encoded [`InetRecord`] in bytes.
pub const RECORD_SIZE: usize = 1 + 16 + 2;

/// One stored inet value: `{family_tag, key, prefix}`.
///
/// The byte form is the tag, the key as 16 big-endian bytes, then the prefix
/// as 2 big-endian bytes. Under [`KeyEncoding::Unsigned`] comparing the
/// bytes lexicographically gives the same order as comparing the [`Inet`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InetRecord {
    pub family_tag: u8,
    pub key: u128,
    pub prefix: u16,
}

impl InetRecord {
    pub fn encode(inet: &Inet, encoding: KeyEncoding) -> Self {
        Self {
            family_tag: inet.family().tag(),
            key: OrderCodec::new(encoding).encode(inet),
            prefix: inet.prefix_len(),
        }
    }

    pub fn decode(&self, encoding: KeyEncoding) -> Result<Inet, RecordError> {
        let family = AddressFamily::from_tag(self.family_tag)?;
        let magnitude = OrderCodec::new(encoding).decode(self.key, family);
        Inet::from_parts(family, magnitude, self.prefix)
    }

    pub fn to_bytes(&self) -> [u8; RECORD_SIZE] {
        let mut bytes = [0u8; RECORD_SIZE];
        bytes[0] = self.family_tag;
        bytes[1..17].copy_from_slice(&self.key.to_be_bytes());
        bytes[17..].copy_from_slice(&self.prefix.to_be_bytes());
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RecordError> {
        let bytes: &[u8; RECORD_SIZE] = bytes.try_into().map_err(|_| RecordError::Length {
            expected: RECORD_SIZE,
            actual: bytes.len(),
        })?;
        let mut key = [0u8; 16];
        key.copy_from_slice(&bytes[1..17]);
        Ok(Self {
            family_tag: bytes[0],
            key: u128::from_be_bytes(key),
            prefix: u16::from_be_bytes([bytes[17], bytes[18]]),
        })
    }
}
