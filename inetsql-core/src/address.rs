//! The inet value type.
//!
//! An [`Inet`] is one IPv4 or IPv6 address plus a prefix length. The
//! magnitude is always held as an unsigned 128-bit integer; IPv4 values only
//! ever use the low 32 bits.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::error::{InetError, RecordError};

/// Number of bits in an IPv4 address, and its default prefix length.
pub const IPV4_BITS: u16 = 32;

/// Number of bits in an IPv6 address, and its default prefix length.
pub const IPV6_BITS: u16 = 128;

/// Number of 16-bit quibbles in an IPv6 address.
pub const IPV6_NUM_QUIBBLES: usize = 8;

/// Bits per IPv6 quibble.
pub const IPV6_QUIBBLE_BITS: u32 = 16;

/// Address family tag.
///
/// The discriminants are the tags used by the persisted record layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum AddressFamily {
    /// Unset family. No [`Inet`] ever carries it.
    #[default]
    Invalid = 0,
    /// IPv4
    Ipv4 = 1,
    /// IPv6
    Ipv6 = 2,
}

impl AddressFamily {
    /// Width of the family's address space in bits.
    ///
    /// This is also the default prefix length.
    pub const fn bits(self) -> u16 {
        match self {
            AddressFamily::Ipv4 => IPV4_BITS,
            AddressFamily::Ipv6 => IPV6_BITS,
            AddressFamily::Invalid => 0,
        }
    }

    /// Tag byte used in persisted records.
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Look up a family from its persisted tag.
    pub fn from_tag(tag: u8) -> Result<Self, RecordError> {
        match tag {
            0 => Ok(AddressFamily::Invalid),
            1 => Ok(AddressFamily::Ipv4),
            2 => Ok(AddressFamily::Ipv6),
            other => Err(RecordError::UnknownFamily(other)),
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AddressFamily::Invalid => "invalid",
            AddressFamily::Ipv4 => "IPv4",
            AddressFamily::Ipv6 => "IPv6",
        })
    }
}

/// An IPv4 or IPv6 address with a prefix length.
///
/// Values are immutable once built. The derived ordering compares family,
/// then magnitude, then prefix length, which is the order of the persisted
/// record fields.
///
/// # Example
///
/// ```
/// use inetsql_core::{AddressFamily, Inet};
///
/// let inet: Inet = "192.168.0.0/16".parse().unwrap();
/// assert_eq!(inet.family(), AddressFamily::Ipv4);
/// assert_eq!(inet.magnitude(), 0xC0A8_0000);
/// assert_eq!(inet.prefix_len(), 16);
/// assert_eq!(inet.to_string(), "192.168.0.0/16");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Inet {
    family: AddressFamily,
    magnitude: u128,
    prefix_len: u16,
}

impl Inet {
    /// Build an IPv4 value. Fails if `prefix_len` exceeds 32.
    pub fn from_ipv4(magnitude: u32, prefix_len: u16) -> Result<Self, InetError> {
        if prefix_len > IPV4_BITS {
            return Err(InetError::InvalidPrefix {
                family: AddressFamily::Ipv4,
                prefix: prefix_len,
            });
        }
        Ok(Self::new_unchecked(
            AddressFamily::Ipv4,
            magnitude as u128,
            prefix_len,
        ))
    }

    /// Build an IPv6 value. Fails if `prefix_len` exceeds 128.
    pub fn from_ipv6(magnitude: u128, prefix_len: u16) -> Result<Self, InetError> {
        if prefix_len > IPV6_BITS {
            return Err(InetError::InvalidPrefix {
                family: AddressFamily::Ipv6,
                prefix: prefix_len,
            });
        }
        Ok(Self::new_unchecked(AddressFamily::Ipv6, magnitude, prefix_len))
    }

    /// Callers uphold the family invariants.
    pub(crate) const fn new_unchecked(
        family: AddressFamily,
        magnitude: u128,
        prefix_len: u16,
    ) -> Self {
        Self {
            family,
            magnitude,
            prefix_len,
        }
    }

    /// Rebuild a value from parts read back from storage, checking every
    /// invariant.
    pub fn from_parts(
        family: AddressFamily,
        magnitude: u128,
        prefix_len: u16,
    ) -> Result<Self, RecordError> {
        match family {
            AddressFamily::Invalid => Err(RecordError::InvalidFamily),
            AddressFamily::Ipv4 if magnitude > u32::MAX as u128 => {
                Err(RecordError::Ipv4KeyTooWide { key: magnitude })
            }
            _ if prefix_len > family.bits() => Err(RecordError::PrefixTooWide {
                family,
                prefix: prefix_len,
            }),
            _ => Ok(Self::new_unchecked(family, magnitude, prefix_len)),
        }
    }

    pub const fn family(&self) -> AddressFamily {
        self.family
    }

    /// The address as an unsigned integer, most significant group first.
    pub const fn magnitude(&self) -> u128 {
        self.magnitude
    }

    pub const fn prefix_len(&self) -> u16 {
        self.prefix_len
    }

    pub const fn is_ipv4(&self) -> bool {
        matches!(self.family, AddressFamily::Ipv4)
    }

    pub const fn is_ipv6(&self) -> bool {
        matches!(self.family, AddressFamily::Ipv6)
    }

    /// The same address with the prefix reset to the family default.
    ///
    /// ```
    /// use inetsql_core::Inet;
    ///
    /// let inet: Inet = "10.1.2.3/8".parse().unwrap();
    /// assert_eq!(inet.host().to_string(), "10.1.2.3");
    /// ```
    pub const fn host(&self) -> Self {
        Self::new_unchecked(self.family, self.magnitude, self.family.bits())
    }

    /// Copy of this value with a different magnitude. Family and prefix are
    /// kept; the caller has range-checked `magnitude` for the family.
    pub(crate) const fn with_magnitude(&self, magnitude: u128) -> Self {
        Self::new_unchecked(self.family, magnitude, self.prefix_len)
    }

    /// Convert to a standard library address, dropping the prefix.
    pub fn ip_addr(&self) -> IpAddr {
        match self.family {
            AddressFamily::Ipv4 => IpAddr::V4(Ipv4Addr::from(self.magnitude as u32)),
            _ => IpAddr::V6(Ipv6Addr::from(self.magnitude)),
        }
    }
}

impl From<Ipv4Addr> for Inet {
    fn from(addr: Ipv4Addr) -> Self {
        Self::new_unchecked(AddressFamily::Ipv4, u32::from(addr) as u128, IPV4_BITS)
    }
}

impl From<Ipv6Addr> for Inet {
    fn from(addr: Ipv6Addr) -> Self {
        Self::new_unchecked(AddressFamily::Ipv6, u128::from(addr), IPV6_BITS)
    }
}

impl From<IpAddr> for Inet {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(v4) => v4.into(),
            IpAddr::V6(v6) => v6.into(),
        }
    }
}
