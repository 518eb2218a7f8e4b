//! Checked offset arithmetic on inet values.
//!
//! `inet + n` and `inet - n` move the address by `n` while keeping its
//! family and prefix. The 128-bit step is overflow-checked, and IPv4
//! results must also stay within 32 bits.

use crate::address::{AddressFamily, Inet};
use crate::error::{InetError, RangeError, RecordError};
use crate::order::{KeyEncoding, OrderCodec};

/// Move `inet` by `delta`.
///
/// # Example
///
/// ```
/// use inetsql_core::{offset, Inet, RangeError};
///
/// let inet: Inet = "10.0.0.1/8".parse().unwrap();
/// assert_eq!(offset(&inet, 1).unwrap().to_string(), "10.0.0.2/8");
///
/// let last: Inet = "255.255.255.255".parse().unwrap();
/// assert_eq!(offset(&last, 1), Err(RangeError::OutsideIpv4));
/// ```
pub fn offset(inet: &Inet, delta: i128) -> Result<Inet, RangeError> {
    if delta == 0 {
        return Ok(*inet);
    }
    let magnitude = shift_magnitude(inet.magnitude(), inet.family(), delta)?;
    Ok(inet.with_magnitude(magnitude))
}

/// `inet + delta`.
pub fn add(inet: &Inet, delta: i128) -> Result<Inet, RangeError> {
    offset(inet, delta)
}

/// `inet - delta`, defined as `offset(inet, -delta)`.
///
/// `i128::MIN` has no negation and is reported as [`RangeError::Overflow`].
pub fn subtract(inet: &Inet, delta: i128) -> Result<Inet, RangeError> {
    let negated = delta.checked_neg().ok_or(RangeError::Overflow)?;
    offset(inet, negated)
}

/// Offset applied directly to a stored key.
///
/// The key is decoded to its magnitude, moved, and encoded again under the
/// same `encoding`. Family and prefix are unchanged by the caller.
///
/// A key of the unset family has no magnitude and is rejected with
/// [`RecordError::InvalidFamily`].
pub fn offset_key(
    key: u128,
    family: AddressFamily,
    delta: i128,
    encoding: KeyEncoding,
) -> Result<u128, InetError> {
    if family == AddressFamily::Invalid {
        return Err(RecordError::InvalidFamily.into());
    }
    if delta == 0 {
        return Ok(key);
    }
    let codec = OrderCodec::new(encoding);
    let magnitude = shift_magnitude(codec.decode(key, family), family, delta)?;
    // decode and encode share one involution
    Ok(codec.decode(magnitude, family))
}

fn shift_magnitude(magnitude: u128, family: AddressFamily, delta: i128) -> Result<u128, RangeError> {
    let shifted = if delta >= 0 {
        magnitude.checked_add(delta as u128)
    } else {
        magnitude.checked_sub(delta.unsigned_abs())
    }
    .ok_or(RangeError::Overflow)?;

    if family == AddressFamily::Ipv4 && shifted > u32::MAX as u128 {
        return Err(RangeError::OutsideIpv4);
    }
    Ok(shifted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inet(s: &str) -> Inet {
        s.parse().unwrap()
    }

    #[test]
    fn test_offset_ipv4() {
        assert_eq!(offset(&inet("10.0.0.1"), 1), Ok(inet("10.0.0.2")));
        assert_eq!(offset(&inet("10.0.0.255"), 1), Ok(inet("10.0.1.0")));
        assert_eq!(offset(&inet("10.0.1.0"), -1), Ok(inet("10.0.0.255")));
        assert_eq!(offset(&inet("0.0.0.0"), u32::MAX as i128), Ok(inet("255.255.255.255")));
    }

    #[test]
    fn test_offset_ipv4_range() {
        assert_eq!(offset(&inet("0.0.0.0"), -1), Err(RangeError::Overflow));
        assert_eq!(offset(&inet("255.255.255.255"), 1), Err(RangeError::OutsideIpv4));
        assert_eq!(offset(&inet("1.2.3.4"), i128::MAX), Err(RangeError::OutsideIpv4));
        assert_eq!(offset(&inet("1.2.3.4"), i128::MIN), Err(RangeError::Overflow));
    }

    #[test]
    fn test_offset_ipv6() {
        assert_eq!(offset(&inet("::"), 1), Ok(inet("::1")));
        assert_eq!(offset(&inet("::ffff"), 1), Ok(inet("::1:0")));
        assert_eq!(offset(&inet("::1"), -1), Ok(inet("::")));
        assert_eq!(
            offset(&inet("::"), i128::MAX),
            Ok(inet("7fff:ffff:ffff:ffff:ffff:ffff:ffff:ffff"))
        );
        assert_eq!(
            offset(&inet("ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff"), i128::MIN),
            Ok(inet("7fff:ffff:ffff:ffff:ffff:ffff:ffff:ffff"))
        );
    }

    #[test]
    fn test_offset_ipv6_overflow() {
        let max = inet("ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff");
        assert_eq!(offset(&max, 1), Err(RangeError::Overflow));
        assert_eq!(offset(&inet("::"), -1), Err(RangeError::Overflow));
    }

    #[test]
    fn test_offset_keeps_family_and_prefix() {
        let moved = offset(&inet("192.168.0.0/16"), 256).unwrap();
        assert_eq!(moved.to_string(), "192.168.1.0/16");
        let moved = offset(&inet("fe80::/10"), 2).unwrap();
        assert_eq!(moved.to_string(), "fe80::2/10");
    }

    #[test]
    fn test_zero_delta_is_identity() {
        let max = inet("ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff/64");
        assert_eq!(offset(&max, 0), Ok(max));
        assert_eq!(offset_key(7, AddressFamily::Ipv4, 0, KeyEncoding::LegacySigned), Ok(7));
    }

    #[test]
    fn test_subtract() {
        assert_eq!(subtract(&inet("10.0.0.2"), 1), Ok(inet("10.0.0.1")));
        assert_eq!(subtract(&inet("10.0.0.2"), -1), Ok(inet("10.0.0.3")));
        assert_eq!(subtract(&inet("::"), i128::MIN), Err(RangeError::Overflow));
        assert_eq!(add(&inet("::"), 16), Ok(inet("::10")));
    }

    #[test]
    fn test_offset_key_legacy() {
        let codec = OrderCodec::new(KeyEncoding::LegacySigned);
        let start = inet("::ffff");
        let key = codec.encode(&start);
        let moved = offset_key(key, AddressFamily::Ipv6, 1, KeyEncoding::LegacySigned).unwrap();
        assert_eq!(codec.decode(moved, AddressFamily::Ipv6), 0x1_0000);

        // crossing the sign bit in the legacy encoding
        let below = inet("7fff:ffff:ffff:ffff:ffff:ffff:ffff:ffff");
        let moved = offset_key(codec.encode(&below), AddressFamily::Ipv6, 1, KeyEncoding::LegacySigned).unwrap();
        assert_eq!(codec.decode(moved, AddressFamily::Ipv6), 1 << 127);
        assert!((moved as i128) > (codec.encode(&below) as i128));
    }

    #[test]
    fn test_offset_key_ipv4_range() {
        assert_eq!(
            offset_key(u32::MAX as u128, AddressFamily::Ipv4, 1, KeyEncoding::Unsigned),
            Err(RangeError::OutsideIpv4.into())
        );
    }

    #[test]
    fn test_offset_key_rejects_unset_family() {
        for delta in [0, 1, -1] {
            assert_eq!(
                offset_key(5, AddressFamily::Invalid, delta, KeyEncoding::Unsigned),
                Err(RecordError::InvalidFamily.into())
            );
        }
    }
}
