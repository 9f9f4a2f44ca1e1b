//! Conversions between external hex keys and the 512 bit integer keyspace.

use num_bigint::BigUint;

use crate::{Error, Result};

/// Width of the identifier space in bits.
pub const KEYSPACE_BITS: usize = 512;

/// The exclusive upper bound of the full keyspace, `2^512`.
///
/// A bucket covering the whole space is `[BigUint::from(0u8), keyspace_end())`.
pub fn keyspace_end() -> BigUint {
    BigUint::from(1u8) << KEYSPACE_BITS
}

/// Convert a key from its external hex representation to its integer form.
///
/// This is the explicit boundary conversion for
/// [KBucket::key_in_range](crate::KBucket::key_in_range): callers holding a
/// hex string convert here, callers holding an [Id](crate::Id) use
/// [Id::to_uint](crate::Id::to_uint) instead.
pub fn hex_to_uint(hex: &str) -> Result<BigUint> {
    BigUint::parse_bytes(hex.as_bytes(), 16).ok_or_else(|| Error::InvalidHexKey(hex.into()))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn hex_to_uint_parses() {
        assert_eq!(hex_to_uint("0").unwrap(), BigUint::from(0u8));
        assert_eq!(hex_to_uint("ff").unwrap(), BigUint::from(255u8));
        assert_eq!(hex_to_uint("abc123").unwrap(), BigUint::from(0xabc123u32));
    }

    #[test]
    fn hex_to_uint_rejects_garbage() {
        assert!(matches!(hex_to_uint(""), Err(Error::InvalidHexKey(_))));
        assert!(matches!(hex_to_uint("xyz"), Err(Error::InvalidHexKey(_))));
    }

    #[test]
    fn keyspace_end_is_two_pow_512() {
        let end = keyspace_end();

        assert_eq!(end.bits(), 513);
        assert_eq!(end, hex_to_uint(&format!("1{}", "0".repeat(128))).unwrap());
    }
}
