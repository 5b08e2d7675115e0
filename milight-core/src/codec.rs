//! Hex encoding and the additive frame checksum
//!
//! The bridge protocol is usually written down as uppercase hex strings, so
//! both a byte-level and a hex-level form of each operation is provided. The
//! checksum is the low byte of the plain sum of every byte it covers.

use tracing::trace;

use crate::error::{Error, Result};

/// Encode the low 8 bits of `value` as two uppercase hex characters
///
/// # Examples
///
/// ```
/// use milight_core::codec;
///
/// assert_eq!(codec::encode_byte(0x4B), "4B");
/// assert_eq!(codec::encode_byte(0x1FF), "FF");
/// assert_eq!(codec::encode_byte(7), "07");
/// ```
pub fn encode_byte(value: u32) -> String {
    format!("{:02X}", value & 0xFF)
}

/// Additive checksum over raw bytes, truncated to one byte
pub fn checksum(bytes: &[u8]) -> u8 {
    let sum = bytes.iter().fold(0u8, |acc, b| acc.wrapping_add(*b));

    trace!(len = bytes.len(), checksum = sum, "Calculated checksum");

    sum
}

/// Additive checksum over a hex string, returned as two hex characters
///
/// # Errors
///
/// Returns [`Error::InvalidHex`] if `hex` is not an even-length hex string.
///
/// # Examples
///
/// ```
/// use milight_core::codec;
///
/// // 0x31 + 0x08 + 0x03 + 0x4B + 0x02
/// assert_eq!(codec::checksum_hex("31000008034B00000002").unwrap(), "89");
/// ```
pub fn checksum_hex(hex: &str) -> Result<String> {
    let bytes = decode(hex)?;
    Ok(encode_byte(checksum(&bytes).into()))
}

/// Decode a hex string into bytes
pub fn decode(hex: &str) -> Result<Vec<u8>> {
    hex::decode(hex).map_err(|e| Error::InvalidHex {
        input: hex.to_string(),
        reason: e.to_string(),
    })
}

/// Decode a hex string that must describe exactly `N` bytes
pub fn decode_exact<const N: usize>(hex: &str, field: &'static str) -> Result<[u8; N]> {
    let mut out = [0u8; N];
    if hex.len() != N * 2 {
        return Err(Error::InvalidLength {
            field,
            expected: N * 2,
            actual: hex.len(),
        });
    }
    hex::decode_to_slice(hex, &mut out).map_err(|e| Error::InvalidHex {
        input: hex.to_string(),
        reason: e.to_string(),
    })?;
    Ok(out)
}

/// Position of the first occurrence of `needle` in `haystack`
pub fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_encode_byte_pads_and_masks() {
        assert_eq!(encode_byte(0), "00");
        assert_eq!(encode_byte(0x0A), "0A");
        assert_eq!(encode_byte(256), "00");
        assert_eq!(encode_byte(0x3E), "3E");
    }

    #[test]
    fn test_checksum_wraps() {
        assert_eq!(checksum(&[0xFF, 0x02]), 0x01);
        assert_eq!(checksum(&[]), 0);
    }

    #[test]
    fn test_checksum_hex_brightness_frame() {
        // 31 + 0000 + 08034B + 000000 + 02
        assert_eq!(checksum_hex("31000008034B00000002").unwrap(), "89");
    }

    #[test]
    fn test_checksum_hex_rejects_garbage() {
        assert!(matches!(checksum_hex("3G"), Err(Error::InvalidHex { .. })));
        assert!(matches!(checksum_hex("310"), Err(Error::InvalidHex { .. })));
    }

    #[test]
    fn test_decode_exact_length() {
        assert_eq!(decode_exact::<3>("0801FF", "command").unwrap(), [0x08, 0x01, 0xFF]);
        assert!(matches!(
            decode_exact::<3>("0801", "command"),
            Err(Error::InvalidLength {
                field: "command",
                expected: 6,
                actual: 4
            })
        ));
    }

    #[test]
    fn test_find_marker() {
        let stream = [0xAA, 0x88, 0x00, 0x00, 0x00, 0x03, 0x00, 0x07, 0x00];
        assert_eq!(find(&stream, &[0x88, 0x00, 0x00, 0x00, 0x03]), Some(1));
        assert_eq!(find(&stream, &[0x88, 0x01]), None);
        assert_eq!(find(&[0x01], &[0x01, 0x02]), None);
    }

    proptest! {
        #[test]
        fn prop_encode_byte_round_trips(value in any::<u32>()) {
            let encoded = encode_byte(value);
            prop_assert_eq!(encoded.len(), 2);
            prop_assert_eq!(u32::from_str_radix(&encoded, 16).unwrap(), value % 256);
        }

        #[test]
        fn prop_checksum_ignores_grouping(frame in any::<[u8; 10]>(), split in 0usize..=10) {
            let (head, tail) = frame.split_at(split);
            let combined = checksum(head).wrapping_add(checksum(tail));
            let total: u32 = frame.iter().map(|b| u32::from(*b)).sum();

            prop_assert_eq!(checksum(&frame), combined);
            prop_assert_eq!(u32::from(checksum(&frame)), total & 0xFF);
            prop_assert_eq!(
                checksum_hex(&hex::encode_upper(frame)).unwrap(),
                encode_byte(total)
            );
        }
    }
}
