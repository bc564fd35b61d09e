//! A collection of utilities for moving between bytes, nibbles and the hex
//! strings that show up in logs.

/// Splits bytes into hex digits and packs them back.
pub mod nibbles {
    use crate::error::{Error, Result};

    /// Expand each byte in 'input' into two digits, high nibble first.
    pub fn split(input: &[u8]) -> Vec<u8> {
        let mut digits = Vec::with_capacity(input.len() * 2);
        for byte in input {
            digits.push(byte >> 4);
            digits.push(byte & 0xf);
        }
        digits
    }

    /// Pack pairs of digits into bytes. A trailing unpaired digit is dropped.
    /// Returns the bytes and a flag that reports whether a digit was dropped.
    pub fn join(digits: &[u8]) -> Result<(Vec<u8>, bool)> {
        let truncated = digits.len() % 2 != 0;
        let paired = &digits[..digits.len() - digits.len() % 2];

        let mut bytes = Vec::with_capacity(paired.len() / 2);
        for (idx, pair) in paired.chunks_exact(2).enumerate() {
            let (hi, lo) = (pair[0], pair[1]);
            if hi > 0xf || lo > 0xf {
                return Err(Error::HexConversion(format!(
                    "digit pair {} ({}, {}) is not a pair of nibbles",
                    idx, hi, lo
                )));
            }
            bytes.push((hi << 4) | lo);
        }
        Ok((bytes, truncated))
    }

    /// Render digits as a lowercase hex string. Values above 15 are shown
    /// as '?'.
    pub fn to_hex(digits: &[u8]) -> String {
        const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";
        digits
            .iter()
            .map(|d| match HEX_CHARS.get(*d as usize) {
                Some(c) => *c as char,
                None => '?',
            })
            .collect()
    }

    #[test]
    fn test_split_high_nibble_first() {
        assert_eq!(split(&[0x48, 0x69]), vec![4, 8, 6, 9]);
        assert_eq!(split(&[]), Vec::<u8>::new());
        assert_eq!(split(&[0x0f, 0xf0]), vec![0, 15, 15, 0]);
    }

    #[test]
    fn test_join_drops_trailing_digit() {
        let (bytes, truncated) = join(&[4, 8, 6, 9, 7]).unwrap();
        assert_eq!(bytes, vec![0x48, 0x69]);
        assert!(truncated);

        let (bytes, truncated) = join(&[0]).unwrap();
        assert!(bytes.is_empty());
        assert!(truncated);
    }

    #[test]
    fn test_join_rejects_wide_digits() {
        assert!(join(&[4, 16]).is_err());
        // The unpaired trailing digit is dropped before validation.
        assert!(join(&[4, 8, 99]).is_ok());
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(&split(b"Hi")), "4869");
        assert_eq!(to_hex(&[10, 11, 16]), "ab?");
    }
}
