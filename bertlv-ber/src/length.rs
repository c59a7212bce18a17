//! BER definite-length encoding
//!
//! Length can be encoded in two forms:
//! - **Short form** (1 byte): For lengths 0-127
//!   - Bit 8 = 0
//!   - Bits 7-1 = length value
//! - **Long form** (2-5 bytes): For lengths 128 and up
//!   - First byte: Bit 8 = 1, Bits 7-1 = number of length bytes (1-4)
//!   - Following bytes: Big-endian length value
//!
//! | length range | encoding |
//! |---|---|
//! | 0-127 | single byte = length |
//! | 128-255 | `0x81` + 1 byte |
//! | 256-65535 | `0x82` + 2 bytes |
//! | 65536-16777215 | `0x83` + 3 bytes |
//! | 16777216-4294967295 | `0x84` + 4 bytes |
//!
//! Decoding is strict: the long form is rejected for lengths below 128. Any
//! length octet outside `0x00..=0x84` (the indefinite `0x80`, or more than 4
//! length bytes) is reported as [`BerError::LengthTooLarge`].

use bertlv_core::{BerError, BerResult, LengthLimit, ParseStage};
use bytes::{Buf, BufMut};

const LONG_FORM: u8 = 0x80;
const MAX_LENGTH_BYTES: u8 = 4;

/// Definite length of a TLV value
///
/// The form is chosen from the value, so encoding is always minimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Length(u32);

impl Length {
    pub fn new(length: u32) -> Self {
        Self(length)
    }

    /// Length of a value held in memory
    ///
    /// # Error Handling
    /// Returns [`BerError::LengthTooLarge`] if `len` exceeds `u32::MAX`.
    pub fn from_usize(len: usize) -> BerResult<Self> {
        u32::try_from(len)
            .map(Self)
            .map_err(|_| BerError::LengthTooLarge(LengthLimit::Value(len)))
    }

    /// Get the length value
    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn is_long_form(&self) -> bool {
        self.0 >= u32::from(LONG_FORM)
    }

    /// Number of big-endian bytes following the first length byte (0-4)
    pub fn extra_bytes(&self) -> usize {
        match self.0 {
            0..=0x7F => 0,
            0x80..=0xFF => 1,
            0x100..=0xFFFF => 2,
            0x1_0000..=0xFF_FFFF => 3,
            _ => 4,
        }
    }

    /// Size of the whole length field
    pub fn encoded_len(&self) -> usize {
        1 + self.extra_bytes()
    }

    /// Write the length field into `buf`
    pub fn encode_into<B: BufMut>(&self, buf: &mut B) {
        let extra = self.extra_bytes();
        if extra == 0 {
            buf.put_u8(self.0 as u8);
        } else {
            buf.put_u8(LONG_FORM | extra as u8);
            buf.put_uint(u64::from(self.0), extra);
        }
    }

    /// Encode length to bytes
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        self.encode_into(&mut out);
        out
    }

    /// Decode a length field from the start of `data`
    ///
    /// # Returns
    /// Returns `Ok((Length, bytes_consumed))` if successful.
    ///
    /// # Error Handling
    /// Returns error if:
    /// - Buffer is empty ([`BerError::InsufficientInput`])
    /// - The first byte is `0x80` or asks for more than 4 length bytes ([`BerError::LengthTooLarge`])
    /// - Fewer length bytes follow than announced ([`BerError::TruncatedLength`])
    /// - The long form encodes a length below 128 ([`BerError::NonMinimalLength`])
    pub fn decode(data: &[u8]) -> BerResult<(Self, usize)> {
        let first_byte = *data.first().ok_or(BerError::InsufficientInput {
            stage: ParseStage::Length,
            needed: 1,
            available: 0,
        })?;

        if first_byte & LONG_FORM == 0 {
            return Ok((Self(u32::from(first_byte)), 1));
        }

        let num_bytes = first_byte & !LONG_FORM;
        if num_bytes == 0 {
            return Err(BerError::LengthTooLarge(LengthLimit::Indefinite));
        }
        if num_bytes > MAX_LENGTH_BYTES {
            return Err(BerError::LengthTooLarge(LengthLimit::LengthOfLength(first_byte)));
        }

        let num_bytes = usize::from(num_bytes);
        let available = data.len() - 1;
        if available < num_bytes {
            return Err(BerError::TruncatedLength {
                needed: num_bytes,
                available,
            });
        }

        let mut length_bytes = &data[1..1 + num_bytes];
        let length = length_bytes.get_uint(num_bytes) as u32;
        if length < u32::from(LONG_FORM) {
            return Err(BerError::NonMinimalLength { length });
        }

        Ok((Self(length), 1 + num_bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_length_table() {
        let cases: &[(u32, &[u8])] = &[
            (0, &[0x00]),
            (127, &[0x7F]),
            (128, &[0x81, 0x80]),
            (255, &[0x81, 0xFF]),
            (256, &[0x82, 0x01, 0x00]),
            (65535, &[0x82, 0xFF, 0xFF]),
            (65536, &[0x83, 0x01, 0x00, 0x00]),
            (0xFF_FFFF, &[0x83, 0xFF, 0xFF, 0xFF]),
            (0x100_0000, &[0x84, 0x01, 0x00, 0x00, 0x00]),
            (u32::MAX, &[0x84, 0xFF, 0xFF, 0xFF, 0xFF]),
        ];
        for &(value, expected) in cases {
            let length = Length::new(value);
            assert_eq!(length.encode(), expected, "length {}", value);
            assert_eq!(length.encoded_len(), expected.len());
            assert_eq!(Length::decode(expected).unwrap(), (length, expected.len()));
        }
    }

    #[test]
    fn test_short_form_boundary() {
        assert!(!Length::new(127).is_long_form());
        assert!(Length::new(128).is_long_form());
    }

    #[test]
    fn test_decode_leaves_trailing_bytes() {
        let (length, consumed) = Length::decode(&[0x05, 0xAA, 0xBB]).unwrap();
        assert_eq!(length.value(), 5);
        assert_eq!(consumed, 1);
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(
            Length::decode(&[]),
            Err(BerError::InsufficientInput {
                stage: ParseStage::Length,
                needed: 1,
                available: 0,
            })
        );
    }

    #[test]
    fn test_decode_indefinite() {
        assert_eq!(
            Length::decode(&[0x80, 0x00]),
            Err(BerError::LengthTooLarge(LengthLimit::Indefinite))
        );
    }

    #[test]
    fn test_unsupported_length_octets_share_error_kind() {
        for octet in [0x80u8, 0x85, 0x88, 0xFF] {
            let result = Length::decode(&[octet, 0x01, 0x02, 0x03, 0x04, 0x05]);
            assert!(
                matches!(result, Err(BerError::LengthTooLarge(_))),
                "octet {:#04x} gave {:?}",
                octet,
                result
            );
        }
    }

    #[test]
    fn test_decode_too_many_length_bytes() {
        assert_eq!(
            Length::decode(&[0x85, 0x01, 0x00, 0x00, 0x00, 0x00]),
            Err(BerError::LengthTooLarge(LengthLimit::LengthOfLength(0x85)))
        );
        assert_eq!(
            Length::decode(&[0xFF]),
            Err(BerError::LengthTooLarge(LengthLimit::LengthOfLength(0xFF)))
        );
    }

    #[test]
    fn test_decode_truncated() {
        assert_eq!(
            Length::decode(&[0x81]),
            Err(BerError::TruncatedLength { needed: 1, available: 0 })
        );
        assert_eq!(
            Length::decode(&[0x84, 0x01, 0x00]),
            Err(BerError::TruncatedLength { needed: 4, available: 2 })
        );
    }

    #[test]
    fn test_decode_non_minimal() {
        assert_eq!(
            Length::decode(&[0x81, 0x01]),
            Err(BerError::NonMinimalLength { length: 1 })
        );
        assert_eq!(
            Length::decode(&[0x82, 0x00, 0x7F]),
            Err(BerError::NonMinimalLength { length: 127 })
        );
    }

    #[test]
    fn test_from_usize() {
        assert_eq!(Length::from_usize(300).unwrap().value(), 300);
        assert_eq!(Length::from_usize(u32::MAX as usize).unwrap().value(), u32::MAX);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_from_usize_too_large() {
        let len = u32::MAX as usize + 1;
        assert_eq!(
            Length::from_usize(len),
            Err(BerError::LengthTooLarge(LengthLimit::Value(len)))
        );
    }

    #[quickcheck]
    fn prop_encode_decode_any_length(value: u32) -> bool {
        let length = Length::new(value);
        let encoded = length.encode();
        let long_form_ok = (value < 128) == (encoded.len() == 1);
        long_form_ok && Length::decode(&encoded) == Ok((length, encoded.len()))
    }
}
