//! TLV (Tag-Length-Value) triplet
//!
//! A triplet is one BER unit: the raw identifier octet, a definite length and
//! exactly that many value bytes. The tag is kept as the raw octet; use
//! [`Triplet::identifier`] to interpret it.

use std::fmt;

use bertlv_core::{BerError, BerResult, ParseStage};
use bytes::BufMut;
use serde::{Deserialize, Serialize};

use crate::identifier::Identifier;
use crate::length::Length;

/// One BER TLV unit
///
/// `length == value.len()` always holds; it is checked by every constructor,
/// by [`Triplet::decode`] and on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TripletRepr")]
pub struct Triplet {
    tag: u8,
    length: u32,
    #[serde(with = "serde_bytes")]
    value: Vec<u8>,
}

impl Triplet {
    /// Create a triplet with an explicit length
    ///
    /// # Error Handling
    /// Returns error if the declared length and the value size disagree:
    /// - [`BerError::ValueTooShort`]: `length` is larger than the value
    /// - [`BerError::ValueTooLong`]: the value is larger than `length`
    pub fn new(tag: u8, length: u32, value: impl Into<Vec<u8>>) -> BerResult<Self> {
        let value = value.into();
        let actual = value.len();
        if (length as usize) > actual {
            return Err(BerError::ValueTooShort { length, actual });
        }
        if (length as usize) < actual {
            return Err(BerError::ValueTooLong { length, actual });
        }
        Ok(Self { tag, length, value })
    }

    /// Create a triplet whose length is taken from the value
    ///
    /// # Error Handling
    /// Returns [`BerError::LengthTooLarge`] if the value is longer than
    /// `u32::MAX` bytes, which the 4 length bytes of the long form cannot express.
    pub fn build(tag: u8, value: impl Into<Vec<u8>>) -> BerResult<Self> {
        let value = value.into();
        let length = Length::from_usize(value.len())?.value();
        Ok(Self { tag, length, value })
    }

    /// Get the raw identifier octet
    pub fn tag(&self) -> u8 {
        self.tag
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn value(&self) -> &[u8] {
        &self.value
    }

    pub fn into_value(self) -> Vec<u8> {
        self.value
    }

    /// Decode the tag octet as an [`Identifier`]
    pub fn identifier(&self) -> BerResult<Identifier> {
        Identifier::decode(self.tag)
    }

    /// Total encoded size: tag byte, length field and value
    pub fn byte_length(&self) -> usize {
        1 + Length::new(self.length).encoded_len() + self.value.len()
    }

    /// Write `tag ++ length ++ value` into `buf`
    pub fn encode_into<B: BufMut>(&self, buf: &mut B) {
        buf.put_u8(self.tag);
        Length::new(self.length).encode_into(buf);
        buf.put_slice(&self.value);
    }

    /// Encode the triplet to bytes
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.byte_length());
        self.encode_into(&mut out);
        out
    }

    /// Decode one triplet from the start of `data`
    ///
    /// # Returns
    /// Returns `Ok((Triplet, bytes_consumed))` if successful. Bytes after the
    /// value are not consumed, so concatenated triplets can be decoded one
    /// after another.
    ///
    /// # Decoding Process
    /// 1. Read tag byte
    /// 2. Decode length (see [`Length::decode`] for the length errors)
    /// 3. Copy exactly `length` value bytes
    ///
    /// # Error Handling
    /// Returns error if:
    /// - Buffer is empty ([`BerError::InsufficientInput`])
    /// - Length field is missing, truncated, non-minimal or uses an unsupported form
    /// - Fewer than `length` bytes remain ([`BerError::TruncatedValue`])
    pub fn decode(data: &[u8]) -> BerResult<(Self, usize)> {
        let (&tag, rest) = data.split_first().ok_or(BerError::InsufficientInput {
            stage: ParseStage::Tag,
            needed: 1,
            available: 0,
        })?;

        let (length, length_bytes) = Length::decode(rest)?;
        let rest = &rest[length_bytes..];

        let wanted = length.value() as usize;
        if rest.len() < wanted {
            return Err(BerError::TruncatedValue {
                wanted,
                available: rest.len(),
            });
        }

        let triplet = Self {
            tag,
            length: length.value(),
            value: rest[..wanted].to_vec(),
        };
        Ok((triplet, 1 + length_bytes + wanted))
    }

    /// Multi-line rendering for debugging: tag and length in hex and decimal,
    /// the value bytes, the encoded size and the full encoding.
    pub fn diagnostic(&self) -> String {
        format!(
            "{}\ntag: {:#04x}, length: {:#04x}\ntag: {}, length: {}: [{}]\nbyte_length: {}\nbytes: [{}]",
            self,
            self.tag,
            self.length,
            self.tag,
            self.length,
            hex_bytes(&self.value),
            self.byte_length(),
            hex_bytes(&self.encode()),
        )
    }
}

impl fmt::Display for Triplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Triplet(tag={:#04x}, length={}, value=[{}])",
            self.tag,
            self.length,
            hex_bytes(&self.value)
        )
    }
}

fn hex_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Deserialize)]
struct TripletRepr {
    tag: u8,
    length: u32,
    #[serde(with = "serde_bytes")]
    value: Vec<u8>,
}

impl TryFrom<TripletRepr> for Triplet {
    type Error = BerError;

    fn try_from(repr: TripletRepr) -> BerResult<Self> {
        Triplet::new(repr.tag, repr.length, repr.value)
    }
}
