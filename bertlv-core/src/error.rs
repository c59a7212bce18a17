use std::fmt;

use thiserror::Error;

use crate::class::IdentifierClass;

/// Position in an encoding at which input ran out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseStage {
    /// The single identifier octet
    Identifier,
    /// The tag octet of a TLV
    Tag,
    /// The first length octet of a TLV
    Length,
}

impl fmt::Display for ParseStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParseStage::Identifier => "identifier",
            ParseStage::Tag => "tag",
            ParseStage::Length => "length",
        };
        f.write_str(name)
    }
}

/// Error type for BER identifier and TLV operations
///
/// Every variant describes malformed input or a caller bug. Nothing here is
/// transient, so callers should surface the error instead of retrying.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BerError {
    #[error("Insufficient input at {stage}: need {needed} bytes, got {available}")]
    InsufficientInput {
        stage: ParseStage,
        needed: usize,
        available: usize,
    },

    #[error("Excess input: expected {expected} bytes, got {actual}")]
    ExcessInput { expected: usize, actual: usize },

    #[error("Truncated long form length: need {needed} length bytes, got {available}")]
    TruncatedLength { needed: usize, available: usize },

    #[error("Truncated value: length is {wanted}, but only {available} bytes remain")]
    TruncatedValue { wanted: usize, available: usize },

    #[error("Triplet length is {length}, but value contains only {actual} bytes")]
    ValueTooShort { length: u32, actual: usize },

    #[error("Triplet length is {length}, but value contains {actual} bytes")]
    ValueTooLong { length: u32, actual: usize },

    #[error("Long form length used for {length}, which fits the short form")]
    NonMinimalLength { length: u32 },

    #[error("Length too large: {0}")]
    LengthTooLarge(LengthLimit),

    #[error("Unknown universal tag number: {0}")]
    UnknownUniversalTag(u8),

    #[error("Tag number {number} does not fit the identifier octet for class {class:?}")]
    TagNumberOutOfRange { class: IdentifierClass, number: u8 },

    #[error("Identifier value out of range: {0:#x}")]
    IdentifierOutOfRange(u32),
}

/// Which limit a [`BerError::LengthTooLarge`] ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthLimit {
    /// The length octet is `0x80`, the indefinite form
    Indefinite,
    /// The length-of-length octet asks for more than 4 length bytes
    LengthOfLength(u8),
    /// The value does not fit in a 32-bit length
    Value(usize),
}

impl fmt::Display for LengthLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthLimit::Indefinite => write!(f, "indefinite length octet 0x80 is not supported"),
            LengthLimit::LengthOfLength(octet) => write!(
                f,
                "length octet {:#04x} needs {} length bytes (max 4)",
                octet,
                octet & 0x7F
            ),
            LengthLimit::Value(len) => write!(f, "{} bytes exceeds 0xFFFFFFFF", len),
        }
    }
}

impl BerError {
    /// True for the two construction-time length/value disagreements
    pub fn is_value_size_mismatch(&self) -> bool {
        matches!(
            self,
            BerError::ValueTooShort { .. } | BerError::ValueTooLong { .. }
        )
    }
}

/// Result type alias for BER operations
pub type BerResult<T> = Result<T, BerError>;
