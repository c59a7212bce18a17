//! BER identifier octet
//!
//! The identifier octet carries the class, the primitive/constructed flag and
//! a tag number:
//!
//! ```text
//! Bits: 8 7 6 5 4 3 2 1
//!       C C P T T T T T
//! ```
//! Where:
//! - CC = Class (00=Universal, 01=Application, 10=Context, 11=Private)
//! - P = Primitive (0) or Constructed (1)
//! - TTTTT = Tag number (0-31)
//!
//! Universal and Private tag numbers are resolved against [`UniversalType`];
//! Application and Context tag numbers are opaque. Multi-octet (high tag
//! number) identifiers are not supported.

use std::fmt;

use bertlv_core::{BerError, BerResult, IdentifierClass, ParseStage, UniversalType};
use serde::{Deserialize, Serialize};

const CONSTRUCTED_BIT: u8 = 0x20;
const TAG_NUMBER_MASK: u8 = 0x1F;

/// Tag number, interpreted according to the class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TagKind {
    Universal(UniversalType),
    Application(u8),
    Context(u8),
    Private(UniversalType),
}

impl TagKind {
    /// Resolve a raw tag number for the given class
    pub fn from_parts(class: IdentifierClass, number: u8) -> BerResult<Self> {
        match class {
            IdentifierClass::Universal => Ok(TagKind::Universal(UniversalType::from_u8(number)?)),
            IdentifierClass::Application => Ok(TagKind::Application(number)),
            IdentifierClass::Context => Ok(TagKind::Context(number)),
            IdentifierClass::Private => Ok(TagKind::Private(UniversalType::from_u8(number)?)),
        }
    }

    /// Class this tag number belongs to
    pub fn class(&self) -> IdentifierClass {
        match self {
            TagKind::Universal(_) => IdentifierClass::Universal,
            TagKind::Application(_) => IdentifierClass::Application,
            TagKind::Context(_) => IdentifierClass::Context,
            TagKind::Private(_) => IdentifierClass::Private,
        }
    }

    /// Raw tag number
    pub fn number(&self) -> u8 {
        match self {
            TagKind::Universal(ty) | TagKind::Private(ty) => ty.to_u8(),
            TagKind::Application(n) | TagKind::Context(n) => *n,
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagKind::Universal(ty) | TagKind::Private(ty) => write!(f, "{:?}", ty),
            TagKind::Application(n) | TagKind::Context(n) => write!(f, "{}", n),
        }
    }
}

/// Decoded identifier octet
///
/// The class is carried by the [`TagKind`] variant, so an identifier can never
/// hold a tag number of the wrong class. Construction checks that the tag
/// number fits the 5 bits of the octet; [`Identifier::encode`] is therefore
/// infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "IdentifierRepr", try_from = "IdentifierRepr")]
pub struct Identifier {
    constructed: bool,
    tag: TagKind,
}

impl Identifier {
    /// Create an identifier from explicit fields
    ///
    /// # Error Handling
    /// Returns [`BerError::TagNumberOutOfRange`] if the tag number does not fit
    /// in 5 bits (Application/Context numbers above 31, or the universal types
    /// numbered 32 and up).
    pub fn new(constructed: bool, tag: TagKind) -> BerResult<Self> {
        let number = tag.number();
        if number > TAG_NUMBER_MASK {
            return Err(BerError::TagNumberOutOfRange {
                class: tag.class(),
                number,
            });
        }
        Ok(Self { constructed, tag })
    }

    /// Create a Universal class identifier
    pub fn universal(constructed: bool, ty: UniversalType) -> BerResult<Self> {
        Self::new(constructed, TagKind::Universal(ty))
    }

    /// Create an Application class identifier
    pub fn application(constructed: bool, number: u8) -> BerResult<Self> {
        Self::new(constructed, TagKind::Application(number))
    }

    /// Create a Context-specific class identifier
    pub fn context(constructed: bool, number: u8) -> BerResult<Self> {
        Self::new(constructed, TagKind::Context(number))
    }

    /// Create a Private class identifier
    pub fn private(constructed: bool, ty: UniversalType) -> BerResult<Self> {
        Self::new(constructed, TagKind::Private(ty))
    }

    /// Decode an identifier octet
    ///
    /// Every 5-bit number has an entry in [`UniversalType`], so this only
    /// fails if that table ever loses an entry; the error is
    /// [`BerError::UnknownUniversalTag`].
    pub fn decode(octet: u8) -> BerResult<Self> {
        let class = IdentifierClass::from_octet(octet);
        let constructed = octet & CONSTRUCTED_BIT != 0;
        let tag = TagKind::from_parts(class, octet & TAG_NUMBER_MASK)?;
        Ok(Self { constructed, tag })
    }

    /// Decode an identifier given as an integer
    ///
    /// # Error Handling
    /// Returns [`BerError::IdentifierOutOfRange`] if the value does not fit
    /// in one octet.
    pub fn from_int(value: u32) -> BerResult<Self> {
        let octet = u8::try_from(value).map_err(|_| BerError::IdentifierOutOfRange(value))?;
        Self::decode(octet)
    }

    /// Decode an identifier from a buffer holding exactly one octet
    ///
    /// # Error Handling
    /// Returns error if:
    /// - Buffer is empty ([`BerError::InsufficientInput`])
    /// - Buffer has more than one byte ([`BerError::ExcessInput`])
    pub fn decode_bytes(data: &[u8]) -> BerResult<Self> {
        match data {
            [] => Err(BerError::InsufficientInput {
                stage: ParseStage::Identifier,
                needed: 1,
                available: 0,
            }),
            [octet] => Self::decode(*octet),
            _ => Err(BerError::ExcessInput {
                expected: 1,
                actual: data.len(),
            }),
        }
    }

    /// Encode the identifier octet
    pub fn encode(&self) -> u8 {
        let constructed_bit = if self.constructed { CONSTRUCTED_BIT } else { 0x00 };
        self.tag.class().to_bits() | constructed_bit | self.tag.number()
    }

    /// Get tag class
    pub fn tag_class(&self) -> IdentifierClass {
        self.tag.class()
    }

    /// Get class-dependent tag number
    pub fn tag(&self) -> TagKind {
        self.tag
    }

    /// Get raw tag number (bits 5-1)
    pub fn tag_number(&self) -> u8 {
        self.tag.number()
    }

    pub fn is_constructed(&self) -> bool {
        self.constructed
    }

    pub fn is_primitive(&self) -> bool {
        !self.constructed
    }

    /// Multi-line rendering for debugging: class and type, then the octet in
    /// decimal, hex, binary and byte-literal form.
    pub fn diagnostic(&self) -> String {
        let octet = self.encode();
        format!(
            "{}\nint: {}\nhex: {:#x}\nbin: 0b{:04b}_{:04b}\nbyt: b'{}'",
            self,
            octet,
            octet,
            octet >> 4,
            octet & 0x0F,
            octet.escape_ascii(),
        )
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag_class())?;
        if self.constructed {
            write!(f, " [Constructed]")?;
        }
        write!(f, ": {}", self.tag)
    }
}

impl TryFrom<u8> for Identifier {
    type Error = BerError;

    fn try_from(octet: u8) -> BerResult<Self> {
        Self::decode(octet)
    }
}

impl From<Identifier> for u8 {
    fn from(identifier: Identifier) -> u8 {
        identifier.encode()
    }
}

/// Serialized form; the class is written out for readers but derived from
/// the tag on the way back in.
#[derive(Serialize, Deserialize)]
struct IdentifierRepr {
    #[serde(skip_deserializing)]
    class: Option<IdentifierClass>,
    constructed: bool,
    tag: TagKind,
}

impl From<Identifier> for IdentifierRepr {
    fn from(identifier: Identifier) -> Self {
        Self {
            class: Some(identifier.tag_class()),
            constructed: identifier.constructed,
            tag: identifier.tag,
        }
    }
}

impl TryFrom<IdentifierRepr> for Identifier {
    type Error = BerError;

    fn try_from(repr: IdentifierRepr) -> BerResult<Self> {
        Identifier::new(repr.constructed, repr.tag)
    }
}
