//! Universal type numbers (ITU-T X.680, clause 8.4)

use serde::{Deserialize, Serialize};

use crate::error::{BerError, BerResult};

/// Universal class tag numbers
///
/// Numbers 0-31 fit in the identifier octet; 32-36 are assigned by X.680 but
/// can only appear with the high-tag-number form, which is not supported here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UniversalType {
    EndOfContent = 0,
    Boolean = 1,
    Integer = 2,
    BitString = 3,
    OctetString = 4,
    Null = 5,
    ObjectIdentifier = 6,
    ObjectDescriptor = 7,
    External = 8,
    Real = 9,
    Enumerated = 10,
    EmbeddedPdv = 11,
    Utf8String = 12,
    RelativeOid = 13,
    Time = 14,
    Reserved = 15,
    /// SEQUENCE and SEQUENCE OF
    Sequence = 16,
    /// SET and SET OF
    Set = 17,
    NumericString = 18,
    PrintableString = 19,
    T61String = 20,
    VideotexString = 21,
    Ia5String = 22,
    UtcTime = 23,
    GeneralizedTime = 24,
    GraphicString = 25,
    VisibleString = 26,
    GeneralString = 27,
    UniversalString = 28,
    CharacterString = 29,
    BmpString = 30,
    Date = 31,
    TimeOfDay = 32,
    DateTime = 33,
    Duration = 34,
    OidIri = 35,
    RelativeOidIri = 36,
}

impl UniversalType {
    /// Look up a universal type by tag number
    pub fn from_u8(value: u8) -> BerResult<Self> {
        let ty = match value {
            0 => UniversalType::EndOfContent,
            1 => UniversalType::Boolean,
            2 => UniversalType::Integer,
            3 => UniversalType::BitString,
            4 => UniversalType::OctetString,
            5 => UniversalType::Null,
            6 => UniversalType::ObjectIdentifier,
            7 => UniversalType::ObjectDescriptor,
            8 => UniversalType::External,
            9 => UniversalType::Real,
            10 => UniversalType::Enumerated,
            11 => UniversalType::EmbeddedPdv,
            12 => UniversalType::Utf8String,
            13 => UniversalType::RelativeOid,
            14 => UniversalType::Time,
            15 => UniversalType::Reserved,
            16 => UniversalType::Sequence,
            17 => UniversalType::Set,
            18 => UniversalType::NumericString,
            19 => UniversalType::PrintableString,
            20 => UniversalType::T61String,
            21 => UniversalType::VideotexString,
            22 => UniversalType::Ia5String,
            23 => UniversalType::UtcTime,
            24 => UniversalType::GeneralizedTime,
            25 => UniversalType::GraphicString,
            26 => UniversalType::VisibleString,
            27 => UniversalType::GeneralString,
            28 => UniversalType::UniversalString,
            29 => UniversalType::CharacterString,
            30 => UniversalType::BmpString,
            31 => UniversalType::Date,
            32 => UniversalType::TimeOfDay,
            33 => UniversalType::DateTime,
            34 => UniversalType::Duration,
            35 => UniversalType::OidIri,
            36 => UniversalType::RelativeOidIri,
            _ => return Err(BerError::UnknownUniversalTag(value)),
        };
        Ok(ty)
    }

    /// Convert type to its tag number
    pub fn to_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for UniversalType {
    type Error = BerError;

    fn try_from(value: u8) -> BerResult<Self> {
        Self::from_u8(value)
    }
}

impl From<UniversalType> for u8 {
    fn from(ty: UniversalType) -> u8 {
        ty.to_u8()
    }
}
