//! Identifier class (bits 7-6 of the identifier octet)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier class
///
/// ASN.1 defines four tag classes:
/// - **Universal**: Standard ASN.1 types (INTEGER, OCTET STRING, etc.)
/// - **Application**: Application-specific types
/// - **Context**: Context-specific types (used inside SEQUENCE/SET)
/// - **Private**: Private/implementation-specific types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdentifierClass {
    /// Universal class (00)
    Universal = 0,
    /// Application class (01)
    Application = 1,
    /// Context-specific class (10)
    Context = 2,
    /// Private class (11)
    Private = 3,
}

impl IdentifierClass {
    /// Get class from the identifier octet (bits 7-6)
    pub fn from_octet(octet: u8) -> Self {
        match octet >> 6 {
            0 => IdentifierClass::Universal,
            1 => IdentifierClass::Application,
            2 => IdentifierClass::Context,
            _ => IdentifierClass::Private,
        }
    }

    /// Class bits shifted into position for encoding
    pub fn to_bits(self) -> u8 {
        (self as u8) << 6
    }

    /// Capitalized class name used in diagnostic output
    pub fn name(self) -> &'static str {
        match self {
            IdentifierClass::Universal => "Universal",
            IdentifierClass::Application => "Application",
            IdentifierClass::Context => "Context",
            IdentifierClass::Private => "Private",
        }
    }
}

impl fmt::Display for IdentifierClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
