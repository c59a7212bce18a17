//! Core types for the BER identifier and TLV codecs
//!
//! This crate provides the error taxonomy and the enumerations shared by
//! the codec crate: identifier classes and universal type numbers.

pub mod class;
pub mod error;
pub mod universal;

pub use class::IdentifierClass;
pub use error::{BerError, BerResult, LengthLimit, ParseStage};
pub use universal::UniversalType;
