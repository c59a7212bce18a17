//! BER (Basic Encoding Rules) identifier and TLV codecs
//!
//! This crate provides the two framing primitives of ASN.1 BER:
//!
//! - [`Identifier`]: the identifier octet (class, primitive/constructed flag,
//!   tag number)
//! - [`Triplet`]: one Tag-Length-Value unit with definite-length encoding
//!   (short form below 128, long form with 1-4 length bytes)
//!
//! The two are independent: a triplet keeps its tag as the raw octet, and
//! callers decode it with [`Identifier::decode`] when they need its meaning.
//! [`TripletReader`] walks a buffer of concatenated triplets.
//!
//! Indefinite lengths, multi-octet identifiers and constructed-value parsing
//! are not supported.

pub mod identifier;
pub mod length;
pub mod reader;
pub mod triplet;

pub use identifier::{Identifier, TagKind};
pub use length::Length;
pub use reader::TripletReader;
pub use triplet::Triplet;
