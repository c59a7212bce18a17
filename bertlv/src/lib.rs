//! bertlv - ASN.1 BER identifier and TLV framing
//!
//! This library provides the identifier octet and Tag-Length-Value codecs of
//! ASN.1 Basic Encoding Rules, plus the driver behind the `bertlv` inspection
//! tool.
//!
//! # Architecture
//!
//! This library is organized as a workspace with multiple crates:
//!
//! - `bertlv-core`: Error taxonomy, identifier classes, universal type numbers
//! - `bertlv-ber`: Identifier, length and triplet codecs
//! - `bertlv`: Re-exports and the command line driver
//!
//! # Usage
//!
//! ```
//! use bertlv::{TagKind, Triplet, UniversalType};
//!
//! let (triplet, consumed) = Triplet::decode(&[0x01, 0x01, 0xFF])?;
//! assert_eq!(consumed, 3);
//! let identifier = triplet.identifier()?;
//! assert_eq!(identifier.tag(), TagKind::Universal(UniversalType::Boolean));
//! # Ok::<(), bertlv::BerError>(())
//! ```

// Re-export core types
pub use bertlv_core::{BerError, BerResult, IdentifierClass, LengthLimit, ParseStage, UniversalType};

// Re-export codecs
pub use bertlv_ber::{Identifier, Length, TagKind, Triplet, TripletReader};

pub mod cli;
pub mod render;

pub use cli::{Action, Args, CliError, DriverConfig, OutputFormat};
pub use render::run;
