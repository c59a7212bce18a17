//! Command line arguments and driver configuration
//!
//! [`Args`] is the raw clap surface; [`DriverConfig::from_args`] validates it
//! (hex decoding, tag width) so the rest of the driver only sees checked
//! values.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use thiserror::Error;

/// CLI argument parser for the `bertlv` binary.
///
/// Supports the following flags:
/// - `-f`, `--format`: output as plain text or JSON
/// - `-v`, `--verbose`: raise the log level (repeatable)
/// - `-h`, `--help`: print help and usage info
#[derive(Parser, Debug)]
#[command(author, version, about = "Inspect BER identifier octets and TLV triplets", long_about = None)]
pub struct Args {
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value_t = OutputFormat::Text,
        help = "Output format"
    )]
    pub format: OutputFormat,

    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        help = "Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence."
    )]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode a single identifier octet
    Identifier {
        /// Identifier octet as hex, e.g. 30 or 0x30
        hex: String,
    },
    /// Decode every TLV triplet in the input
    Triplet {
        /// Concatenated triplets as hex; whitespace is ignored
        hex: String,
    },
    /// Build a triplet from a tag and a value, then encode it
    Build {
        /// Tag octet as hex
        #[arg(short = 't', long = "tag")]
        tag: String,
        /// Value bytes as hex (may be empty)
        #[arg(default_value = "")]
        value: String,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Errors raised while turning [`Args`] into a [`DriverConfig`]
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid hex in {field}: {source}")]
    InvalidHex {
        field: &'static str,
        #[source]
        source: hex::FromHexError,
    },

    #[error("Tag must be exactly one byte, got {0}")]
    InvalidTag(usize),
}

/// Validated work item for the driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    DecodeIdentifier(Vec<u8>),
    DecodeTriplets(Vec<u8>),
    Build { tag: u8, value: Vec<u8> },
}

/// Driver configuration built from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    pub format: OutputFormat,
    pub log_level: LevelFilter,
    pub action: Action,
}

impl DriverConfig {
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let action = match args.command {
            Command::Identifier { hex } => Action::DecodeIdentifier(parse_hex("identifier", &hex)?),
            Command::Triplet { hex } => Action::DecodeTriplets(parse_hex("triplet", &hex)?),
            Command::Build { tag, value } => {
                let tag = match parse_hex("tag", &tag)?.as_slice() {
                    [octet] => *octet,
                    other => return Err(CliError::InvalidTag(other.len())),
                };
                Action::Build {
                    tag,
                    value: parse_hex("value", &value)?,
                }
            }
        };

        Ok(Self {
            format: args.format,
            log_level: level_for(args.verbose),
            action,
        })
    }
}

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Parse hex input, ignoring whitespace and an optional `0x` prefix
fn parse_hex(field: &'static str, input: &str) -> Result<Vec<u8>, CliError> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let digits = compact
        .strip_prefix("0x")
        .or_else(|| compact.strip_prefix("0X"))
        .unwrap_or(&compact);
    hex::decode(digits).map_err(|source| CliError::InvalidHex { field, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(argv: &[&str]) -> Result<DriverConfig, CliError> {
        let args = Args::try_parse_from(argv).unwrap();
        DriverConfig::from_args(args)
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("x", "0x30").unwrap(), vec![0x30]);
        assert_eq!(parse_hex("x", "81 01 01").unwrap(), vec![0x81, 0x01, 0x01]);
        assert_eq!(parse_hex("x", "").unwrap(), Vec::<u8>::new());
        assert!(matches!(
            parse_hex("x", "abc"),
            Err(CliError::InvalidHex { field: "x", .. })
        ));
    }

    #[test]
    fn test_identifier_command() {
        let config = config(&["bertlv", "identifier", "0x41"]).unwrap();
        assert_eq!(config.action, Action::DecodeIdentifier(vec![0x41]));
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_build_command() {
        let config = config(&["bertlv", "-f", "json", "-vv", "build", "--tag", "04", "6869"]).unwrap();
        assert_eq!(
            config.action,
            Action::Build {
                tag: 0x04,
                value: vec![0x68, 0x69]
            }
        );
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_build_rejects_wide_tag() {
        assert!(matches!(
            config(&["bertlv", "build", "--tag", "0102"]),
            Err(CliError::InvalidTag(2))
        ));
    }
}
