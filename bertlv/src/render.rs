//! Driver: run a [`DriverConfig`] and render the result

use anyhow::{Context, Result};
use serde::Serialize;

use bertlv_ber::{Identifier, Triplet, TripletReader};

use crate::cli::{Action, DriverConfig, OutputFormat};

/// One decoded or built triplet as reported by the driver
#[derive(Debug, Serialize)]
struct TripletReport<'a> {
    offset: usize,
    triplet: &'a Triplet,
    identifier: Identifier,
    encoded: String,
}

/// Execute the configured action and return the rendered output
///
/// # Error Handling
/// Codec errors are returned with the offset of the failing unit attached as
/// context; nothing is printed here.
pub fn run(config: &DriverConfig) -> Result<String> {
    match &config.action {
        Action::DecodeIdentifier(bytes) => {
            log::info!("Decoding identifier from {} byte(s)", bytes.len());
            let identifier = Identifier::decode_bytes(bytes).context("Failed to decode identifier")?;
            log::debug!("Decoded identifier {}", identifier);
            render_identifier(&identifier, config.format)
        }
        Action::DecodeTriplets(bytes) => {
            log::info!("Decoding triplets from {} byte(s)", bytes.len());
            let mut reader = TripletReader::new(bytes);
            let mut decoded = Vec::new();
            while reader.has_remaining() {
                let offset = reader.position();
                let triplet = reader
                    .next_triplet()
                    .with_context(|| format!("Failed to decode triplet at offset {}", offset))?;
                log::debug!("Triplet at offset {}: {}", offset, triplet);
                decoded.push((offset, triplet));
            }
            if decoded.is_empty() {
                log::warn!("Input contained no triplets");
            }
            render_triplets(&decoded, config.format)
        }
        Action::Build { tag, value } => {
            log::info!("Building triplet with tag {:#04x} and {} value byte(s)", tag, value.len());
            let triplet = Triplet::build(*tag, value.clone()).context("Failed to build triplet")?;
            render_triplets(&[(0, triplet)], config.format)
        }
    }
}

fn render_identifier(identifier: &Identifier, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(identifier.diagnostic()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(identifier).context("Failed to serialize identifier")
        }
    }
}

fn render_triplets(triplets: &[(usize, Triplet)], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut sections = Vec::with_capacity(triplets.len());
            for (offset, triplet) in triplets {
                let identifier = triplet.identifier()?;
                sections.push(format!(
                    "@{}\n{}\nidentifier: {}",
                    offset,
                    triplet.diagnostic(),
                    identifier
                ));
            }
            Ok(sections.join("\n\n"))
        }
        OutputFormat::Json => {
            let mut reports = Vec::with_capacity(triplets.len());
            for (offset, triplet) in triplets {
                reports.push(TripletReport {
                    offset: *offset,
                    triplet,
                    identifier: triplet.identifier()?,
                    encoded: hex::encode(triplet.encode()),
                });
            }
            serde_json::to_string_pretty(&reports).context("Failed to serialize triplets")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::LevelFilter;

    fn config(action: Action, format: OutputFormat) -> DriverConfig {
        DriverConfig {
            format,
            log_level: LevelFilter::Off,
            action,
        }
    }

    #[test]
    fn test_run_identifier_text() {
        let output = run(&config(Action::DecodeIdentifier(vec![0x01]), OutputFormat::Text)).unwrap();
        assert!(output.starts_with("Universal: Boolean\nint: 1"));
    }

    #[test]
    fn test_run_identifier_excess_input() {
        let err = run(&config(Action::DecodeIdentifier(vec![0x01, 0x02]), OutputFormat::Text))
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<bertlv_core::BerError>(),
            Some(&bertlv_core::BerError::ExcessInput { expected: 1, actual: 2 })
        );
    }

    #[test]
    fn test_run_triplets_text() {
        let output = run(&config(
            Action::DecodeTriplets(vec![0x02, 0x01, 0x05, 0x04, 0x00]),
            OutputFormat::Text,
        ))
        .unwrap();
        assert!(output.starts_with("@0\nTriplet(tag=0x02, length=1, value=[05])"));
        assert!(output.contains("\n\n@3\nTriplet(tag=0x04, length=0, value=[])"));
        assert!(output.contains("identifier: Universal: OctetString"));
    }

    #[test]
    fn test_run_triplets_reports_offset() {
        let err = run(&config(
            Action::DecodeTriplets(vec![0x02, 0x01, 0x05, 0x81, 0x81]),
            OutputFormat::Text,
        ))
        .unwrap_err();
        assert_eq!(err.to_string(), "Failed to decode triplet at offset 3");
    }

    #[test]
    fn test_run_build_json() {
        let output = run(&config(
            Action::Build {
                tag: 0x04,
                value: vec![0x68, 0x69],
            },
            OutputFormat::Json,
        ))
        .unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json[0]["offset"], 0);
        assert_eq!(json[0]["triplet"]["length"], 2);
        assert_eq!(json[0]["identifier"]["class"], "Universal");
        assert_eq!(json[0]["encoded"], "04026869");
    }
}
