use bertlv::{Args, BerError, DriverConfig, Identifier, IdentifierClass, TagKind, Triplet, UniversalType};
use clap::Parser;

fn run(argv: &[&str]) -> anyhow::Result<String> {
    let args = Args::try_parse_from(argv)?;
    let config = DriverConfig::from_args(args)?;
    bertlv::run(&config)
}

#[test]
fn test_identifier_boolean() {
    let output = run(&["bertlv", "identifier", "01"]).unwrap();
    assert_eq!(
        output,
        "Universal: Boolean\nint: 1\nhex: 0x1\nbin: 0b0000_0001\nbyt: b'\\x01'"
    );
}

#[test]
fn test_identifier_json() {
    let output = run(&["bertlv", "--format", "json", "identifier", "0x41"]).unwrap();
    let identifier: Identifier = serde_json::from_str(&output).unwrap();
    assert_eq!(identifier.tag_class(), IdentifierClass::Application);
    assert_eq!(identifier.tag(), TagKind::Application(1));
}

#[test]
fn test_identifier_rejects_two_bytes() {
    let err = run(&["bertlv", "identifier", "0101"]).unwrap_err();
    assert_eq!(
        err.downcast_ref::<BerError>(),
        Some(&BerError::ExcessInput { expected: 1, actual: 2 })
    );
}

#[test]
fn test_triplet_stream() {
    let output = run(&["bertlv", "triplet", "81 01 01 30 00"]).unwrap();
    assert!(output.contains("Triplet(tag=0x81, length=1, value=[01])"));
    assert!(output.contains("identifier: Context: 1"));
    assert!(output.contains("identifier: Universal [Constructed]: Sequence"));
}

#[test]
fn test_triplet_non_minimal_length() {
    let err = run(&["bertlv", "triplet", "81810101"]).unwrap_err();
    assert_eq!(
        err.downcast_ref::<BerError>(),
        Some(&BerError::NonMinimalLength { length: 1 })
    );
}

#[test]
fn test_build_long_form() {
    let value = "00".repeat(200);
    let output = run(&["bertlv", "-f", "json", "build", "-t", "04", &value]).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    let encoded = json[0]["encoded"].as_str().unwrap();
    assert!(encoded.starts_with("0481c8"));
    assert_eq!(encoded.len(), 2 * (1 + 2 + 200));
}

#[test]
fn test_invalid_hex() {
    assert!(run(&["bertlv", "triplet", "zz"]).is_err());
}

#[test]
fn test_decode_build_roundtrip() {
    let triplet = Triplet::build(0x04, b"payload".to_vec()).unwrap();
    let (decoded, consumed) = Triplet::decode(&triplet.encode()).unwrap();
    assert_eq!(decoded, triplet);
    assert_eq!(consumed, triplet.byte_length());
    assert_eq!(
        decoded.identifier().unwrap().tag(),
        TagKind::Universal(UniversalType::OctetString)
    );
}
