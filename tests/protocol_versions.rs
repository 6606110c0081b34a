//! Integration tests for wire protocol version management.

use auditable_graph::graph::codec::codec_for;
use auditable_graph::{ConfigError, ProtocolVersion};

// =============================================================================
// Version Lifecycle Tests
// =============================================================================

#[test]
fn test_supported_versions_includes_latest() {
    let versions = ProtocolVersion::supported_versions();

    assert!(!versions.is_empty(), "Should have supported versions");
    assert!(
        versions.contains(&ProtocolVersion::latest()),
        "Should include latest version"
    );
}

#[test]
fn test_latest_version_is_v3() {
    assert_eq!(ProtocolVersion::latest(), ProtocolVersion::V3);
    assert!(ProtocolVersion::V3.is_latest());
    assert!(!ProtocolVersion::V1.is_latest());
    assert!(!ProtocolVersion::V2.is_latest());
}

#[test]
fn test_versions_order_chronologically() {
    assert!(ProtocolVersion::V1 < ProtocolVersion::V2);
    assert!(ProtocolVersion::V2 < ProtocolVersion::V3);

    let mut versions = vec![
        ProtocolVersion::V3,
        ProtocolVersion::V1,
        ProtocolVersion::V2,
    ];
    versions.sort();
    assert_eq!(
        versions,
        vec![
            ProtocolVersion::V1,
            ProtocolVersion::V2,
            ProtocolVersion::V3,
        ]
    );
}

// =============================================================================
// Parsing and Display Tests
// =============================================================================

#[test]
fn test_version_parses_prefixed_and_bare_forms() {
    assert_eq!("v1".parse::<ProtocolVersion>().unwrap(), ProtocolVersion::V1);
    assert_eq!("1".parse::<ProtocolVersion>().unwrap(), ProtocolVersion::V1);
    assert_eq!("V2".parse::<ProtocolVersion>().unwrap(), ProtocolVersion::V2);
    assert_eq!(
        " v3 ".parse::<ProtocolVersion>().unwrap(),
        ProtocolVersion::V3
    );
}

#[test]
fn test_version_rejects_unknown_strings() {
    for input in ["v0", "v4", "latest", ""] {
        assert!(matches!(
            input.parse::<ProtocolVersion>(),
            Err(ConfigError::InvalidProtocolVersion { .. })
        ));
    }
}

#[test]
fn test_version_display_round_trips_through_parse() {
    for version in ProtocolVersion::supported_versions() {
        let displayed = version.to_string();
        let parsed: ProtocolVersion = displayed.parse().unwrap();
        assert_eq!(parsed, version);
    }
}

// =============================================================================
// Codec Selection Tests
// =============================================================================

#[test]
fn test_every_version_has_a_codec() {
    for version in ProtocolVersion::supported_versions() {
        let codec = codec_for(version);
        assert_eq!(codec.version(), version);
    }
}

#[test]
fn test_codec_wire_characteristics_per_version() {
    assert_eq!(
        codec_for(ProtocolVersion::V1).accept_header(),
        "application/json"
    );
    assert_eq!(codec_for(ProtocolVersion::V1).properties_separator(), '|');

    assert_eq!(
        codec_for(ProtocolVersion::V2).accept_header(),
        "application/json"
    );
    assert_eq!(codec_for(ProtocolVersion::V2).properties_separator(), ',');

    assert_eq!(
        codec_for(ProtocolVersion::V3).accept_header(),
        "application/ld+json"
    );
    assert_eq!(codec_for(ProtocolVersion::V3).properties_separator(), ',');
}
