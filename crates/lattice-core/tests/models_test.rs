use lattice_core::layer::LayerKind;
use lattice_core::models::Contradiction;

#[test]
fn layer_kind_serializes_snake_case() {
    assert_eq!(serde_json::to_value(LayerKind::Clock).unwrap(), "clock");
    assert_eq!(serde_json::to_value(LayerKind::Support).unwrap(), "support");

    let kinds: Vec<LayerKind> = serde_json::from_str(r#"["support", "clock"]"#).unwrap();
    assert_eq!(kinds, vec![LayerKind::Support, LayerKind::Clock]);
}

#[test]
fn layer_kind_display_matches_wire_name() {
    assert_eq!(LayerKind::Clock.to_string(), "clock");
    assert_eq!(LayerKind::Support.to_string(), "support");
}

#[test]
fn contradiction_serde_roundtrip() {
    let contradiction = Contradiction::new(
        vec!["reading-a".to_string(), "reading-b".to_string()],
        "sources disagree on the reading",
    );

    let json = serde_json::to_string(&contradiction).unwrap();
    let back: Contradiction<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, contradiction);
    assert_eq!(back.conflicting.len(), 2);
    assert_eq!(back.description, "sources disagree on the reading");
}
