use fieldguide_core::{ConfigError, EffectsConfig, Rgba};

#[test]
fn defaults_are_valid() {
    let cfg = EffectsConfig::default();
    cfg.validate().expect("defaults validate");
    assert_eq!(cfg.constellation.particle_count, 80);
    assert_eq!(cfg.trail.capacity, 150);
    assert_eq!(cfg.trail.layers.len(), 3);
    assert_eq!(cfg.sparks.per_burst, 12);
}

#[test]
fn empty_document_is_default() {
    let cfg = EffectsConfig::from_json("{}").expect("parsed");
    assert_eq!(cfg, EffectsConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let cfg = EffectsConfig::from_json(
        r#"{
            "trail": { "capacity": 40 },
            "constellation": { "star_color": { "r": 1, "g": 2, "b": 3, "a": 0.5 } }
        }"#,
    )
    .expect("parsed");
    assert_eq!(cfg.trail.capacity, 40);
    assert_eq!(cfg.trail.heat_scale, 50.0);
    assert_eq!(cfg.constellation.star_color, Rgba::new(1, 2, 3, 0.5));
    assert_eq!(cfg.constellation.particle_count, 80);
}

#[test]
fn zero_capacity_is_rejected() {
    let err = EffectsConfig::from_json(r#"{ "trail": { "capacity": 0 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::ZeroCount("trail.capacity")));
}

#[test]
fn opacity_outside_unit_range_is_rejected() {
    let err = EffectsConfig::from_json(r#"{ "constellation": { "opacity": 1.5 } }"#).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::OutOfRange {
            field: "constellation.opacity",
            ..
        }
    ));
}

#[test]
fn negative_connection_distance_is_rejected() {
    let err = EffectsConfig::from_json(r#"{ "constellation": { "connection_distance": -1 } }"#)
        .unwrap_err();
    assert!(matches!(err, ConfigError::NotPositive { .. }));
}

#[test]
fn inverted_rise_range_is_rejected() {
    let err = EffectsConfig::from_json(r#"{ "sparks": { "rise": [100, 20] } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange { field: "sparks.rise", .. }));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = EffectsConfig::from_json("{ trail: ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("invalid effects config"));
}
