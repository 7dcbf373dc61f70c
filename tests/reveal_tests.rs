use fieldguide_core::reveal::{initial_style, parse_delay_ms, RevealStyle};
use fieldguide_core::{EffectsConfig, MotionPreference, RevealAnimation, RevealConfig};

#[test]
fn attribute_values_map_to_animations() {
    assert_eq!(RevealAnimation::from_attr("fade-in"), RevealAnimation::FadeIn);
    assert_eq!(RevealAnimation::from_attr(" fade-left "), RevealAnimation::FadeLeft);
    assert_eq!(RevealAnimation::from_attr("fade-right"), RevealAnimation::FadeRight);
    assert_eq!(RevealAnimation::from_attr("scale"), RevealAnimation::Scale);
    assert_eq!(RevealAnimation::from_attr(""), RevealAnimation::FadeUp);
    assert_eq!(RevealAnimation::from_attr("spin"), RevealAnimation::FadeUp);
}

#[test]
fn hidden_transforms_per_animation() {
    let cfg = RevealConfig::default();
    assert_eq!(RevealAnimation::FadeUp.hidden_transform(&cfg), "translateY(30px)");
    assert_eq!(RevealAnimation::FadeIn.hidden_transform(&cfg), "none");
    assert_eq!(RevealAnimation::FadeLeft.hidden_transform(&cfg), "translateX(-30px)");
    assert_eq!(RevealAnimation::FadeRight.hidden_transform(&cfg), "translateX(30px)");
    assert_eq!(RevealAnimation::Scale.hidden_transform(&cfg), "scale(0.95)");
}

#[test]
fn sections_start_hidden_and_end_shown() {
    let cfg = RevealConfig::default();
    let hidden = initial_style(RevealAnimation::FadeUp, 150, &cfg, MotionPreference::ALLOWED)
        .expect("hidden under normal motion");
    assert_eq!(hidden.opacity, 0.0);
    assert_eq!(hidden.delay_ms, 150);
    assert_eq!(hidden.transition, "opacity 600ms ease-out, transform 600ms ease-out");

    let shown = RevealStyle::shown(150, &cfg);
    assert_eq!(shown.opacity, 1.0);
    assert_eq!(shown.transform, "none");
    assert_eq!(shown.transition, hidden.transition);
}

#[test]
fn reduced_motion_leaves_sections_alone() {
    let cfg = RevealConfig::default();
    assert!(initial_style(RevealAnimation::Scale, 0, &cfg, MotionPreference::REDUCED).is_none());
}

#[test]
fn delay_attribute_parses_or_defaults() {
    assert_eq!(parse_delay_ms(Some("200")), 200);
    assert_eq!(parse_delay_ms(Some(" 75 ")), 75);
    assert_eq!(parse_delay_ms(Some("soon")), 0);
    assert_eq!(parse_delay_ms(None), 0);
}

#[test]
fn reveal_threshold_must_be_a_fraction() {
    let err = EffectsConfig::from_json(r#"{ "reveal": { "threshold": 2.0 } }"#);
    assert!(err.is_err());
    let cfg = EffectsConfig::from_json(r#"{ "reveal": { "duration_ms": 900 } }"#).expect("parsed");
    assert_eq!(cfg.reveal.duration_ms, 900);
    assert_eq!(cfg.reveal.distance, 30.0);
}
