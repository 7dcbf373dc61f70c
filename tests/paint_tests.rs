use fieldguide_core::{BlendMode, MotionPreference, Rgba};

#[test]
fn rgba_formats_as_css() {
    assert_eq!(Rgba::new(255, 140, 50, 0.5).css(), "rgba(255, 140, 50, 0.5)");
    assert_eq!(Rgba::new(0, 0, 0, 2.0).css(), "rgba(0, 0, 0, 1)");
}

#[test]
fn rgba_lerp_clamps() {
    let a = Rgba::new(0, 0, 0, 0.0);
    let b = Rgba::new(200, 100, 50, 1.0);
    assert_eq!(a.lerp(b, 0.5), Rgba::new(100, 50, 25, 0.5));
    assert_eq!(a.lerp(b, 3.0), b);
    assert_eq!(a.lerp(b, f32::NAN), a);
}

#[test]
fn blend_modes_map_to_css() {
    assert_eq!(BlendMode::default().css(), "normal");
    assert_eq!(BlendMode::Screen.css(), "screen");
}

#[test]
fn missing_motion_signal_allows_motion() {
    assert!(MotionPreference::from_query(None).allows_motion());
    assert!(MotionPreference::from_query(Some(true)).is_reduced());
    assert!(!MotionPreference::from_query(Some(false)).is_reduced());
}
