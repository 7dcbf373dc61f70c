mod common;

use common::{rng, FakeHost, RecordingPainter};
use fieldguide_core::sparks::{self, SparkField};
use fieldguide_core::{HostEvent, MotionPreference, SparkConfig, Viewport};
use glam::Vec2;
use std::time::Duration;

fn field() -> SparkField {
    SparkField::new(SparkConfig::default(), Viewport::new(800.0, 600.0))
}

#[test]
fn burst_spawns_configured_count_around_center() {
    let mut f = field();
    let center = Vec2::new(400.0, 300.0);
    f.burst(center, &mut rng());
    assert_eq!(f.sparks().len(), 12);
    let palette = SparkConfig::default().colors;
    for s in f.sparks() {
        assert!((s.origin.x - center.x).abs() <= 50.0);
        assert!((s.origin.y - center.y).abs() <= 15.0);
        assert!(s.travel.y < 0.0, "sparks rise");
        assert!(palette.contains(&s.color));
    }
}

#[test]
fn sparks_expire_after_lifetime() {
    let mut f = field();
    f.burst(Vec2::ZERO, &mut rng());
    f.step(Duration::from_millis(500));
    assert_eq!(f.sparks().len(), 12);
    f.step(Duration::from_millis(500));
    assert!(f.is_idle());
}

#[test]
fn sparks_fade_as_they_age() {
    let mut f = field();
    f.burst(Vec2::new(100.0, 100.0), &mut rng());
    let lifetime = Duration::from_millis(1000);
    let start = f.sparks()[0];
    f.step(Duration::from_millis(900));
    let late = f.sparks()[0];
    assert!(late.progress(lifetime) > start.progress(lifetime));
    assert!(late.position(lifetime).y < start.origin.y);
}

#[test]
fn draws_halo_and_core_per_spark() {
    let mut f = field();
    f.burst(Vec2::ZERO, &mut rng());
    let mut painter = RecordingPainter::default();
    f.tick(Duration::from_millis(16), &mut painter);
    assert_eq!(painter.circles(), 24);
}

#[test]
fn reduced_motion_mounts_nothing() {
    let mut host = FakeHost::new(800.0, 600.0);
    assert!(sparks::mount(&mut host, SparkConfig::default(), MotionPreference::REDUCED).is_none());
    assert!(host.specs.is_empty());
}

#[test]
fn mount_subscribes_to_clicks() {
    let mut host = FakeHost::new(800.0, 600.0);
    let mounted = sparks::mount(&mut host, SparkConfig::default(), MotionPreference::ALLOWED)
        .expect("mounted");
    assert!(mounted.field.is_idle());
    assert_eq!(host.specs[0].z_index, 60);
    assert!(host.subscriptions.contains(&HostEvent::Click));
}
