mod common;

use common::{rng, FakeHost, Op, RecordingPainter};
use fieldguide_core::constellation::{self, Constellation};
use fieldguide_core::{ConstellationConfig, HostEvent, MotionPreference, Particle, Viewport};
use glam::Vec2;
use std::collections::HashSet;
use std::time::Duration;

fn config(count: usize) -> ConstellationConfig {
    ConstellationConfig {
        particle_count: count,
        ..ConstellationConfig::default()
    }
}

#[test]
fn surface_covers_three_viewport_heights() {
    let size = constellation::surface_size(Viewport::new(800.0, 600.0), &config(80));
    assert_eq!(size, Viewport::new(800.0, 1800.0));
}

#[test]
fn every_pair_is_visited_once() {
    let n = 12;
    let stars = Constellation::new(
        config(n),
        Viewport::new(800.0, 600.0),
        MotionPreference::ALLOWED,
        &mut rng(),
    );
    let mut seen = HashSet::new();
    stars.for_each_pair(|i, j, _| {
        assert!(i < j);
        assert!(seen.insert((i, j)), "pair ({}, {}) visited twice", i, j);
    });
    assert_eq!(seen.len(), n * (n - 1) / 2);
}

#[test]
fn draws_one_line_per_close_pair_and_one_circle_per_star() {
    let stars = Constellation::new(
        config(40),
        Viewport::new(400.0, 300.0),
        MotionPreference::ALLOWED,
        &mut rng(),
    );
    let mut close = 0;
    stars.for_each_pair(|_, _, d| {
        if d < stars.config().connection_distance {
            close += 1;
        }
    });
    let mut painter = RecordingPainter::default();
    stars.draw(&mut painter);
    assert_eq!(painter.ops[0], Op::Clear(Viewport::new(400.0, 900.0)));
    assert_eq!(painter.segments().len(), close);
    assert_eq!(painter.circles(), 40);
}

#[test]
fn no_lines_with_zero_or_one_star() {
    for count in [0, 1] {
        let mut stars = Constellation::new(
            config(count),
            Viewport::new(800.0, 600.0),
            MotionPreference::ALLOWED,
            &mut rng(),
        );
        let mut painter = RecordingPainter::default();
        stars.tick(&mut painter);
        assert!(painter.segments().is_empty());
        assert_eq!(painter.circles(), count);
    }
}

#[test]
fn reduced_motion_keeps_stars_still() {
    let mut stars = Constellation::new(
        config(30),
        Viewport::new(800.0, 600.0),
        MotionPreference::REDUCED,
        &mut rng(),
    );
    let before: Vec<Vec2> = stars.particles().iter().map(|p| p.position).collect();
    for _ in 0..100 {
        stars.tick(&mut RecordingPainter::default());
    }
    let after: Vec<Vec2> = stars.particles().iter().map(|p| p.position).collect();
    assert_eq!(before, after);
}

#[test]
fn drifting_stars_move_within_speed_limit() {
    let mut stars = Constellation::new(
        config(30),
        Viewport::new(800.0, 600.0),
        MotionPreference::ALLOWED,
        &mut rng(),
    );
    let limit = stars.config().drift_speed;
    for p in stars.particles() {
        assert!(p.velocity.x.abs() <= limit && p.velocity.y.abs() <= limit);
    }
    let before: Vec<Vec2> = stars.particles().iter().map(|p| p.position).collect();
    stars.step();
    for (p, b) in stars.particles().iter().zip(before) {
        assert!((p.position - b).abs().max_element() <= limit + 1e-4);
    }
}

#[test]
fn star_bounces_off_left_edge() {
    let mut p = Particle::new(Vec2::new(0.0, 50.0), Vec2::new(-0.15, 0.0));
    let bounds = Viewport::new(100.0, 100.0);
    p.step(bounds);
    assert!(p.position.x < 0.0);
    assert!(p.velocity.x > 0.0);
    p.step(bounds);
    p.step(bounds);
    assert!(p.position.x >= 0.0);
}

#[test]
fn star_bounces_off_bottom_edge() {
    let mut p = Particle::new(Vec2::new(50.0, 99.95), Vec2::new(0.0, 0.1));
    p.step(Viewport::new(100.0, 100.0));
    assert!(p.velocity.y < 0.0);
}

#[test]
fn star_bounces_off_right_edge() {
    let mut p = Particle::new(Vec2::new(100.0, 50.0), Vec2::new(0.15, 0.0));
    let bounds = Viewport::new(100.0, 100.0);
    p.step(bounds);
    assert!(p.position.x > bounds.width);
    assert!(p.velocity.x < 0.0);
    for _ in 0..3 {
        p.step(bounds);
    }
    assert!(p.position.x <= bounds.width);
}

#[test]
fn star_bounces_off_top_edge() {
    let mut p = Particle::new(Vec2::new(50.0, 0.0), Vec2::new(0.0, -0.15));
    let bounds = Viewport::new(100.0, 100.0);
    p.step(bounds);
    assert!(p.velocity.y > 0.0);
    for _ in 0..3 {
        p.step(bounds);
    }
    assert!(p.position.y >= 0.0);
}

#[test]
fn corner_star_bounces_on_both_axes() {
    let mut p = Particle::new(Vec2::new(100.0, 0.0), Vec2::new(0.15, -0.15));
    let bounds = Viewport::new(100.0, 100.0);
    p.step(bounds);
    assert_eq!(p.velocity, Vec2::new(-0.15, 0.15));
    for _ in 0..3 {
        p.step(bounds);
    }
    assert!(p.position.x <= bounds.width && p.position.y >= 0.0);
}

#[test]
fn stars_outside_after_shrink_head_back_in() {
    let mut stars = Constellation::new(
        config(50),
        Viewport::new(1600.0, 1200.0),
        MotionPreference::ALLOWED,
        &mut rng(),
    );
    stars.resize(Viewport::new(200.0, 100.0));
    let bounds = stars.bounds();
    assert_eq!(bounds, Viewport::new(200.0, 300.0));
    for _ in 0..5 {
        stars.step();
        for p in stars.particles() {
            if p.position.x > bounds.width {
                assert!(p.velocity.x <= 0.0);
            }
            if p.position.y > bounds.height {
                assert!(p.velocity.y <= 0.0);
            }
        }
    }
}

#[test]
fn resize_keeps_star_count() {
    let mut stars = Constellation::new(
        config(80),
        Viewport::new(800.0, 600.0),
        MotionPreference::ALLOWED,
        &mut rng(),
    );
    stars.resize(Viewport::new(1024.0, 768.0));
    assert_eq!(stars.particles().len(), 80);
    assert_eq!(stars.bounds(), Viewport::new(1024.0, 2304.0));
}

#[test]
fn parallax_follows_scroll_unless_reduced() {
    let viewport = Viewport::new(800.0, 600.0);
    let moving = Constellation::new(config(1), viewport, MotionPreference::ALLOWED, &mut rng());
    let still = Constellation::new(config(1), viewport, MotionPreference::REDUCED, &mut rng());
    assert!((moving.parallax_offset(1000.0) + 200.0).abs() < 1e-3);
    assert_eq!(still.parallax_offset(1000.0), 0.0);
}

#[test]
fn layer_is_revealed_after_delay() {
    let stars = Constellation::new(
        config(1),
        Viewport::new(800.0, 600.0),
        MotionPreference::ALLOWED,
        &mut rng(),
    );
    assert_eq!(stars.presented_opacity(Duration::from_millis(50)), 0.0);
    assert!((stars.presented_opacity(Duration::from_millis(100)) - 0.4).abs() < 1e-6);
}

#[test]
fn mount_creates_background_surface() {
    let mut host = FakeHost::new(800.0, 600.0);
    let mounted = constellation::mount(
        &mut host,
        config(80),
        MotionPreference::REDUCED,
        &mut rng(),
    )
    .expect("mounted");
    assert_eq!(mounted.surface, 0);
    assert_eq!(mounted.constellation.particles().len(), 80);
    let spec = &host.specs[0];
    assert_eq!(spec.size, Viewport::new(800.0, 1800.0));
    assert_eq!(spec.z_index, 0);
    assert_eq!(spec.initial_opacity, 0.0);
    assert_eq!(host.subscriptions, vec![HostEvent::Resize]);
}

#[test]
fn mount_without_surface_attaches_nothing() {
    let mut host = FakeHost::new(800.0, 600.0);
    host.fail_surfaces = true;
    let mounted = constellation::mount(
        &mut host,
        config(80),
        MotionPreference::ALLOWED,
        &mut rng(),
    );
    assert!(mounted.is_none());
    assert!(host.subscriptions.is_empty());
}
