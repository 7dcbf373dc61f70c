use fieldguide_core::scroll::{ChromeVisibility, ScrollMetrics};
use fieldguide_core::ChromeConfig;

fn at(offset: f64) -> ScrollMetrics {
    ScrollMetrics {
        offset,
        viewport_height: 800.0,
        document_height: 4800.0,
    }
}

#[test]
fn progress_is_a_clamped_percentage() {
    assert_eq!(at(0.0).progress_percent(), 0.0);
    assert!((at(2000.0).progress_percent() - 50.0).abs() < 1e-9);
    assert_eq!(at(5000.0).progress_percent(), 100.0);
    assert_eq!(at(-20.0).progress_percent(), 0.0);
}

#[test]
fn short_document_has_no_progress() {
    let m = ScrollMetrics {
        offset: 0.0,
        viewport_height: 800.0,
        document_height: 600.0,
    };
    assert_eq!(m.progress_percent(), 0.0);
}

#[test]
fn chrome_appears_past_thresholds() {
    let cfg = ChromeConfig::default();
    assert_eq!(
        ChromeVisibility::from_metrics(&at(0.0), &cfg),
        ChromeVisibility::default()
    );
    let mid = ChromeVisibility::from_metrics(&at(700.0), &cfg);
    assert!(mid.sticky_cta && !mid.back_to_top && !mid.ticker);
    let low = ChromeVisibility::from_metrics(&at(1500.0), &cfg);
    assert!(low.sticky_cta && low.back_to_top && !low.ticker);
}

#[test]
fn ticker_shows_near_bottom() {
    let cfg = ChromeConfig::default();
    assert!(ChromeVisibility::from_metrics(&at(3900.0), &cfg).ticker);
    assert!(!ChromeVisibility::from_metrics(&at(3800.0), &cfg).ticker);
}
