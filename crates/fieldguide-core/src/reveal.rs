//! Fade-in of page sections as they scroll into view.

use crate::config::RevealConfig;
use crate::motion::MotionPreference;

/// How a section enters. Parsed from the element's `data-reveal` value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealAnimation {
    #[default]
    FadeUp,
    FadeIn,
    FadeLeft,
    FadeRight,
    Scale,
}

impl RevealAnimation {
    /// Unknown or empty values fall back to [`RevealAnimation::FadeUp`].
    pub fn from_attr(value: &str) -> Self {
        match value.trim() {
            "fade-in" => RevealAnimation::FadeIn,
            "fade-left" => RevealAnimation::FadeLeft,
            "fade-right" => RevealAnimation::FadeRight,
            "scale" => RevealAnimation::Scale,
            _ => RevealAnimation::FadeUp,
        }
    }

    /// CSS transform applied while the section is still out of view.
    pub fn hidden_transform(self, config: &RevealConfig) -> String {
        let d = config.distance;
        match self {
            RevealAnimation::FadeUp => format!("translateY({}px)", d),
            RevealAnimation::FadeIn => "none".to_string(),
            RevealAnimation::FadeLeft => format!("translateX({}px)", -d),
            RevealAnimation::FadeRight => format!("translateX({}px)", d),
            RevealAnimation::Scale => format!("scale({})", config.scale_from),
        }
    }
}

/// Inline style for one state of a revealed section.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealStyle {
    pub opacity: f32,
    pub transform: String,
    pub transition: String,
    pub delay_ms: u64,
}

impl RevealStyle {
    pub fn hidden(animation: RevealAnimation, delay_ms: u64, config: &RevealConfig) -> Self {
        Self {
            opacity: 0.0,
            transform: animation.hidden_transform(config),
            transition: transition(config.duration_ms),
            delay_ms,
        }
    }

    pub fn shown(delay_ms: u64, config: &RevealConfig) -> Self {
        Self {
            opacity: 1.0,
            transform: "none".to_string(),
            transition: transition(config.duration_ms),
            delay_ms,
        }
    }
}

fn transition(duration_ms: u64) -> String {
    format!(
        "opacity {d}ms ease-out, transform {d}ms ease-out",
        d = duration_ms
    )
}

/// Starting style for a section, or `None` when it should be left visible
/// and untouched (reduced motion).
pub fn initial_style(
    animation: RevealAnimation,
    delay_ms: u64,
    config: &RevealConfig,
    motion: MotionPreference,
) -> Option<RevealStyle> {
    if motion.is_reduced() {
        return None;
    }
    Some(RevealStyle::hidden(animation, delay_ms, config))
}

/// Delay from a `data-reveal-delay` value; missing or malformed is 0.
pub fn parse_delay_ms(value: Option<&str>) -> u64 {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(0)
}
