use crate::config::ChromeConfig;

/// Page scroll position, read from the window on each scroll event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl ScrollMetrics {
    /// Scrolled fraction of the document as a percentage in [0, 100].
    pub fn progress_percent(&self) -> f64 {
        let scrollable = self.document_height - self.viewport_height;
        if scrollable.is_nan() || scrollable <= 0.0 {
            return 0.0;
        }
        (self.offset / scrollable * 100.0).clamp(0.0, 100.0)
    }

    pub fn near_bottom(&self, threshold: f64) -> bool {
        self.viewport_height + self.offset >= self.document_height - threshold
    }
}

/// Which scroll-dependent page chrome is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChromeVisibility {
    pub sticky_cta: bool,
    pub back_to_top: bool,
    pub ticker: bool,
}

impl ChromeVisibility {
    pub fn from_metrics(m: &ScrollMetrics, config: &ChromeConfig) -> Self {
        Self {
            sticky_cta: m.offset > config.sticky_cta_after,
            back_to_top: m.offset > config.back_to_top_after,
            ticker: m.near_bottom(config.near_bottom),
        }
    }
}
