//! Named tunables for every effect layer.
//!
//! Each struct defaults to the values in [`crate::constants`] and can be
//! partially overridden from JSON; missing fields keep their defaults.

use serde::Deserialize;

use crate::constants::*;
use crate::error::ConfigError;
use crate::paint::Rgba;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub constellation: ConstellationConfig,
    pub trail: TrailConfig,
    pub sparks: SparkConfig,
    pub audio: AudioConfig,
    pub chrome: ChromeConfig,
    pub reveal: RevealConfig,
}

impl EffectsConfig {
    /// Parse and validate a JSON override document.
    pub fn from_json(src: &str) -> Result<Self, ConfigError> {
        let cfg: EffectsConfig = serde_json::from_str(src)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.constellation.validate()?;
        self.trail.validate()?;
        self.sparks.validate()?;
        self.audio.validate()?;
        self.chrome.validate()?;
        self.reveal.validate()
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConstellationConfig {
    pub particle_count: usize,
    pub connection_distance: f32,
    /// Largest per-axis speed, px per frame.
    pub drift_speed: f32,
    pub star_radius: f32,
    pub star_color: Rgba,
    pub line_color: Rgba,
    pub line_width: f32,
    pub height_multiplier: f32,
    /// Vertical translation per scrolled pixel.
    pub parallax: f32,
    pub reveal_delay_ms: u64,
    pub fade_ms: u64,
    pub opacity: f32,
}

impl Default for ConstellationConfig {
    fn default() -> Self {
        Self {
            particle_count: STAR_COUNT,
            connection_distance: STAR_CONNECTION_DISTANCE_PX,
            drift_speed: STAR_DRIFT_PX_PER_FRAME,
            star_radius: STAR_RADIUS_PX,
            star_color: Rgba::new(255, 255, 255, STAR_ALPHA),
            line_color: Rgba::new(255, 255, 255, STAR_LINE_ALPHA),
            line_width: STAR_LINE_WIDTH_PX,
            height_multiplier: CONSTELLATION_HEIGHT_MULTIPLIER,
            parallax: CONSTELLATION_PARALLAX,
            reveal_delay_ms: CONSTELLATION_REVEAL_DELAY_MS,
            fade_ms: CONSTELLATION_FADE_MS,
            opacity: CONSTELLATION_OPACITY,
        }
    }
}

impl ConstellationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("constellation.connection_distance", self.connection_distance)?;
        non_negative("constellation.drift_speed", self.drift_speed)?;
        positive("constellation.star_radius", self.star_radius)?;
        positive("constellation.line_width", self.line_width)?;
        positive("constellation.height_multiplier", self.height_multiplier)?;
        finite("constellation.parallax", self.parallax)?;
        unit("constellation.opacity", self.opacity)
    }
}

/// One stroked polyline of the trail.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TrailLayer {
    /// Offset at the oldest point, shrinking to zero at the newest.
    pub offset: [f32; 2],
    pub color: [u8; 3],
    pub max_width: f32,
}

/// Glow and core appearance at one end of the heat range.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HeatLook {
    pub glow_radius: f32,
    /// Gradient colours at offsets 0, 0.3 and 0.6.
    pub glow: [Rgba; 3],
    pub core_radius: f32,
    pub core: Rgba,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    pub capacity: usize,
    /// Pointer travel per frame that maps to heat 1.0.
    pub heat_scale: f32,
    pub max_opacity: f32,
    /// Opacity of the whole overlay.
    pub opacity: f32,
    pub layers: Vec<TrailLayer>,
    pub idle: HeatLook,
    pub hot: HeatLook,
    /// Transparent outer rim of the glow.
    pub glow_rim: Rgba,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            capacity: TRAIL_CAPACITY,
            heat_scale: HEAT_SCALE_PX_PER_FRAME,
            max_opacity: TRAIL_MAX_OPACITY,
            opacity: TRAIL_LAYER_OPACITY,
            layers: vec![
                TrailLayer {
                    offset: [0.0, 0.0],
                    color: [255, 140, 50],
                    max_width: 4.0,
                },
                TrailLayer {
                    offset: [3.0, 2.0],
                    color: [255, 100, 30],
                    max_width: 2.5,
                },
                TrailLayer {
                    offset: [-3.0, -2.0],
                    color: [255, 80, 20],
                    max_width: 2.0,
                },
            ],
            idle: HeatLook {
                glow_radius: GLOW_RADIUS_IDLE_PX,
                glow: [
                    Rgba::new(255, 120, 30, 0.8),
                    Rgba::new(255, 80, 30, 0.4),
                    Rgba::new(255, 50, 10, 0.1),
                ],
                core_radius: CORE_RADIUS_IDLE_PX,
                core: Rgba::new(255, 200, 100, 0.9),
            },
            hot: HeatLook {
                glow_radius: GLOW_RADIUS_IDLE_PX + GLOW_RADIUS_HEAT_PX,
                glow: [
                    Rgba::new(255, 30, 10, 1.0),
                    Rgba::new(255, 10, 10, 0.7),
                    Rgba::new(255, 20, 10, 0.25),
                ],
                core_radius: CORE_RADIUS_IDLE_PX + CORE_RADIUS_HEAT_PX,
                core: Rgba::new(255, 120, 30, 1.0),
            },
            glow_rim: Rgba::new(255, 30, 0, 0.0),
        }
    }
}

impl TrailConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCount("trail.capacity"));
        }
        positive("trail.heat_scale", self.heat_scale)?;
        unit("trail.max_opacity", self.max_opacity)?;
        unit("trail.opacity", self.opacity)?;
        for layer in &self.layers {
            positive("trail.layers.max_width", layer.max_width)?;
            finite("trail.layers.offset", layer.offset[0])?;
            finite("trail.layers.offset", layer.offset[1])?;
        }
        for look in [&self.idle, &self.hot] {
            positive("trail.glow_radius", look.glow_radius)?;
            positive("trail.core_radius", look.core_radius)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SparkConfig {
    pub per_burst: usize,
    pub lifetime_ms: u64,
    pub radius: f32,
    /// Full width/height of the spawn box around the burst centre.
    pub spread: [f32; 2],
    /// Full width of the horizontal travel range.
    pub travel_x: f32,
    /// Upward travel range, px.
    pub rise: [f32; 2],
    pub colors: Vec<[u8; 3]>,
}

impl Default for SparkConfig {
    fn default() -> Self {
        Self {
            per_burst: SPARKS_PER_BURST,
            lifetime_ms: SPARK_LIFETIME_MS,
            radius: SPARK_RADIUS_PX,
            spread: [100.0, 30.0],
            travel_x: 100.0,
            rise: [20.0, 100.0],
            colors: SPARK_COLORS.to_vec(),
        }
    }
}

impl SparkConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lifetime_ms == 0 {
            return Err(ConfigError::ZeroCount("sparks.lifetime_ms"));
        }
        if self.colors.is_empty() {
            return Err(ConfigError::ZeroCount("sparks.colors"));
        }
        positive("sparks.radius", self.radius)?;
        non_negative("sparks.spread", self.spread[0])?;
        non_negative("sparks.spread", self.spread[1])?;
        non_negative("sparks.travel_x", self.travel_x)?;
        finite("sparks.rise", self.rise[0])?;
        finite("sparks.rise", self.rise[1])?;
        if self.rise[0] > self.rise[1] {
            return Err(ConfigError::OutOfRange {
                field: "sparks.rise",
                value: self.rise[0],
                min: f32::NEG_INFINITY,
                max: self.rise[1],
            });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub ambient_gain: f32,
    pub ambient_lowpass_hz: f32,
    pub ambient_buffer_sec: f32,
    pub hover_gain: f32,
    pub hover_duration_sec: f32,
    pub hover_highpass_hz: f32,
    pub hover_lowpass_min_hz: f32,
    pub hover_lowpass_span_hz: f32,
    pub hover_burst_probability: f32,
    pub smash_gain: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            ambient_gain: AMBIENT_GAIN,
            ambient_lowpass_hz: AMBIENT_LOWPASS_HZ,
            ambient_buffer_sec: AMBIENT_BUFFER_SEC,
            hover_gain: HOVER_GAIN,
            hover_duration_sec: HOVER_DURATION_SEC,
            hover_highpass_hz: HOVER_HIGHPASS_HZ,
            hover_lowpass_min_hz: HOVER_LOWPASS_MIN_HZ,
            hover_lowpass_span_hz: HOVER_LOWPASS_SPAN_HZ,
            hover_burst_probability: HOVER_BURST_PROBABILITY,
            smash_gain: SMASH_GAIN,
        }
    }
}

impl AudioConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        unit("audio.ambient_gain", self.ambient_gain)?;
        positive("audio.ambient_lowpass_hz", self.ambient_lowpass_hz)?;
        positive("audio.ambient_buffer_sec", self.ambient_buffer_sec)?;
        unit("audio.hover_gain", self.hover_gain)?;
        positive("audio.hover_duration_sec", self.hover_duration_sec)?;
        positive("audio.hover_highpass_hz", self.hover_highpass_hz)?;
        positive("audio.hover_lowpass_min_hz", self.hover_lowpass_min_hz)?;
        non_negative("audio.hover_lowpass_span_hz", self.hover_lowpass_span_hz)?;
        unit("audio.hover_burst_probability", self.hover_burst_probability)?;
        unit("audio.smash_gain", self.smash_gain)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    pub sticky_cta_after: f64,
    pub back_to_top_after: f64,
    pub near_bottom: f64,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            sticky_cta_after: STICKY_CTA_AFTER_PX,
            back_to_top_after: BACK_TO_TOP_AFTER_PX,
            near_bottom: NEAR_BOTTOM_PX,
        }
    }
}

impl ChromeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("chrome.sticky_cta_after", self.sticky_cta_after as f32)?;
        non_negative("chrome.back_to_top_after", self.back_to_top_after as f32)?;
        non_negative("chrome.near_bottom", self.near_bottom as f32)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub duration_ms: u64,
    /// Offset of the slide-in animations, px.
    pub distance: f32,
    pub scale_from: f32,
    /// Fraction of a section that must be visible before it is revealed.
    pub threshold: f32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            duration_ms: REVEAL_DURATION_MS,
            distance: REVEAL_DISTANCE_PX,
            scale_from: REVEAL_SCALE_FROM,
            threshold: REVEAL_THRESHOLD,
        }
    }
}

impl RevealConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("reveal.distance", self.distance)?;
        positive("reveal.scale_from", self.scale_from)?;
        unit("reveal.threshold", self.threshold)
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field })
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            min: 0.0,
            max: f32::INFINITY,
        })
    }
}

fn unit(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            min: 0.0,
            max: 1.0,
        })
    }
}
