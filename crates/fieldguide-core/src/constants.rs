// Observed tuning for the landing page effects. The named config structs in
// `config.rs` default to these values.

// Constellation
pub const STAR_COUNT: usize = 80;
pub const STAR_CONNECTION_DISTANCE_PX: f32 = 150.0;
pub const STAR_DRIFT_PX_PER_FRAME: f32 = 0.15; // max |v| per axis
pub const STAR_RADIUS_PX: f32 = 2.0;
pub const STAR_ALPHA: f32 = 0.33;
pub const STAR_LINE_ALPHA: f32 = 0.055;
pub const STAR_LINE_WIDTH_PX: f32 = 1.0;
pub const CONSTELLATION_HEIGHT_MULTIPLIER: f32 = 3.0; // covers the scroll range
pub const CONSTELLATION_PARALLAX: f32 = -0.2; // translateY per scrolled px
pub const CONSTELLATION_REVEAL_DELAY_MS: u64 = 100;
pub const CONSTELLATION_OPACITY: f32 = 0.4;
pub const CONSTELLATION_FADE_MS: u64 = 1000;

// Cursor trail
pub const TRAIL_CAPACITY: usize = 150;
pub const TRAIL_MAX_OPACITY: f32 = 0.5;
pub const HEAT_SCALE_PX_PER_FRAME: f32 = 50.0; // speed that maps to heat 1.0
pub const TRAIL_LAYER_OPACITY: f32 = 0.6;

pub const GLOW_RADIUS_IDLE_PX: f32 = 27.0;
pub const GLOW_RADIUS_HEAT_PX: f32 = 15.0;
pub const CORE_RADIUS_IDLE_PX: f32 = 4.3;
pub const CORE_RADIUS_HEAT_PX: f32 = 2.0;

// Sparks
pub const SPARKS_PER_BURST: usize = 12;
pub const SPARK_LIFETIME_MS: u64 = 1000;
pub const SPARK_RADIUS_PX: f32 = 3.0;
pub const SPARK_COLORS: [[u8; 3]; 5] = [
    [0xFF, 0x45, 0x00], // #FF4500
    [0xFF, 0x6B, 0x35], // #FF6B35
    [0xFF, 0xD7, 0x00], // #FFD700
    [0xFF, 0x8C, 0x00], // #FF8C00
    [0xFF, 0xA5, 0x00], // #FFA500
];

// Page chrome driven by scroll
pub const STICKY_CTA_AFTER_PX: f64 = 600.0;
pub const BACK_TO_TOP_AFTER_PX: f64 = 1000.0;
pub const NEAR_BOTTOM_PX: f64 = 100.0;

// Section reveal
pub const REVEAL_DURATION_MS: u64 = 600;
pub const REVEAL_DISTANCE_PX: f32 = 30.0;
pub const REVEAL_SCALE_FROM: f32 = 0.95;
pub const REVEAL_THRESHOLD: f32 = 0.1; // visible fraction that triggers

// Audio
pub const AMBIENT_GAIN: f32 = 0.25;
pub const AMBIENT_LOWPASS_HZ: f32 = 400.0;
pub const AMBIENT_BUFFER_SEC: f32 = 2.0;
pub const HOVER_GAIN: f32 = 0.12;
pub const HOVER_DURATION_SEC: f32 = 0.15;
pub const HOVER_HIGHPASS_HZ: f32 = 100.0;
pub const HOVER_LOWPASS_MIN_HZ: f32 = 800.0;
pub const HOVER_LOWPASS_SPAN_HZ: f32 = 400.0;
pub const HOVER_BURST_PROBABILITY: f32 = 0.02;
pub const SMASH_GAIN: f32 = 0.8;
