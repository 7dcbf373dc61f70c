//! Sample synthesis for the page's sound effects.
//!
//! The web front-end copies these buffers into `AudioBuffer`s; the graph
//! wiring (filters, envelopes) lives there.

use rand::Rng;

use crate::config::AudioConfig;

/// Number of frames for `seconds` of audio, at least one.
pub fn frame_count(sample_rate: f32, seconds: f32) -> usize {
    let n = (sample_rate * seconds).floor();
    if n.is_finite() && n >= 1.0 {
        n as usize
    } else {
        1
    }
}

/// Uniform noise in [-1, 1).
pub fn white_noise<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<f32> {
    (0..len).map(|_| rng.gen::<f32>() * 2.0 - 1.0).collect()
}

/// Leaky-integrated noise with a dark, rumbling spectrum; loops as a fire
/// bed.
pub fn brown_noise<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<f32> {
    let mut state = 0.0_f32;
    (0..len)
        .map(|_| {
            let white = rng.gen::<f32>() * 2.0 - 1.0;
            state = (state + 0.02 * white) / 1.02;
            state * 3.5
        })
        .collect()
}

/// Soft noise with occasional louder pops, like embers cracking.
pub fn crackle_noise<R: Rng + ?Sized>(
    len: usize,
    burst_probability: f32,
    rng: &mut R,
) -> Vec<f32> {
    (0..len)
        .map(|_| {
            let burst = if rng.gen::<f32>() < burst_probability {
                rng.gen::<f32>() * 2.0
            } else {
                0.0
            };
            (rng.gen::<f32>() * 2.0 - 1.0) * (0.3 + burst)
        })
        .collect()
}

/// Randomised low-pass cutoff for one hover crackle.
pub fn hover_cutoff_hz<R: Rng + ?Sized>(config: &AudioConfig, rng: &mut R) -> f32 {
    config.hover_lowpass_min_hz + rng.gen::<f32>() * config.hover_lowpass_span_hz
}

/// A pitched component of the smash sound: frequency and gain both ramp
/// exponentially from start to end over `duration_sec`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneSweep {
    pub start_hz: f32,
    pub end_hz: f32,
    pub sweep_sec: f32,
    pub start_gain: f32,
    pub end_gain: f32,
    pub duration_sec: f32,
    pub stop_sec: f32,
}

/// Low triangle thud.
pub const SMASH_THUD: ToneSweep = ToneSweep {
    start_hz: 120.0,
    end_hz: 40.0,
    sweep_sec: 0.15,
    start_gain: 0.8,
    end_gain: 0.01,
    duration_sec: 0.3,
    stop_sec: 0.3,
};

/// Short square snap on top.
pub const SMASH_SNAP: ToneSweep = ToneSweep {
    start_hz: 500.0,
    end_hz: 100.0,
    sweep_sec: 0.05,
    start_gain: 0.3,
    end_gain: 0.01,
    duration_sec: 0.05,
    stop_sec: 0.1,
};

/// Filtered debris noise under the thud.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoiseSweep {
    pub buffer_sec: f32,
    pub cutoff_start_hz: f32,
    pub cutoff_end_hz: f32,
    pub gain: f32,
    pub end_gain: f32,
    pub duration_sec: f32,
}

pub const SMASH_CRUNCH: NoiseSweep = NoiseSweep {
    buffer_sec: 0.5,
    cutoff_start_hz: 1000.0,
    cutoff_end_hz: 100.0,
    gain: 0.8,
    end_gain: 0.01,
    duration_sec: 0.4,
};

/// Scale a smash component so its peak follows `AudioConfig::smash_gain`.
pub fn scaled_peak(peak: f32, config: &AudioConfig) -> f32 {
    peak * (config.smash_gain / SMASH_THUD.start_gain)
}
