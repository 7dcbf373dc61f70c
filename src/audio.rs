use fieldguide_core::audio::{
    brown_noise, crackle_noise, frame_count, hover_cutoff_hz, scaled_peak, white_noise,
    NoiseSweep, ToneSweep, SMASH_CRUNCH, SMASH_SNAP, SMASH_THUD,
};
use fieldguide_core::AudioConfig;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Sound effects for the page, sharing a single `AudioContext`.
///
/// The context is created on the first user gesture (browsers keep a
/// context created earlier suspended) and closed by [`AudioFx::dispose`].
/// Effects requested before that are skipped.
pub struct AudioFx {
    config: AudioConfig,
    ctx: Option<web::AudioContext>,
    ambient: Option<web::AudioBufferSourceNode>,
}

fn create_gain(
    ctx: &web::AudioContext,
    value: f32,
    label: &str,
) -> Result<web::GainNode, JsValue> {
    web::GainNode::new(ctx)
        .map(|g| {
            g.gain().set_value(value);
            g
        })
        .map_err(|e| {
            log::debug!("{} GainNode error: {:?}", label, e);
            e
        })
}

fn create_filter(
    ctx: &web::AudioContext,
    kind: web::BiquadFilterType,
    hz: f32,
) -> Result<web::BiquadFilterNode, JsValue> {
    let f = web::BiquadFilterNode::new(ctx)?;
    f.set_type(kind);
    f.frequency().set_value(hz);
    Ok(f)
}

/// Mono buffer holding `samples`.
fn mono_buffer(
    ctx: &web::AudioContext,
    mut samples: Vec<f32>,
) -> Result<web::AudioBuffer, JsValue> {
    let buffer = ctx.create_buffer(1, samples.len() as u32, ctx.sample_rate())?;
    buffer.copy_to_channel(&mut samples, 0)?;
    Ok(buffer)
}

/// Settle a promise in the background, logging a rejection.
fn settle(label: &'static str, promise: Result<js_sys::Promise, JsValue>) {
    match promise {
        Ok(p) => spawn_local(async move {
            match JsFuture::from(p).await {
                Ok(_) => log::info!("[audio] {}", label),
                Err(e) => log::debug!("[audio] {} rejected: {:?}", label, e),
            }
        }),
        Err(e) => log::debug!("[audio] {} failed: {:?}", label, e),
    }
}

impl AudioFx {
    pub fn new(config: AudioConfig) -> Self {
        Self {
            config,
            ctx: None,
            ambient: None,
        }
    }

    /// Create the shared context on first call and resume it if suspended.
    pub fn unlock(&mut self) {
        if self.ctx.is_none() {
            match web::AudioContext::new() {
                Ok(ctx) => {
                    log::info!("[audio] context created ({} Hz)", ctx.sample_rate());
                    self.ctx = Some(ctx);
                }
                Err(e) => {
                    log::debug!("[audio] AudioContext unavailable: {:?}", e);
                    return;
                }
            }
        }
        if let Some(ctx) = &self.ctx {
            if ctx.state() == web::AudioContextState::Suspended {
                settle("resumed", ctx.resume());
            }
        }
    }

    pub fn play_hover(&self) {
        let Some(ctx) = &self.ctx else {
            return;
        };
        if let Err(e) = self.hover_graph(ctx) {
            log::debug!("[audio] hover sound failed: {:?}", e);
        }
    }

    fn hover_graph(&self, ctx: &web::AudioContext) -> Result<(), JsValue> {
        let cfg = &self.config;
        let mut rng = rand::thread_rng();
        let t = ctx.current_time();
        let dur = cfg.hover_duration_sec as f64;

        let len = frame_count(ctx.sample_rate(), cfg.hover_duration_sec);
        let samples = crackle_noise(len, cfg.hover_burst_probability, &mut rng);
        let src = web::AudioBufferSourceNode::new(ctx)?;
        src.set_buffer(Some(&mono_buffer(ctx, samples)?));

        let highpass = create_filter(ctx, web::BiquadFilterType::Highpass, cfg.hover_highpass_hz)?;
        let lowpass = create_filter(
            ctx,
            web::BiquadFilterType::Lowpass,
            hover_cutoff_hz(cfg, &mut rng),
        )?;
        let gain = create_gain(ctx, 0.0, "hover")?;
        gain.gain().set_value_at_time(cfg.hover_gain, t)?;
        gain.gain().exponential_ramp_to_value_at_time(0.001, t + dur)?;

        src.connect_with_audio_node(&highpass)?;
        highpass.connect_with_audio_node(&lowpass)?;
        lowpass.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&ctx.destination())?;
        src.start_with_when(t)?;
        src.stop_with_when(t + dur)?;
        Ok(())
    }

    pub fn play_smash(&self) {
        let Some(ctx) = &self.ctx else {
            return;
        };
        let t = ctx.current_time();
        let result = self
            .tone(ctx, t, web::OscillatorType::Triangle, &SMASH_THUD)
            .and_then(|_| self.crunch(ctx, t, &SMASH_CRUNCH))
            .and_then(|_| self.tone(ctx, t, web::OscillatorType::Square, &SMASH_SNAP));
        if let Err(e) = result {
            log::debug!("[audio] smash sound failed: {:?}", e);
        }
    }

    fn tone(
        &self,
        ctx: &web::AudioContext,
        t: f64,
        kind: web::OscillatorType,
        sweep: &ToneSweep,
    ) -> Result<(), JsValue> {
        let osc = web::OscillatorNode::new(ctx)?;
        osc.set_type(kind);
        osc.frequency().set_value_at_time(sweep.start_hz, t)?;
        osc.frequency()
            .exponential_ramp_to_value_at_time(sweep.end_hz, t + sweep.sweep_sec as f64)?;
        let gain = create_gain(ctx, 0.0, "smash tone")?;
        gain.gain()
            .set_value_at_time(scaled_peak(sweep.start_gain, &self.config), t)?;
        gain.gain()
            .exponential_ramp_to_value_at_time(sweep.end_gain, t + sweep.duration_sec as f64)?;
        osc.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&ctx.destination())?;
        osc.start_with_when(t)?;
        osc.stop_with_when(t + sweep.stop_sec as f64)?;
        Ok(())
    }

    fn crunch(&self, ctx: &web::AudioContext, t: f64, sweep: &NoiseSweep) -> Result<(), JsValue> {
        let len = frame_count(ctx.sample_rate(), sweep.buffer_sec);
        let src = web::AudioBufferSourceNode::new(ctx)?;
        src.set_buffer(Some(&mono_buffer(ctx, white_noise(len, &mut rand::thread_rng()))?));
        let filter = create_filter(ctx, web::BiquadFilterType::Lowpass, sweep.cutoff_start_hz)?;
        filter.frequency().set_value_at_time(sweep.cutoff_start_hz, t)?;
        filter
            .frequency()
            .linear_ramp_to_value_at_time(sweep.cutoff_end_hz, t + sweep.duration_sec as f64)?;
        let gain = create_gain(ctx, 0.0, "smash crunch")?;
        gain.gain()
            .set_value_at_time(scaled_peak(sweep.gain, &self.config), t)?;
        gain.gain()
            .exponential_ramp_to_value_at_time(sweep.end_gain, t + sweep.duration_sec as f64)?;
        src.connect_with_audio_node(&filter)?;
        filter.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&ctx.destination())?;
        src.start_with_when(t)?;
        src.stop_with_when(t + sweep.buffer_sec as f64)?;
        Ok(())
    }

    /// Start or stop the looping fire bed. Returns whether it is now playing.
    pub fn toggle_ambient(&mut self) -> bool {
        if let Some(src) = self.ambient.take() {
            _ = src.stop();
            log::info!("[audio] ambient off");
            return false;
        }
        self.unlock();
        let Some(ctx) = &self.ctx else {
            return false;
        };
        match self.ambient_graph(ctx) {
            Ok(src) => {
                self.ambient = Some(src);
                log::info!("[audio] ambient on");
                true
            }
            Err(e) => {
                log::debug!("[audio] ambient failed: {:?}", e);
                false
            }
        }
    }

    fn ambient_graph(
        &self,
        ctx: &web::AudioContext,
    ) -> Result<web::AudioBufferSourceNode, JsValue> {
        let cfg = &self.config;
        let len = frame_count(ctx.sample_rate(), cfg.ambient_buffer_sec);
        let src = web::AudioBufferSourceNode::new(ctx)?;
        src.set_buffer(Some(&mono_buffer(ctx, brown_noise(len, &mut rand::thread_rng()))?));
        src.set_loop(true);
        let filter = create_filter(ctx, web::BiquadFilterType::Lowpass, cfg.ambient_lowpass_hz)?;
        let gain = create_gain(ctx, cfg.ambient_gain, "ambient")?;
        src.connect_with_audio_node(&filter)?;
        filter.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&ctx.destination())?;
        src.start()?;
        Ok(src)
    }

    /// Stop everything and release the context.
    pub fn dispose(&mut self) {
        if let Some(src) = self.ambient.take() {
            _ = src.stop();
        }
        if let Some(ctx) = self.ctx.take() {
            settle("closed", ctx.close());
        }
    }
}

impl Drop for AudioFx {
    fn drop(&mut self) {
        self.dispose();
    }
}
