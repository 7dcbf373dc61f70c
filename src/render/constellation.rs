use fieldguide_core::constellation::{self, Constellation};
use fieldguide_core::{ConstellationConfig, HostEvent, MotionPreference};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;

use super::{MountedLayer, Surface};
use crate::dom::{self, DomHost};
use crate::frame::{FrameLoop, Tick};

pub struct ConstellationLayer {
    surface: Surface,
    stars: Constellation,
    mounted_at: Instant,
    revealed: bool,
}

impl ConstellationLayer {
    fn resize(&mut self) {
        self.stars.resize(dom::viewport());
        self.surface.set_size(self.stars.bounds());
    }

    /// Follow the page scroll with a damped vertical offset.
    pub fn apply_parallax(&self, scroll_y: f64) {
        let dy = self.stars.parallax_offset(scroll_y);
        let transform = if dy == 0.0 {
            "none".to_string()
        } else {
            format!("translateY({:.1}px)", dy)
        };
        self.surface.set_style("transform", &transform);
    }
}

impl Tick for ConstellationLayer {
    fn tick(&mut self, now: Instant) {
        if !self.revealed {
            let opacity = self.stars.presented_opacity(now - self.mounted_at);
            if opacity > 0.0 {
                self.surface.set_style("opacity", &opacity.to_string());
                self.revealed = true;
            }
        }
        let Some(mut painter) = self.surface.painter() else {
            return;
        };
        self.stars.tick(&mut painter);
    }
}

pub fn mount(
    host: &mut DomHost,
    config: ConstellationConfig,
    motion: MotionPreference,
) -> Option<(MountedLayer, Rc<RefCell<ConstellationLayer>>)> {
    let fade_ms = config.fade_ms;
    let mounted = constellation::mount(host, config, motion, &mut rand::thread_rng())?;
    mounted
        .surface
        .set_style("transition", &format!("opacity {}ms ease", fade_ms));
    let layer = Rc::new(RefCell::new(ConstellationLayer {
        surface: mounted.surface,
        stars: mounted.constellation,
        mounted_at: Instant::now(),
        revealed: false,
    }));

    let mut listeners = Vec::new();
    for event in host.take_subscriptions() {
        if event == HostEvent::Resize {
            let layer = layer.clone();
            listeners.extend(dom::on_window(event.dom_name(), move |_| {
                if let Ok(mut l) = layer.try_borrow_mut() {
                    l.resize();
                }
            }));
        }
    }

    let frame = FrameLoop::new("constellation", layer.clone());
    frame.start();
    log::info!("[constellation] mounted (reduced motion: {})", motion.is_reduced());
    Some((
        MountedLayer {
            name: "constellation",
            frame,
            listeners,
        },
        layer,
    ))
}
