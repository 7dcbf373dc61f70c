use fieldguide_core::trail::{self, CursorTrail};
use fieldguide_core::{HostEvent, MotionPreference, TrailConfig};
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use super::{MountedLayer, Surface};
use crate::dom::{self, DomHost};
use crate::frame::{FrameLoop, Tick};

pub struct TrailLayer {
    surface: Surface,
    trail: CursorTrail,
}

impl Tick for TrailLayer {
    fn tick(&mut self, _now: Instant) {
        let viewport = dom::viewport();
        self.surface.set_size(viewport);
        self.trail.resize(viewport);
        let Some(mut painter) = self.surface.painter() else {
            return;
        };
        self.trail.tick(&mut painter);
    }
}

/// Mount the ember trail. Returns `None` without touching the page under
/// reduced motion.
pub fn mount(
    host: &mut DomHost,
    config: TrailConfig,
    motion: MotionPreference,
) -> Option<MountedLayer> {
    let mounted = trail::mount(host, config, motion)?;
    let layer = Rc::new(RefCell::new(TrailLayer {
        surface: mounted.surface,
        trail: mounted.trail,
    }));

    let mut listeners = Vec::new();
    for event in host.take_subscriptions() {
        match event {
            HostEvent::PointerMove => {
                let layer = layer.clone();
                listeners.extend(dom::on_window(event.dom_name(), move |ev| {
                    let Some(pe) = ev.dyn_ref::<web::PointerEvent>() else {
                        return;
                    };
                    if let Ok(mut l) = layer.try_borrow_mut() {
                        l.trail
                            .set_pointer(Vec2::new(pe.client_x() as f32, pe.client_y() as f32));
                    }
                }));
            }
            // Sized from the viewport every tick.
            HostEvent::Resize => {}
            other => log::debug!("[trail] ignoring subscription {:?}", other),
        }
    }

    let frame = FrameLoop::new("cursor-trail", layer);
    frame.start();
    log::info!("[cursor-trail] mounted");
    Some(MountedLayer {
        name: "cursor-trail",
        frame,
        listeners,
    })
}
