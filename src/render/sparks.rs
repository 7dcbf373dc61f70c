use fieldguide_core::sparks::{self, SparkField};
use fieldguide_core::{HostEvent, MotionPreference, SparkConfig};
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;

use super::{MountedLayer, Surface};
use crate::dom::{self, DomHost};
use crate::frame::{FrameLoop, Tick};

/// Elements that throw sparks when clicked.
pub const SPARK_SELECTOR: &str = "[data-spark], [data-smash]";

pub struct SparkLayer {
    surface: Surface,
    field: SparkField,
    last: Option<Instant>,
    dirty: bool,
}

impl SparkLayer {
    fn burst_at(&mut self, center: Vec2) {
        self.field.burst(center, &mut rand::thread_rng());
    }
}

impl Tick for SparkLayer {
    fn tick(&mut self, now: Instant) {
        let dt = self.last.map(|t| now - t).unwrap_or_default();
        self.last = Some(now);
        // Nothing on screen and nothing to age: leave the canvas alone.
        if self.field.is_idle() && !self.dirty {
            return;
        }
        let viewport = dom::viewport();
        self.surface.set_size(viewport);
        self.field.resize(viewport);
        let Some(mut painter) = self.surface.painter() else {
            return;
        };
        self.field.tick(dt, &mut painter);
        self.dirty = !self.field.is_idle();
    }
}

pub fn mount(
    host: &mut DomHost,
    config: SparkConfig,
    motion: MotionPreference,
) -> Option<MountedLayer> {
    let mounted = sparks::mount(host, config, motion)?;
    let layer = Rc::new(RefCell::new(SparkLayer {
        surface: mounted.surface,
        field: mounted.field,
        last: None,
        dirty: false,
    }));

    let mut listeners = Vec::new();
    for event in host.take_subscriptions() {
        match event {
            HostEvent::Click => {
                let layer = layer.clone();
                listeners.extend(dom::on_document(event.dom_name(), move |ev| {
                    let Some(el) = dom::event_target_closest(ev, SPARK_SELECTOR) else {
                        return;
                    };
                    let rect = el.get_bounding_client_rect();
                    let center = Vec2::new(
                        (rect.left() + rect.width() / 2.0) as f32,
                        (rect.top() + rect.height() / 2.0) as f32,
                    );
                    if let Ok(mut l) = layer.try_borrow_mut() {
                        l.burst_at(center);
                        l.dirty = true;
                    }
                }));
            }
            HostEvent::Resize => {}
            other => log::debug!("[sparks] ignoring subscription {:?}", other),
        }
    }

    let frame = FrameLoop::new("sparks", layer);
    frame.start();
    Some(MountedLayer {
        name: "sparks",
        frame,
        listeners,
    })
}
