use fieldguide_core::{Host, HostEvent, SurfaceSpec, Viewport};
use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::render::Surface;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Current window inner size in CSS pixels.
pub fn viewport() -> Viewport {
    let Some(w) = web::window() else {
        return Viewport::default();
    };
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    Viewport::new(dim(w.inner_width()), dim(w.inner_height()))
}

/// Attach `handler` to the window. Detached when the listener is dropped.
pub fn on_window(
    event: &'static str,
    handler: impl FnMut(&web::Event) + 'static,
) -> Option<EventListener> {
    let window = web::window()?;
    Some(EventListener::new(&window, event, handler))
}

/// Attach `handler` to the document. Detached when the listener is dropped.
pub fn on_document(
    event: &'static str,
    handler: impl FnMut(&web::Event) + 'static,
) -> Option<EventListener> {
    let document = window_document()?;
    Some(EventListener::new(&document, event, handler))
}

/// Elements matching `selector`, in document order.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

/// Nearest ancestor-or-self of the event target matching `selector`.
pub fn event_target_closest(ev: &web::Event, selector: &str) -> Option<web::Element> {
    let el = ev.target()?.dyn_into::<web::Element>().ok()?;
    el.closest(selector).ok().flatten()
}

/// Page host that creates fixed overlay canvases under `<body>`.
pub struct DomHost {
    document: web::Document,
    subscriptions: Vec<HostEvent>,
}

impl DomHost {
    pub fn new(document: web::Document) -> Self {
        Self {
            document,
            subscriptions: Vec::new(),
        }
    }

    /// Events requested by the last mount, cleared for the next one.
    pub fn take_subscriptions(&mut self) -> Vec<HostEvent> {
        std::mem::take(&mut self.subscriptions)
    }
}

impl Host for DomHost {
    type Surface = Surface;

    fn viewport(&self) -> Viewport {
        viewport()
    }

    fn create_surface(&mut self, spec: &SurfaceSpec) -> Option<Surface> {
        let body = self.document.body()?;
        let canvas = match self
            .document
            .create_element("canvas")
            .map(|el| el.dyn_into::<web::HtmlCanvasElement>())
        {
            Ok(Ok(c)) => c,
            _ => {
                log::warn!("could not create {} canvas", spec.name);
                return None;
            }
        };
        _ = canvas.set_attribute("aria-hidden", "true");
        _ = canvas.set_attribute("data-layer", spec.name);
        let style = canvas.style();
        for (k, v) in [
            ("position", "fixed".to_string()),
            ("top", "0".to_string()),
            ("left", "0".to_string()),
            ("pointer-events", "none".to_string()),
            ("z-index", spec.z_index.to_string()),
            ("mix-blend-mode", spec.blend.css().to_string()),
            ("opacity", spec.initial_opacity.to_string()),
        ] {
            _ = style.set_property(k, &v);
        }
        let surface = Surface::new(canvas);
        surface.set_size(spec.size);
        if let Err(e) = body.append_child(surface.canvas()) {
            log::warn!("could not attach {} canvas: {:?}", spec.name, e);
            return None;
        }
        Some(surface)
    }

    fn subscribe(&mut self, event: HostEvent) {
        self.subscriptions.push(event);
    }
}
