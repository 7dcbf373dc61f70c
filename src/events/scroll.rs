use fieldguide_core::scroll::{ChromeVisibility, ScrollMetrics};
use fieldguide_core::ChromeConfig;
use gloo_events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

use crate::dom;
use crate::overlay;
use crate::render::constellation::ConstellationLayer;

fn read_metrics(window: &web::Window, document: &web::Document) -> ScrollMetrics {
    ScrollMetrics {
        offset: window.scroll_y().unwrap_or(0.0),
        viewport_height: window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0),
        document_height: document
            .document_element()
            .map(|el| el.scroll_height() as f64)
            .unwrap_or(0.0),
    }
}

/// Page-level scroll listener: progress bar, scroll-dependent chrome and the
/// constellation parallax.
pub fn wire_scroll(
    document: &web::Document,
    config: ChromeConfig,
    constellation: Option<Rc<RefCell<ConstellationLayer>>>,
) -> Option<EventListener> {
    let window = web::window()?;
    let doc = document.clone();
    let apply = move |window: &web::Window| {
        let metrics = read_metrics(window, &doc);
        overlay::set_progress(&doc, metrics.progress_percent());
        overlay::apply_chrome(&doc, ChromeVisibility::from_metrics(&metrics, &config));
        if let Some(layer) = &constellation {
            if let Ok(l) = layer.try_borrow() {
                l.apply_parallax(metrics.offset);
            }
        }
    };
    apply(&window);
    dom::on_window("scroll", move |_| {
        if let Some(w) = web::window() {
            apply(&w);
        }
    })
}
