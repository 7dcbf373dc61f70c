use fieldguide_core::reveal::{self, RevealStyle};
use fieldguide_core::{MotionPreference, RevealAnimation, RevealConfig};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::constants::{REVEAL_DELAY_ATTR, REVEAL_SELECTOR};
use crate::dom;

/// Observes `[data-reveal]` sections and fades each one in the first time it
/// scrolls into view. Disconnects on drop.
pub struct RevealObserver {
    observer: web::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn apply(el: &web::Element, style: &RevealStyle) {
    let Some(el) = el.dyn_ref::<web::HtmlElement>() else {
        return;
    };
    let css = el.style();
    _ = css.set_property("transition", &style.transition);
    _ = css.set_property("transition-delay", &format!("{}ms", style.delay_ms));
    _ = css.set_property("opacity", &style.opacity.to_string());
    _ = css.set_property("transform", &style.transform);
}

fn delay_of(el: &web::Element) -> u64 {
    reveal::parse_delay_ms(el.get_attribute(REVEAL_DELAY_ATTR).as_deref())
}

/// Hide every reveal section and start observing it. Sections are left
/// untouched under reduced motion, or when the observer is unavailable.
pub fn wire_reveal(
    document: &web::Document,
    config: RevealConfig,
    motion: MotionPreference,
) -> Option<RevealObserver> {
    if motion.is_reduced() {
        return None;
    }
    let sections = dom::query_all(document, REVEAL_SELECTOR);
    if sections.is_empty() {
        return None;
    }

    let shown_config = config.clone();
    let on_entries = move |entries: js_sys::Array, observer: web::IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }
            let el = entry.target();
            apply(&el, &RevealStyle::shown(delay_of(&el), &shown_config));
            observer.unobserve(&el);
        }
    };
    let callback = Closure::wrap(
        Box::new(on_entries) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>
    );

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold as f64));
    let observer = match web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(o) => o,
        Err(e) => {
            log::debug!("IntersectionObserver unavailable: {:?}", e);
            return None;
        }
    };

    for el in &sections {
        let kind = el.get_attribute("data-reveal").unwrap_or_default();
        let animation = RevealAnimation::from_attr(&kind);
        if let Some(style) = reveal::initial_style(animation, delay_of(el), &config, motion) {
            apply(el, &style);
            observer.observe(el);
        }
    }
    log::info!("[reveal] observing {} sections", sections.len());
    Some(RevealObserver {
        observer,
        _callback: callback,
    })
}
