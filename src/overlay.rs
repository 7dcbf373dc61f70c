use fieldguide_core::scroll::ChromeVisibility;
use web_sys as web;

use crate::constants::{BACK_TO_TOP_ID, SCROLL_PROGRESS_ID, STICKY_CTA_ID, TICKER_ID};

#[inline]
pub fn show(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().remove_1("hidden");
        _ = el.set_attribute("aria-hidden", "false");
    }
}

#[inline]
pub fn hide(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().add_1("hidden");
        _ = el.set_attribute("aria-hidden", "true");
    }
}

#[inline]
pub fn set_visible(document: &web::Document, id: &str, visible: bool) {
    if visible {
        show(document, id);
    } else {
        hide(document, id);
    }
}

pub fn apply_chrome(document: &web::Document, chrome: ChromeVisibility) {
    set_visible(document, STICKY_CTA_ID, chrome.sticky_cta);
    set_visible(document, BACK_TO_TOP_ID, chrome.back_to_top);
    set_visible(document, TICKER_ID, chrome.ticker);
}

/// Update the scroll progress bar width and its ARIA value.
pub fn set_progress(document: &web::Document, percent: f64) {
    if let Some(el) = document.get_element_by_id(SCROLL_PROGRESS_ID) {
        _ = el.set_attribute("aria-valuenow", &format!("{:.0}", percent));
        if let Some(bar) = el.first_element_child() {
            _ = bar.set_attribute("style", &format!("width:{:.2}%", percent));
        }
    }
}
