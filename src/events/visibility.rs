use gloo_events::EventListener;
use web_sys as web;

use crate::dom;
use crate::frame::LoopControl;

/// Pause every frame loop while the page is hidden.
pub fn wire_visibility(
    document: &web::Document,
    loops: Vec<LoopControl>,
) -> Option<EventListener> {
    let doc = document.clone();
    dom::on_document("visibilitychange", move |_| {
        let hidden = doc.visibility_state() == web::VisibilityState::Hidden;
        for l in &loops {
            if hidden {
                l.suspend();
            } else {
                l.resume();
            }
        }
    })
}
