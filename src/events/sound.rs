use gloo_events::EventListener;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

use crate::audio::AudioFx;
use crate::constants::{AUDIO_TOGGLE_ID, HOVER_SOUND_SELECTOR, SMASH_SELECTOR};
use crate::dom;

/// Wire the page's sound triggers to the shared audio effects.
///
/// The context is unlocked on the first pointerdown or keydown. Hover
/// crackles are skipped on touch devices.
pub fn wire_sound(
    document: &web::Document,
    audio: Rc<RefCell<AudioFx>>,
    is_touch: Rc<Cell<bool>>,
) -> Vec<EventListener> {
    let mut listeners = Vec::new();

    for event in ["pointerdown", "keydown"] {
        let audio = audio.clone();
        listeners.extend(dom::on_window(event, move |_| {
            if let Ok(mut a) = audio.try_borrow_mut() {
                a.unlock();
            }
        }));
    }

    for el in dom::query_all(document, HOVER_SOUND_SELECTOR) {
        let audio = audio.clone();
        let is_touch = is_touch.clone();
        listeners.push(EventListener::new(&el, "mouseenter", move |_| {
            if is_touch.get() {
                return;
            }
            if let Ok(a) = audio.try_borrow() {
                a.play_hover();
            }
        }));
    }

    let click_audio = audio.clone();
    listeners.extend(dom::on_document("click", move |ev| {
        let Ok(a) = click_audio.try_borrow() else {
            return;
        };
        if dom::event_target_closest(ev, SMASH_SELECTOR).is_some() {
            a.play_smash();
        } else if dom::event_target_closest(ev, "[data-spark]").is_some() {
            a.play_hover();
        }
    }));

    if let Some(button) = document.get_element_by_id(AUDIO_TOGGLE_ID) {
        let target = button.clone();
        listeners.push(EventListener::new(&button, "click", move |_| {
            let playing = match audio.try_borrow_mut() {
                Ok(mut a) => a.toggle_ambient(),
                Err(_) => return,
            };
            _ = target.set_attribute("aria-pressed", if playing { "true" } else { "false" });
        }));
    }

    listeners
}
