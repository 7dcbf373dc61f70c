use fieldguide_core::MotionPreference;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

use crate::constants::REDUCED_MOTION_QUERY;
use gloo_events::EventListener;

use crate::dom;

/// Read the reduced-motion media query once. Any failure allows motion.
pub fn detect_motion_preference() -> MotionPreference {
    let matches = web::window().and_then(|w| match w.match_media(REDUCED_MOTION_QUERY) {
        Ok(Some(list)) => Some(list.matches()),
        Ok(None) => None,
        Err(e) => {
            log::debug!("matchMedia failed: {:?}", e);
            None
        }
    });
    MotionPreference::from_query(matches)
}

/// Touch capability, upgraded on the first real touch for hybrid devices.
pub struct TouchSupport {
    is_touch: Rc<Cell<bool>>,
    _first_touch: Option<EventListener>,
}

impl TouchSupport {
    pub fn new() -> Self {
        let initial = web::window()
            .map(|w| {
                js_sys::Reflect::has(&w, &"ontouchstart".into()).unwrap_or(false)
                    || w.navigator().max_touch_points() > 0
            })
            .unwrap_or(false);
        let is_touch = Rc::new(Cell::new(initial));
        let first_touch = if initial {
            None
        } else {
            let flag = is_touch.clone();
            dom::on_window("touchstart", move |_| flag.set(true))
        };
        Self {
            is_touch,
            _first_touch: first_touch,
        }
    }

    /// Shared flag read by the hover-sound listeners.
    pub fn flag(&self) -> Rc<Cell<bool>> {
        self.is_touch.clone()
    }
}

impl Default for TouchSupport {
    fn default() -> Self {
        Self::new()
    }
}
