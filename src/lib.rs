#![cfg(target_arch = "wasm32")]
use fieldguide_core::{LifecycleAction, PageTransition};
use gloo_events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod config;
mod constants;
mod dom;
mod events;
mod frame;
mod motion;
mod overlay;
mod render;
mod reveal;

use crate::audio::AudioFx;
use crate::dom::DomHost;
use crate::motion::TouchSupport;
use crate::render::MountedLayer;
use crate::reveal::RevealObserver;

/// Everything the page owns while the effects are mounted. Dropping it
/// tears the effects down.
struct Effects {
    layers: Vec<MountedLayer>,
    listeners: Vec<EventListener>,
    _reveal: Option<RevealObserver>,
    audio: Rc<RefCell<AudioFx>>,
    _touch: TouchSupport,
}

impl Drop for Effects {
    fn drop(&mut self) {
        self.listeners.clear();
        self.layers.clear();
        if let Ok(mut a) = self.audio.try_borrow_mut() {
            a.dispose();
        }
        log::info!("effects unmounted");
    }
}

thread_local! {
    static MOUNTED: RefCell<Option<Effects>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fieldguide-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    wire_page_lifecycle();
    Ok(())
}

fn is_mounted() -> bool {
    MOUNTED.with(|m| m.borrow().is_some())
}

fn persisted(ev: &web::Event) -> bool {
    ev.dyn_ref::<web::PageTransitionEvent>()
        .map(|e| e.persisted())
        .unwrap_or(false)
}

fn on_page_transition(transition: PageTransition) {
    match transition.action(is_mounted()) {
        LifecycleAction::Unmount => unmount(),
        LifecycleAction::Mount => {
            log::info!("page restored; remounting effects");
            if let Err(e) = init() {
                log::error!("init error: {:?}", e);
            }
        }
        LifecycleAction::Keep => {}
    }
}

/// Page-lifetime listeners: tear down on a real unload, keep the effects
/// across a back/forward cache round trip and remount if they were lost.
fn wire_page_lifecycle() {
    let Some(window) = web::window() else {
        return;
    };
    EventListener::new(&window, "pagehide", |ev| {
        on_page_transition(PageTransition::Hide {
            persisted: persisted(ev),
        })
    })
    .forget();
    EventListener::new(&window, "pageshow", |ev| {
        on_page_transition(PageTransition::Show {
            persisted: persisted(ev),
        })
    })
    .forget();
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    if is_mounted() {
        log::debug!("effects already mounted");
        return Ok(());
    }

    let cfg = config::load(&document);
    let motion = motion::detect_motion_preference();
    log::info!("reduced motion: {}", motion.is_reduced());

    let mut host = DomHost::new(document.clone());
    let mut layers = Vec::new();

    let constellation = match render::constellation::mount(&mut host, cfg.constellation, motion) {
        Some((layer, handle)) => {
            layers.push(layer);
            Some(handle)
        }
        None => None,
    };
    layers.extend(render::trail::mount(&mut host, cfg.trail, motion));
    layers.extend(render::sparks::mount(&mut host, cfg.sparks, motion));

    let touch = TouchSupport::new();
    let audio = Rc::new(RefCell::new(AudioFx::new(cfg.audio)));

    let mut listeners = Vec::new();
    listeners.extend(events::wire_scroll(&document, cfg.chrome, constellation));
    let loops = layers.iter().map(|l| l.frame.control()).collect();
    listeners.extend(events::wire_visibility(&document, loops));
    listeners.extend(events::wire_sound(&document, audio.clone(), touch.flag()));
    let reveal = reveal::wire_reveal(&document, cfg.reveal, motion);

    MOUNTED.with(|m| {
        *m.borrow_mut() = Some(Effects {
            layers,
            listeners,
            _reveal: reveal,
            audio,
            _touch: touch,
        });
    });
    log::info!("effects mounted");
    Ok(())
}

/// Stop every frame loop, detach listeners, remove the overlay canvases and
/// close the audio context. Safe to call when nothing is mounted.
#[wasm_bindgen]
pub fn unmount() {
    let effects = MOUNTED.with(|m| m.borrow_mut().take());
    drop(effects);
}
