use fieldguide_core::LoopState;
use gloo_render::{request_animation_frame, AnimationFrame};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Per-frame work of one effect layer.
pub trait Tick {
    fn tick(&mut self, now: Instant);
}

struct LoopInner {
    name: &'static str,
    state: Cell<LoopState>,
    pending: RefCell<Option<AnimationFrame>>,
    layer: Rc<RefCell<dyn Tick>>,
}

impl LoopInner {
    fn request(self: &Rc<Self>) {
        let weak = Rc::downgrade(self);
        let frame = request_animation_frame(move |_| {
            if let Some(inner) = weak.upgrade() {
                inner.on_frame();
            }
        });
        *self.pending.borrow_mut() = Some(frame);
    }

    /// Dropping the pending frame cancels it.
    fn cancel(&self) {
        self.pending.borrow_mut().take();
    }

    fn on_frame(self: &Rc<Self>) {
        self.pending.borrow_mut().take();
        if !self.state.get().should_tick() {
            return;
        }
        match self.layer.try_borrow_mut() {
            Ok(mut l) => l.tick(Instant::now()),
            Err(_) => log::debug!("[{}] layer busy; frame skipped", self.name),
        }
        if self.state.get().should_tick() {
            self.request();
        }
    }

    fn transition(&self, f: impl FnOnce(&mut LoopState) -> bool) -> bool {
        let mut state = self.state.get();
        let changed = f(&mut state);
        self.state.set(state);
        changed
    }
}

/// `requestAnimationFrame` loop owned by one layer. Stopped on drop.
pub struct FrameLoop {
    inner: Rc<LoopInner>,
}

impl FrameLoop {
    pub fn new(name: &'static str, layer: Rc<RefCell<dyn Tick>>) -> Self {
        FrameLoop {
            inner: Rc::new(LoopInner {
                name,
                state: Cell::new(LoopState::Idle),
                pending: RefCell::new(None),
                layer,
            }),
        }
    }

    pub fn start(&self) {
        if self.inner.transition(LoopState::start) {
            self.inner.request();
        }
    }

    /// Cancel the pending frame. Safe to call repeatedly.
    pub fn stop(&self) {
        if self.inner.transition(LoopState::stop) {
            self.inner.cancel();
        }
    }

    /// Weak handle for pausing the loop from page-level listeners.
    pub fn control(&self) -> LoopControl {
        LoopControl {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
        self.inner.cancel();
    }
}

#[derive(Clone)]
pub struct LoopControl {
    inner: Weak<LoopInner>,
}

impl LoopControl {
    pub fn suspend(&self) {
        if let Some(inner) = self.inner.upgrade() {
            if inner.transition(LoopState::suspend) {
                inner.cancel();
                log::info!("[{}] suspended", inner.name);
            }
        }
    }

    pub fn resume(&self) {
        if let Some(inner) = self.inner.upgrade() {
            if inner.transition(LoopState::resume) {
                inner.request();
                log::info!("[{}] resumed", inner.name);
            }
        }
    }
}
