//! State machine behind a per-renderer animation frame loop.
//!
//! The browser loop in the web crate holds the actual callback handle; this
//! type decides when a frame must be requested or cancelled so that the
//! rules (idempotent stop, pause while hidden) can be tested off-browser.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopState {
    #[default]
    Idle,
    Running,
    /// Started, but paused because the page is hidden.
    Suspended,
}

impl LoopState {
    /// Returns true when the caller must request the first frame.
    pub fn start(&mut self) -> bool {
        match self {
            LoopState::Idle => {
                *self = LoopState::Running;
                true
            }
            LoopState::Running | LoopState::Suspended => false,
        }
    }

    /// Returns true when a pending frame must be cancelled. Stopping an idle
    /// loop is a no-op.
    pub fn stop(&mut self) -> bool {
        let was_running = *self == LoopState::Running;
        *self = LoopState::Idle;
        was_running
    }

    /// Page became hidden. Returns true when a pending frame must be
    /// cancelled.
    pub fn suspend(&mut self) -> bool {
        if *self == LoopState::Running {
            *self = LoopState::Suspended;
            true
        } else {
            false
        }
    }

    /// Page became visible again. Returns true when the caller must request a
    /// frame.
    pub fn resume(&mut self) -> bool {
        if *self == LoopState::Suspended {
            *self = LoopState::Running;
            true
        } else {
            false
        }
    }

    /// A frame callback that fires after a stop or suspend must do nothing
    /// and must not reschedule.
    #[inline]
    pub fn should_tick(self) -> bool {
        self == LoopState::Running
    }

    #[inline]
    pub fn is_active(self) -> bool {
        self != LoopState::Idle
    }
}
