//! Page transition handling for the mounted effects.
//!
//! A page hidden into the back/forward cache keeps its effects; the
//! visibility listener has already suspended the frame loops. Only a real
//! unload tears them down, and a page restored without effects mounts them
//! again.

/// `pagehide` / `pageshow` with the event's `persisted` flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageTransition {
    Hide { persisted: bool },
    Show { persisted: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleAction {
    Keep,
    Mount,
    Unmount,
}

impl PageTransition {
    pub fn action(self, mounted: bool) -> LifecycleAction {
        match self {
            PageTransition::Hide { persisted: false } if mounted => LifecycleAction::Unmount,
            PageTransition::Show { persisted: true } if !mounted => LifecycleAction::Mount,
            _ => LifecycleAction::Keep,
        }
    }
}
