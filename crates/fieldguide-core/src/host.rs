//! Mounting seam: what a renderer needs from the page it lives in.

use crate::paint::BlendMode;

/// Size in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Description of a dedicated overlay surface. Every overlay is fixed to the
/// top-left corner and never intercepts pointer input.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceSpec {
    pub name: &'static str,
    pub size: Viewport,
    pub z_index: i32,
    pub blend: BlendMode,
    /// Opacity the layer is presented at once visible.
    pub opacity: f32,
    /// Opacity at mount; differs from `opacity` when the layer fades in.
    pub initial_opacity: f32,
}

pub const CONSTELLATION_Z: i32 = 0;
pub const TRAIL_Z: i32 = 50;
pub const SPARKS_Z: i32 = 60;

/// Host events a renderer may subscribe to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HostEvent {
    Resize,
    PointerMove,
    Scroll,
    Click,
    VisibilityChange,
}

impl HostEvent {
    /// DOM event type name.
    pub fn dom_name(self) -> &'static str {
        match self {
            HostEvent::Resize => "resize",
            HostEvent::PointerMove => "pointermove",
            HostEvent::Scroll => "scroll",
            HostEvent::Click => "click",
            HostEvent::VisibilityChange => "visibilitychange",
        }
    }
}

pub trait Host {
    type Surface;

    fn viewport(&self) -> Viewport;

    /// `None` when the surface cannot be created; the renderer then stays
    /// unmounted.
    fn create_surface(&mut self, spec: &SurfaceSpec) -> Option<Self::Surface>;

    fn subscribe(&mut self, event: HostEvent);
}
