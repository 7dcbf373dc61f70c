//! Platform-independent logic behind the Field Guide effect layers.
//!
//! Nothing in this crate touches the DOM. The web front-end owns the
//! canvases, event listeners and audio graph and drives the types here once
//! per animation frame through the [`paint::Painter`] and [`host::Host`]
//! seams.

pub mod audio;
pub mod config;
pub mod constants;
pub mod constellation;
pub mod error;
pub mod host;
pub mod lifecycle;
pub mod motion;
pub mod paint;
pub mod particle;
pub mod reveal;
pub mod scheduler;
pub mod scroll;
pub mod sparks;
pub mod trail;

pub use config::*;
pub use error::ConfigError;
pub use host::{Host, HostEvent, SurfaceSpec, Viewport};
pub use lifecycle::{LifecycleAction, PageTransition};
pub use motion::MotionPreference;
pub use paint::{BlendMode, GradientStop, Painter, Rgba};
pub use particle::Particle;
pub use reveal::RevealAnimation;
pub use scheduler::LoopState;
