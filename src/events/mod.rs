pub mod scroll;
pub mod sound;
pub mod visibility;

pub use scroll::wire_scroll;
pub use sound::wire_sound;
pub use visibility::wire_visibility;
