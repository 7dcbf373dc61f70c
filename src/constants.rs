// Page hooks the effect layers look for. All are optional; a missing element
// just disables the behaviour attached to it.

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

pub const CONFIG_ELEMENT_ID: &str = "effects-config";

pub const SCROLL_PROGRESS_ID: &str = "scroll-progress";
pub const STICKY_CTA_ID: &str = "sticky-cta";
pub const BACK_TO_TOP_ID: &str = "back-to-top";
pub const TICKER_ID: &str = "memento-ticker";

pub const AUDIO_TOGGLE_ID: &str = "audio-toggle";
pub const HOVER_SOUND_SELECTOR: &str = "[data-hover-sound]";
pub const SMASH_SELECTOR: &str = "[data-smash]";

pub const REVEAL_SELECTOR: &str = "[data-reveal]";
pub const REVEAL_DELAY_ATTR: &str = "data-reveal-delay";
