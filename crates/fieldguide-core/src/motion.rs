/// Whether non-essential motion should be suppressed.
///
/// Read once when a renderer mounts and fixed for that renderer's lifetime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MotionPreference {
    reduced: bool,
}

impl MotionPreference {
    pub const ALLOWED: Self = Self { reduced: false };
    pub const REDUCED: Self = Self { reduced: true };

    /// Build from the host's reduced-motion query. An unavailable signal
    /// (`None`) fails open to "motion allowed".
    pub fn from_query(matches: Option<bool>) -> Self {
        match matches {
            Some(reduced) => Self { reduced },
            None => {
                log::debug!("reduced-motion signal unavailable; allowing motion");
                Self::ALLOWED
            }
        }
    }

    #[inline]
    pub fn is_reduced(self) -> bool {
        self.reduced
    }

    #[inline]
    pub fn allows_motion(self) -> bool {
        !self.reduced
    }
}
