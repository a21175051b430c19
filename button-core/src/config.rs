//! Engine configuration and default timing windows.

/// Hold threshold applied by [`ButtonEngine::set_hold_default`](crate::ButtonEngine::set_hold_default).
pub const DEFAULT_HOLD_MS: u32 = 1000;

/// Double-press window applied by [`ButtonEngine::set_double_default`](crate::ButtonEngine::set_double_default).
pub const DEFAULT_DOUBLE_MS: u32 = 500;

/// Stun threshold applied by [`ButtonEngine::set_stun_default`](crate::ButtonEngine::set_stun_default).
pub const DEFAULT_STUN_MS: u32 = 3000;

/// Registry sizing options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EngineConfig {
    /// Number of descriptors reserved by the first registration.
    ///
    /// Values below 1 behave as 1. Later growth is one descriptor at a time.
    pub initial_capacity: usize,
}

impl EngineConfig {
    /// Reserve room for exactly one descriptor up front.
    pub const DEFAULT: Self = Self {
        initial_capacity: 1,
    };

    #[must_use]
    pub const fn with_initial_capacity(initial_capacity: usize) -> Self {
        Self { initial_capacity }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
