//! Per-input descriptor handed to every callback.

use crate::board::Sampling;

/// State and configuration of one registered input.
///
/// Callbacks receive `&mut ButtonInfo` for the input that fired and may
/// adjust the public thresholds, e.g. set `hold_threshold_ms = 0` to stop a
/// hold from firing on later presses. The pressed/holding/stunned flags are
/// owned by the poll cycle and are read-only outside it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonInfo {
    /// Hardware channel the input is sampled from.
    pub pin: u8,
    /// Digital level or analog window classification.
    pub sampling: Sampling,
    /// Time of the most recent press edge, `None` until the first press.
    pub press_start_ms: Option<u32>,
    /// Refreshed on every pressed sample; baseline for the stun check.
    pub last_transition_ms: u32,
    /// Time of the most recent release edge.
    pub release_start_ms: Option<u32>,
    /// Duration measured for the event being delivered: press length for
    /// hold and up, gap between press edges for double and down.
    pub elapsed_ms: u32,
    /// Minimum press length before `on_hold` fires. 0 disables.
    pub hold_threshold_ms: u32,
    /// Maximum gap between press edges for `on_double`. 0 disables.
    pub double_threshold_ms: u32,
    /// Release length after which `on_stun` fires. 0 disables.
    pub stun_threshold_ms: u32,
    pressed: bool,
    holding: bool,
    stunned: bool,
}

impl ButtonInfo {
    pub(crate) const fn new(pin: u8, sampling: Sampling) -> Self {
        Self {
            pin,
            sampling,
            press_start_ms: None,
            last_transition_ms: 0,
            release_start_ms: None,
            elapsed_ms: 0,
            hold_threshold_ms: 0,
            double_threshold_ms: 0,
            stun_threshold_ms: 0,
            pressed: false,
            holding: false,
            stunned: false,
        }
    }

    /// Classification from the previous poll (or the current one, once the
    /// poll has finished with this input).
    #[inline]
    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Hold has fired for the current press.
    #[inline]
    #[must_use]
    pub const fn is_holding(&self) -> bool {
        self.holding
    }

    /// Stun has fired for the current release.
    #[inline]
    #[must_use]
    pub const fn is_stunned(&self) -> bool {
        self.stunned
    }

    /// Whether this input is an analog window match.
    #[inline]
    #[must_use]
    pub const fn is_analog(&self) -> bool {
        self.sampling.is_analog()
    }

    pub(crate) fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    pub(crate) fn set_holding(&mut self, holding: bool) {
        self.holding = holding;
    }

    pub(crate) fn set_stunned(&mut self, stunned: bool) {
        self.stunned = stunned;
    }
}
