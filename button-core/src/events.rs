//! Event kinds, callback storage, and the [`Events`] registration builder.

use alloc::boxed::Box;

use crate::info::ButtonInfo;

/// Callback invoked with the descriptor of the input that fired.
pub type Handler = Box<dyn FnMut(&mut ButtonInfo)>;

/// The five events an input can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventKind {
    /// Press edge that is not a double press.
    Down,
    /// Release edge.
    Up,
    /// Press held past the hold threshold, once per press.
    Hold,
    /// Press edge within the double window of the previous press edge.
    Double,
    /// Release held past the stun threshold, once per release.
    Stun,
}

impl EventKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            EventKind::Down => "down",
            EventKind::Up => "up",
            EventKind::Hold => "hold",
            EventKind::Double => "double",
            EventKind::Stun => "stun",
        }
    }
}

/// Callback slots of one registered input.
#[derive(Default)]
pub(crate) struct Handlers {
    pub(crate) on_down: Option<Handler>,
    pub(crate) on_up: Option<Handler>,
    pub(crate) on_hold: Option<Handler>,
    pub(crate) on_double: Option<Handler>,
    pub(crate) on_stun: Option<Handler>,
}

impl Handlers {
    pub(crate) fn slot(&mut self, kind: EventKind) -> &mut Option<Handler> {
        match kind {
            EventKind::Down => &mut self.on_down,
            EventKind::Up => &mut self.on_up,
            EventKind::Hold => &mut self.on_hold,
            EventKind::Double => &mut self.on_double,
            EventKind::Stun => &mut self.on_stun,
        }
    }
}

/// Callbacks and timing windows supplied at registration.
///
/// Every slot is optional; `Events::new()` registers an input that is
/// sampled but reports nothing until configured later.
///
/// # Example
///
/// ```
/// use button_core::Events;
///
/// let events = Events::new()
///     .on_down(|_| {})
///     .on_hold(1000, |button| button.hold_threshold_ms = 0)
///     .on_double(300, |_| {});
/// ```
#[derive(Default)]
#[must_use]
pub struct Events {
    pub(crate) handlers: Handlers,
    pub(crate) hold_threshold_ms: u32,
    pub(crate) double_threshold_ms: u32,
    pub(crate) stun_threshold_ms: u32,
}

impl Events {
    /// No callbacks, every feature disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire on a press edge that is not a double press.
    pub fn on_down(mut self, f: impl FnMut(&mut ButtonInfo) + 'static) -> Self {
        self.handlers.on_down = Some(Box::new(f));
        self
    }

    /// Fire on a release edge.
    pub fn on_up(mut self, f: impl FnMut(&mut ButtonInfo) + 'static) -> Self {
        self.handlers.on_up = Some(Box::new(f));
        self
    }

    /// Fire once per press after it has lasted `threshold_ms`.
    pub fn on_hold(mut self, threshold_ms: u32, f: impl FnMut(&mut ButtonInfo) + 'static) -> Self {
        self.hold_threshold_ms = threshold_ms;
        self.handlers.on_hold = Some(Box::new(f));
        self
    }

    /// Fire instead of down when two press edges are at most `threshold_ms` apart.
    pub fn on_double(
        mut self,
        threshold_ms: u32,
        f: impl FnMut(&mut ButtonInfo) + 'static,
    ) -> Self {
        self.double_threshold_ms = threshold_ms;
        self.handlers.on_double = Some(Box::new(f));
        self
    }

    /// Fire once per release after more than `threshold_ms` without a press.
    pub fn on_stun(mut self, threshold_ms: u32, f: impl FnMut(&mut ButtonInfo) + 'static) -> Self {
        self.stun_threshold_ms = threshold_ms;
        self.handlers.on_stun = Some(Box::new(f));
        self
    }
}
