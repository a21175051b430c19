//! Board trait: the platform primitives the engine samples through.

/// How a registered pin is sampled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Sampling {
    /// Pressed when the pin reads high.
    Digital,
    /// Pressed when the analog reading lies within
    /// `[reference - tolerance, reference + tolerance]`, both ends inclusive.
    Analog { reference: u16, tolerance: u16 },
}

impl Sampling {
    /// Classify an analog reading against this window.
    ///
    /// Always `false` for [`Sampling::Digital`].
    #[inline]
    #[must_use]
    pub const fn window_contains(self, sample: u16) -> bool {
        match self {
            Sampling::Digital => false,
            Sampling::Analog {
                reference,
                tolerance,
            } => {
                let low = reference.saturating_sub(tolerance);
                let high = reference.saturating_add(tolerance);
                sample >= low && sample <= high
            }
        }
    }

    /// Whether this is an analog window match.
    #[inline]
    #[must_use]
    pub const fn is_analog(self) -> bool {
        matches!(self, Sampling::Analog { .. })
    }
}

/// Internal bias applied when a pin is configured as an input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pull {
    None,
    Up,
}

/// Platform primitives consumed by [`ButtonEngine`](crate::ButtonEngine).
///
/// This trait abstracts the hardware so the engine can run on a
/// microcontroller or against a scripted board on the host.
///
/// Every method must return immediately; the poll cycle never waits.
pub trait Board {
    /// Monotonic milliseconds since boot.
    fn now_ms(&mut self) -> u32;

    /// Read a digital pin. `true` means the line is high.
    fn digital_read(&mut self, pin: u8) -> bool;

    /// Read an analog channel.
    fn analog_read(&mut self, pin: u8) -> u16;

    /// Configure `pin` as an input with the given bias.
    ///
    /// Called once per registration, before the first poll samples the pin.
    fn configure_input(&mut self, pin: u8, sampling: Sampling, pull: Pull);
}

impl<B: Board + ?Sized> Board for &mut B {
    fn now_ms(&mut self) -> u32 {
        (**self).now_ms()
    }

    fn digital_read(&mut self, pin: u8) -> bool {
        (**self).digital_read(pin)
    }

    fn analog_read(&mut self, pin: u8) -> u16 {
        (**self).analog_read(pin)
    }

    fn configure_input(&mut self, pin: u8, sampling: Sampling, pull: Pull) {
        (**self).configure_input(pin, sampling, pull)
    }
}
