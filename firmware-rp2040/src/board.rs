//! RP2040 implementation of the [`Board`] trait.
//!
//! Digital inputs are GPIOs held as [`Flex`] pins so the engine can set
//! their direction and pull at registration. Analog inputs are ADC channels
//! read with the blocking driver; their pull is fixed when the channel is
//! created, since the ADC driver takes it at construction.
//!
//! # Pins
//!
//! Pins are addressed by GPIO number. Each GPIO must be handed to the board
//! with [`Rp2040Board::add_digital`] or [`Rp2040Board::add_analog`] before a
//! button is registered on it; reads of unknown pins log a warning and
//! report released.

use button_core::{Board, Pull, Sampling};
use defmt::{debug, warn};
use embassy_rp::adc::{self, Adc, Blocking};
use embassy_rp::gpio::{self, Flex};
use embassy_time::Instant;
use heapless::Vec;

/// Maximum number of digital GPIOs the board tracks.
pub const MAX_DIGITAL_PINS: usize = 8;

/// Maximum number of ADC channels the board tracks (GPIO 26-29).
pub const MAX_ANALOG_CHANNELS: usize = 4;

/// Error type for board setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum BoardError {
    /// No room left for another pin of this kind.
    Full,
    /// The GPIO number was already added.
    Duplicate(u8),
}

/// [`Board`] backed by RP2040 GPIOs, the ADC, and the embassy time driver.
pub struct Rp2040Board<'d> {
    digital: Vec<(u8, Flex<'d>), MAX_DIGITAL_PINS>,
    adc: Adc<'d, Blocking>,
    analog: Vec<(u8, adc::Channel<'d>), MAX_ANALOG_CHANNELS>,
}

impl<'d> Rp2040Board<'d> {
    /// Create a board with no pins attached.
    #[must_use]
    pub fn new(adc: Adc<'d, Blocking>) -> Self {
        Self {
            digital: Vec::new(),
            adc,
            analog: Vec::new(),
        }
    }

    /// Attach a GPIO for digital sampling under its GPIO number.
    pub fn add_digital(&mut self, gpio: u8, pin: Flex<'d>) -> Result<(), BoardError> {
        if self.digital.iter().any(|(id, _)| *id == gpio) {
            return Err(BoardError::Duplicate(gpio));
        }
        self.digital
            .push((gpio, pin))
            .map_err(|_| BoardError::Full)
    }

    /// Attach an ADC channel for analog sampling under its GPIO number.
    pub fn add_analog(&mut self, gpio: u8, channel: adc::Channel<'d>) -> Result<(), BoardError> {
        if self.analog.iter().any(|(id, _)| *id == gpio) {
            return Err(BoardError::Duplicate(gpio));
        }
        self.analog
            .push((gpio, channel))
            .map_err(|_| BoardError::Full)
    }

    fn flex(&mut self, pin: u8) -> Option<&mut Flex<'d>> {
        self.digital
            .iter_mut()
            .find(|(id, _)| *id == pin)
            .map(|(_, flex)| flex)
    }
}

/// Map the engine's pull setting onto the GPIO driver's.
#[inline]
fn gpio_pull(pull: Pull) -> gpio::Pull {
    match pull {
        Pull::None => gpio::Pull::None,
        Pull::Up => gpio::Pull::Up,
    }
}

impl Board for Rp2040Board<'_> {
    fn now_ms(&mut self) -> u32 {
        // Truncation wraps after ~49 days, matching the engine's u32 clock.
        Instant::now().as_millis() as u32
    }

    fn digital_read(&mut self, pin: u8) -> bool {
        match self.flex(pin) {
            Some(flex) => flex.is_high(),
            None => {
                warn!("digital read of unattached GPIO {}", pin);
                false
            }
        }
    }

    fn analog_read(&mut self, pin: u8) -> u16 {
        let Some((_, channel)) = self.analog.iter_mut().find(|(id, _)| *id == pin) else {
            warn!("analog read of unattached GPIO {}", pin);
            return 0;
        };
        match self.adc.blocking_read(channel) {
            Ok(sample) => sample,
            Err(_) => {
                warn!("ADC conversion failed on GPIO {}", pin);
                0
            }
        }
    }

    fn configure_input(&mut self, pin: u8, sampling: Sampling, pull: Pull) {
        match sampling {
            Sampling::Digital => match self.flex(pin) {
                Some(flex) => {
                    flex.set_as_input();
                    flex.set_pull(gpio_pull(pull));
                    debug!("GPIO {} configured as digital input", pin);
                }
                None => warn!("cannot configure unattached GPIO {}", pin),
            },
            Sampling::Analog { .. } => {
                if !self.analog.iter().any(|(id, _)| *id == pin) {
                    warn!("cannot configure unattached ADC GPIO {}", pin);
                }
            }
        }
    }
}
