//! Scripted board for host tests and simulation.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::board::{Board, Pull, Sampling};

/// A [`Board`] whose clock, pin levels, and analog readings are set by hand.
///
/// Unset digital pins read low and unset analog channels read 0. Every
/// configuration call and every sampled pin is recorded so tests can check
/// what the engine touched and in which order.
#[derive(Debug, Default, Clone)]
pub struct SimBoard {
    now_ms: u32,
    levels: BTreeMap<u8, bool>,
    analog: BTreeMap<u8, u16>,
    configured: Vec<(u8, Sampling, Pull)>,
    reads: Vec<u8>,
}

impl SimBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_time(&mut self, now_ms: u32) {
        self.now_ms = now_ms;
    }

    pub fn advance(&mut self, ms: u32) {
        self.now_ms = self.now_ms.wrapping_add(ms);
    }

    pub fn set_level(&mut self, pin: u8, high: bool) {
        self.levels.insert(pin, high);
    }

    /// Drive a digital pin high.
    pub fn press(&mut self, pin: u8) {
        self.set_level(pin, true);
    }

    /// Drive a digital pin low.
    pub fn release(&mut self, pin: u8) {
        self.set_level(pin, false);
    }

    pub fn set_analog(&mut self, pin: u8, value: u16) {
        self.analog.insert(pin, value);
    }

    /// Pins configured so far, in call order.
    #[must_use]
    pub fn configured(&self) -> &[(u8, Sampling, Pull)] {
        &self.configured
    }

    /// Pins sampled so far, in call order.
    #[must_use]
    pub fn reads(&self) -> &[u8] {
        &self.reads
    }

    pub fn clear_reads(&mut self) {
        self.reads.clear();
    }
}

impl Board for SimBoard {
    fn now_ms(&mut self) -> u32 {
        self.now_ms
    }

    fn digital_read(&mut self, pin: u8) -> bool {
        self.reads.push(pin);
        self.levels.get(&pin).copied().unwrap_or(false)
    }

    fn analog_read(&mut self, pin: u8) -> u16 {
        self.reads.push(pin);
        self.analog.get(&pin).copied().unwrap_or(0)
    }

    fn configure_input(&mut self, pin: u8, sampling: Sampling, pull: Pull) {
        self.configured.push((pin, sampling, pull));
    }
}
