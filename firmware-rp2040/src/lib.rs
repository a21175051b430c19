//! Button event engine firmware for RP2040.
//!
//! This crate provides the embedded side of the button engine: a
//! [`Board`](button_core::Board) implementation over RP2040 GPIOs and the
//! ADC, polled from an embassy task.
//!
//! # Hardware Configuration
//!
//! | Function      | GPIO | Description |
//! |---------------|------|-------------|
//! | Mode button   | 2    | Digital, active high (external pull-down) |
//! | Keypad ladder | 26   | ADC0, resistor ladder with internal pull-up |
//!
//! # Architecture
//!
//! A single `button_task` owns the [`ButtonEngine`](button_core::ButtonEngine)
//! and calls `poll()` on every tick of an [`embassy_time::Ticker`] running at
//! [`POLL_PERIOD`]. Callbacks run inside that poll and log via defmt.
//!
//! # Features
//!
//! - **`dev-panic`** (default): Use `panic-probe` for development (prints panic info via RTT)
//! - **`prod-panic`**: Use `panic-reset` for production (silent watchdog reset)
//!
//! # Re-exports
//!
//! This crate re-exports the public items of [`button_core`] for convenience,
//! so consumers only need to depend on this crate.

#![no_std]

#[cfg(all(feature = "dev-panic", feature = "prod-panic"))]
compile_error!("Cannot enable both `dev-panic` and `prod-panic` features - they both install a panic handler");

use embassy_time::Duration;

// Re-export core types for convenience
pub use button_core::{
    Board, ButtonEngine, ButtonId, ButtonInfo, EngineConfig, EngineError, EventKind, Events,
    Pull, Sampling,
};

pub mod board;

pub use board::{BoardError, Rp2040Board, MAX_ANALOG_CHANNELS, MAX_DIGITAL_PINS};

/// Interval between engine polls.
pub const POLL_PERIOD: Duration = Duration::from_millis(10);

/// Heap reserved for the button registry and its callbacks.
pub const HEAP_SIZE: usize = 4096;
