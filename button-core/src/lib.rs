//! Platform-agnostic button event engine.
//!
//! This crate turns raw pin samples, polled on a fixed loop, into semantic
//! button events without any platform-specific dependencies. It runs in
//! embedded `no_std` environments (with a global allocator) and on host for
//! testing.
//!
//! # Overview
//!
//! - [`board`]: Platform primitives ([`Board`], [`Sampling`], [`Pull`])
//! - [`info`]: Per-input descriptor lent to callbacks ([`ButtonInfo`])
//! - [`events`]: Event kinds and the registration builder ([`Events`], [`EventKind`])
//! - [`engine`]: Registry and poll cycle ([`ButtonEngine`], [`ButtonId`])
//! - [`config`]: Registry sizing and default windows ([`EngineConfig`])
//! - [`sim`]: Scripted board for host tests ([`SimBoard`])
//!
//! # Events
//!
//! | Event    | Fires when |
//! |----------|------------|
//! | `down`   | press edge that is not a double press |
//! | `up`     | release edge |
//! | `hold`   | a press lasts at least the hold threshold (once per press) |
//! | `double` | a press edge comes at most the double window after the previous one |
//! | `stun`   | a release lasts longer than the stun threshold (once per release) |
//!
//! A threshold of 0 disables the matching event even if a callback is set.
//!
//! # Example
//!
//! ```rust
//! use button_core::{ButtonEngine, Events, SimBoard};
//!
//! let mut engine = ButtonEngine::new(SimBoard::new());
//! let mode = engine
//!     .register_digital(2, Events::new().on_down(|b| assert_eq!(b.pin, 2)))
//!     .unwrap();
//! let ladder = engine
//!     .register_analog(0, 512, 20, Events::new().on_hold(1000, |_| {}))
//!     .unwrap();
//!
//! engine.board_mut().press(2);
//! engine.board_mut().set_analog(0, 505);
//! engine.poll();
//!
//! assert!(engine.get(mode).unwrap().is_pressed());
//! assert!(engine.get(ladder).unwrap().is_pressed());
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (`std::error::Error` impls)
//! - **`defmt`**: Log through defmt (for embedded targets)
//! - **`log`**: Log through the `log` facade (for host builds)

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "defmt", feature = "log"))]
compile_error!("Cannot enable both `defmt` and `log` features - pick one logging backend");

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod fmt;

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod info;
pub mod sim;

// Re-export main types at crate root
pub use board::{Board, Pull, Sampling};
pub use config::{EngineConfig, DEFAULT_DOUBLE_MS, DEFAULT_HOLD_MS, DEFAULT_STUN_MS};
pub use engine::{ButtonEngine, ButtonId};
pub use error::EngineError;
pub use events::{EventKind, Events, Handler};
pub use info::ButtonInfo;
pub use sim::SimBoard;
