//! Engine error type.

use core::fmt;

/// Error type for registry operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EngineError {
    /// The allocator could not grow the registry.
    OutOfMemory,
    /// A configuration call named a button that was never registered.
    InvalidButton {
        /// Index that was requested.
        index: usize,
        /// Number of registered buttons at the time of the call.
        count: usize,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::OutOfMemory => f.write_str("out of memory growing button registry"),
            EngineError::InvalidButton { index, count } => {
                write!(f, "button {index} not registered ({count} registered)")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EngineError {}

impl From<alloc::collections::TryReserveError> for EngineError {
    fn from(_: alloc::collections::TryReserveError) -> Self {
        EngineError::OutOfMemory
    }
}
