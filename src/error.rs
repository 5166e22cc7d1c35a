//! Unified error types for the output driver.
//!
//! Follows the usual firmware funnel pattern: one `Copy` error enum that
//! every fallible path converts into, so callers handle a single type.
//! Configuration-violating writes (min > max and friends) are
//! deliberately *not* errors — they are silent no-ops at the setter and
//! the transport layer never sees them.

use core::fmt;

// ---------------------------------------------------------------------------
// Transport errors
// ---------------------------------------------------------------------------

/// A device command could not be delivered.
///
/// The driver never retries at this layer and never mutates actuator
/// configuration on failure: only the in-flight command is lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportError {
    /// The connection to the device is gone.
    Disconnected,
    /// The command was sent but the device did not acknowledge in time.
    Timeout,
    /// The device rejected the command (unsupported message, bad payload).
    Rejected,
    /// Any other I/O-level failure in the transport adapter.
    Io,
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disconnected => write!(f, "device disconnected"),
            Self::Timeout => write!(f, "command timed out"),
            Self::Rejected => write!(f, "command rejected by device"),
            Self::Io => write!(f, "transport I/O error"),
        }
    }
}

impl std::error::Error for TransportError {}

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, TransportError>;
