//! Application layer — fleet facade and the port boundary.
//!
//! The game loop talks to [`fleet::DeviceFleet`]; everything below it
//! reaches the outside world only through the [`ports`] traits, keeping
//! the whole layer testable with mock transports.

pub mod fleet;
pub mod ports;
