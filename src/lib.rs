//! strokedrive — haptic output driver for networked interactive devices.
//!
//! Converts a periodic stimulus stream (stroke phase, intensity, pace)
//! and a game-phase stream into concrete device commands: batched
//! vibration levels, position moves, and a scripted climax decay
//! sequence.
//!
//! ```text
//!  stimulus ──▶ DeviceFleet ──▶ DeviceDriver ──▶ DeviceTransport ──▶ wire
//!  phase    ──▶     │               │ ActuatorRegistry
//!                   │               └─▶ ClimaxRun (timed, concurrent)
//! ```
//!
//! The transport (discovery, pairing, protocol framing) lives outside
//! this crate behind [`app::ports::DeviceTransport`]. Everything here is
//! single-threaded cooperative async: futures carry no `Send` bound and
//! the shared device handle is deliberately unlocked — interleaved
//! writes from the tick path and an in-flight climax sequence are
//! last-write-wins at the device.

#![deny(unused_must_use)]

pub mod actuators;
pub mod app;
pub mod config;
pub mod drivers;
pub mod stimulus;

mod error;

pub use actuators::{
    Actuator, ActuatorCapability, ActuatorKind, ActuatorMode, ActuatorRegistry, PositionActuator,
    PositionCommand, VibrationActuator,
};
pub use app::fleet::DeviceFleet;
pub use app::ports::DeviceTransport;
pub use config::{ActuatorProfile, FleetConfig};
pub use drivers::climax::{CLIMAX_STEP_MS, CLIMAX_STEPS, ClimaxRun, ClimaxStyle, strength};
pub use drivers::device::DeviceDriver;
pub use error::{Result, TransportError};
pub use stimulus::{GamePhase, Stroke};
