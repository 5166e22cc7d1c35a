//! Actuator output models — pure logic, zero I/O.
//!
//! Each module maps the tick parameters `(stroke, intensity, pace)` onto
//! a concrete command value for one actuator class. The driver layer
//! (`crate::drivers`) batches these into device commands.

pub mod mode;
pub mod position;
pub mod registry;
pub mod vibration;

pub use mode::ActuatorMode;
pub use position::{PositionActuator, PositionCommand};
pub use registry::{Actuator, ActuatorCapability, ActuatorKind, ActuatorRegistry};
pub use vibration::VibrationActuator;
