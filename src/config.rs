//! Fleet configuration and actuator settings snapshots.
//!
//! The settings UI reads and writes actuator modes/ranges through the
//! registry accessors; [`ActuatorProfile`] is the serializable snapshot
//! of one actuator's settings for whatever persistence layer the host
//! app uses (the storage format itself is out of scope here).

use serde::{Deserialize, Serialize};

use crate::actuators::{ActuatorMode, PositionActuator, VibrationActuator};
use crate::drivers::climax::ClimaxStyle;

/// Fleet-wide output settings.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FleetConfig {
    /// How the climax sequence delivers its decaying strength.
    pub climax_style: ClimaxStyle,
}

/// Snapshot of one actuator's mode and range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActuatorProfile {
    pub mode: ActuatorMode,
    pub min: f32,
    pub max: f32,
}

impl ActuatorProfile {
    /// Capture a vibration motor's current settings.
    pub fn of_vibration(motor: &VibrationActuator) -> Self {
        Self {
            mode: motor.mode(),
            min: motor.min_intensity(),
            max: motor.max_intensity(),
        }
    }

    /// Capture a linear rail's current settings.
    pub fn of_position(rail: &PositionActuator) -> Self {
        Self {
            mode: rail.mode(),
            min: rail.min_position(),
            max: rail.max_position(),
        }
    }

    /// Whether the profile satisfies the range invariant on its own.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite()
            && self.max.is_finite()
            && (0.0..=1.0).contains(&self.min)
            && (0.0..=1.0).contains(&self.max)
            && self.min <= self.max
    }

    /// Re-apply to a vibration motor through the guarded setters.
    ///
    /// The min/max/min write order lets a valid profile land regardless
    /// of which direction the range moved; an invalid profile degrades
    /// to whatever subset of writes the guards accept.
    pub fn apply_to_vibration(&self, motor: &mut VibrationActuator) {
        motor.set_mode(self.mode);
        motor.set_min_intensity(self.min);
        motor.set_max_intensity(self.max);
        motor.set_min_intensity(self.min);
    }

    /// Re-apply to a linear rail through the guarded setters.
    pub fn apply_to_position(&self, rail: &mut PositionActuator) {
        rail.set_mode(self.mode);
        rail.set_min_position(self.min);
        rail.set_max_position(self.max);
        rail.set_min_position(self.min);
    }
}
