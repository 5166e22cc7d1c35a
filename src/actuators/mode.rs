//! Actuator activation modes.

use serde::{Deserialize, Serialize};

/// How an actuator reacts to the stroke cycle.
///
/// The same four modes apply to vibration and position actuators, but a
/// linear actuator has no meaningful "always on" motion, so
/// [`AlwaysOn`]/[`AlwaysOff`] intentionally produce no position command
/// (see [`PositionActuator::output`](super::position::PositionActuator::output)).
///
/// [`AlwaysOn`]: ActuatorMode::AlwaysOn
/// [`AlwaysOff`]: ActuatorMode::AlwaysOff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActuatorMode {
    /// Output follows intensity regardless of stroke phase.
    AlwaysOn,
    /// Output pinned to zero / stationary.
    AlwaysOff,
    /// Full output on the upstroke, floor on the downstroke.
    #[default]
    ActiveOnUpstroke,
    /// Full output on the downstroke, floor on the upstroke.
    ActiveOnDownstroke,
}

impl ActuatorMode {
    /// All modes, in the order a settings UI should list them.
    pub const ALL: [Self; 4] = [
        Self::AlwaysOn,
        Self::AlwaysOff,
        Self::ActiveOnUpstroke,
        Self::ActiveOnDownstroke,
    ];

    /// Human-readable label for choice widgets.
    pub fn label(self) -> &'static str {
        match self {
            Self::AlwaysOn => "Always On",
            Self::AlwaysOff => "Always Off",
            Self::ActiveOnUpstroke => "Active on Upstroke",
            Self::ActiveOnDownstroke => "Active on Downstroke",
        }
    }
}
