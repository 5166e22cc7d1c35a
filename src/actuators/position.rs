//! Linear (position) actuator output model.

use log::warn;

use crate::stimulus::Stroke;

use super::mode::ActuatorMode;

/// A concrete "move" instruction: go to `target` over `travel_ms`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionCommand {
    /// Normalized target position, `[0, 1]`.
    pub target: f32,
    /// Travel duration in milliseconds (one half stroke).
    pub travel_ms: u32,
}

/// One linear rail on a device.
///
/// Same mode set and setter semantics as
/// [`VibrationActuator`](super::vibration::VibrationActuator), but the
/// output is a [`PositionCommand`] or nothing:
/// `AlwaysOn`/`AlwaysOff` deliberately issue no movement — a rail has no
/// meaningful steady state, so those modes only exist for mode selection.
#[derive(Debug, Clone)]
pub struct PositionActuator {
    index: u32,
    mode: ActuatorMode,
    min_position: f32,
    max_position: f32,
}

impl PositionActuator {
    pub fn new(index: u32) -> Self {
        Self {
            index,
            mode: ActuatorMode::default(),
            min_position: 0.0,
            max_position: 1.0,
        }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn mode(&self) -> ActuatorMode {
        self.mode
    }

    pub fn min_position(&self) -> f32 {
        self.min_position
    }

    pub fn max_position(&self) -> f32 {
        self.max_position
    }

    pub fn set_mode(&mut self, mode: ActuatorMode) {
        self.mode = mode;
    }

    /// Set the stroke floor position. Refused (no-op) above the current
    /// ceiling or for NaN.
    pub fn set_min_position(&mut self, min: f32) {
        if min <= self.max_position {
            self.min_position = min;
        }
    }

    /// Set the stroke ceiling position. Refused (no-op) below the current
    /// floor or for NaN.
    pub fn set_max_position(&mut self, max: f32) {
        if max >= self.min_position {
            self.max_position = max;
        }
    }

    /// Compute the move for one tick, if any.
    ///
    /// `pace` is the cycle frequency in strokes per second; a half stroke
    /// therefore takes `1000 / pace` milliseconds. A non-positive or
    /// non-finite pace cannot be turned into a travel time — the actuator
    /// stays where it is and a warning is logged.
    pub fn output(&self, stroke: Stroke, pace: f32) -> Option<PositionCommand> {
        let active_stroke = match self.mode {
            ActuatorMode::AlwaysOn | ActuatorMode::AlwaysOff => return None,
            ActuatorMode::ActiveOnUpstroke => Stroke::Up,
            ActuatorMode::ActiveOnDownstroke => Stroke::Down,
        };

        if !pace.is_finite() || pace <= 0.0 {
            warn!("position[{}]: invalid pace {pace}, holding position", self.index);
            return None;
        }
        let travel_ms = (1000.0 / pace).round() as u32;

        let target = if stroke == active_stroke {
            self.max_position
        } else {
            self.min_position
        };
        Some(PositionCommand { target, travel_ms })
    }

    /// Linear remap of a normalized `[0, 1]` input into `[min, max]`.
    pub fn map_to_range(&self, input: f32) -> f32 {
        let slope = self.max_position - self.min_position;
        self.min_position + slope * input
    }
}
