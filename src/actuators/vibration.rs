//! Vibration motor output model.
//!
//! Pure compute: `(mode, range, stroke, intensity) → power level`.
//! The driver batches the per-motor levels into one device command.

use log::debug;

use crate::stimulus::Stroke;

use super::mode::ActuatorMode;

/// One vibration motor on a device.
///
/// Intensity range is normalized: `min_intensity ≤ max_intensity`, both
/// expected in `[0, 1]`. The setters silently refuse any write that would
/// break the ordering invariant — a settings UI should prevent it, but
/// the model defends independently.
#[derive(Debug, Clone)]
pub struct VibrationActuator {
    index: u32,
    mode: ActuatorMode,
    min_intensity: f32,
    max_intensity: f32,
    intensity_steps: Vec<f32>,
}

impl VibrationActuator {
    /// Build from the device capability report slot.
    ///
    /// `step_count` is the number of discrete power steps the device
    /// reports; the selectable level list holds `step_count + 1` evenly
    /// spaced values from 0.0 to 1.0.
    pub fn new(index: u32, step_count: u32) -> Self {
        let intensity_steps = if step_count == 0 {
            Vec::new()
        } else {
            let step = 1.0 / step_count as f32;
            (0..=step_count).map(|i| step * i as f32).collect()
        };
        Self {
            index,
            mode: ActuatorMode::default(),
            min_intensity: 0.0,
            max_intensity: 1.0,
            intensity_steps,
        }
    }

    /// Slot index in the device's batched vibration command.
    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn mode(&self) -> ActuatorMode {
        self.mode
    }

    pub fn min_intensity(&self) -> f32 {
        self.min_intensity
    }

    pub fn max_intensity(&self) -> f32 {
        self.max_intensity
    }

    /// Discrete selectable levels for populating a choice widget.
    pub fn intensity_steps(&self) -> &[f32] {
        &self.intensity_steps
    }

    pub fn set_mode(&mut self, mode: ActuatorMode) {
        self.mode = mode;
    }

    /// Set the intensity floor. A value above the current ceiling (or NaN)
    /// is refused and the prior value retained.
    pub fn set_min_intensity(&mut self, min: f32) {
        if min <= self.max_intensity {
            self.min_intensity = min;
        } else {
            debug!(
                "vibration[{}]: rejected min {} > max {}",
                self.index, min, self.max_intensity
            );
        }
    }

    /// Set the intensity ceiling. A value below the current floor (or NaN)
    /// is refused and the prior value retained.
    pub fn set_max_intensity(&mut self, max: f32) {
        if max >= self.min_intensity {
            self.max_intensity = max;
        } else {
            debug!(
                "vibration[{}]: rejected max {} < min {}",
                self.index, max, self.min_intensity
            );
        }
    }

    /// Compute the power level for one tick.
    ///
    /// `intensity` is the externally driven 0–100 level. Values outside
    /// that range are *not* clamped; bounding the input is the stimulus
    /// producer's contract.
    pub fn output(&self, stroke: Stroke, intensity: f32) -> f32 {
        match self.mode {
            ActuatorMode::AlwaysOff => 0.0,
            ActuatorMode::AlwaysOn => self.map_to_range(intensity / 100.0),
            ActuatorMode::ActiveOnUpstroke => {
                if stroke == Stroke::Up {
                    self.map_to_range(intensity / 100.0)
                } else {
                    self.min_intensity
                }
            }
            ActuatorMode::ActiveOnDownstroke => {
                if stroke == Stroke::Down {
                    self.map_to_range(intensity / 100.0)
                } else {
                    self.min_intensity
                }
            }
        }
    }

    /// Linear remap of a normalized `[0, 1]` input into `[min, max]`.
    pub fn map_to_range(&self, input: f32) -> f32 {
        let slope = self.max_intensity - self.min_intensity;
        self.min_intensity + slope * input
    }
}
