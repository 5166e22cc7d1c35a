//! Per-device actuator registry.
//!
//! Built exactly once from the device's capability report when it
//! connects, then immutable in membership for the device's lifetime —
//! only the mode/range fields of individual actuators mutate afterwards
//! (via the settings accessors).

use log::info;

use super::position::PositionActuator;
use super::vibration::VibrationActuator;

// ---------------------------------------------------------------------------
// Capability report
// ---------------------------------------------------------------------------

/// The output channel classes a device can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorKind {
    Vibration,
    Position,
    /// Oscillating channel — acknowledged, never actuated.
    Oscillate,
    /// Rotating channel — acknowledged, never actuated.
    Rotate,
}

impl ActuatorKind {
    /// Whether the current output logic can drive this kind.
    pub fn is_supported(self) -> bool {
        matches!(self, Self::Vibration | Self::Position)
    }
}

/// One slot of a device's capability report.
///
/// `index` is assigned by the device and is stable for its connected
/// lifetime; it may be sparse, so it is carried verbatim and never
/// re-derived from list position.
#[derive(Debug, Clone, Copy)]
pub struct ActuatorCapability {
    pub kind: ActuatorKind,
    pub index: u32,
    /// Number of discrete power steps the channel supports.
    pub step_count: u32,
}

// ---------------------------------------------------------------------------
// Actuator variants
// ---------------------------------------------------------------------------

/// Closed set of actuator variants, dispatched by exhaustive matching in
/// the output path.
#[derive(Debug, Clone)]
pub enum Actuator {
    Vibration(VibrationActuator),
    Position(PositionActuator),
    /// Unsupported channel kept for diagnostics; produces no commands.
    Other { kind: ActuatorKind, index: u32 },
}

impl Actuator {
    pub fn kind(&self) -> ActuatorKind {
        match self {
            Self::Vibration(_) => ActuatorKind::Vibration,
            Self::Position(_) => ActuatorKind::Position,
            Self::Other { kind, .. } => *kind,
        }
    }

    pub fn index(&self) -> u32 {
        match self {
            Self::Vibration(v) => v.index(),
            Self::Position(p) => p.index(),
            Self::Other { index, .. } => *index,
        }
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// All actuators of one device, in capability-report order.
#[derive(Debug, Clone, Default)]
pub struct ActuatorRegistry {
    actuators: Vec<Actuator>,
}

impl ActuatorRegistry {
    /// Build the registry from the connect-time capability report.
    pub fn from_capabilities(report: &[ActuatorCapability]) -> Self {
        let actuators = report
            .iter()
            .map(|cap| match cap.kind {
                ActuatorKind::Vibration => {
                    Actuator::Vibration(VibrationActuator::new(cap.index, cap.step_count))
                }
                ActuatorKind::Position => Actuator::Position(PositionActuator::new(cap.index)),
                kind => Actuator::Other {
                    kind,
                    index: cap.index,
                },
            })
            .collect::<Vec<_>>();
        info!(
            "registry built: {} actuator(s), vibration span {}",
            actuators.len(),
            vibration_span(&actuators)
        );
        Self { actuators }
    }

    pub fn len(&self) -> usize {
        self.actuators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actuators.is_empty()
    }

    /// All actuators in report order.
    pub fn iter(&self) -> impl Iterator<Item = &Actuator> {
        self.actuators.iter()
    }

    pub fn vibration(&self) -> impl Iterator<Item = &VibrationActuator> {
        self.actuators.iter().filter_map(|a| match a {
            Actuator::Vibration(v) => Some(v),
            _ => None,
        })
    }

    pub fn vibration_mut(&mut self) -> impl Iterator<Item = &mut VibrationActuator> {
        self.actuators.iter_mut().filter_map(|a| match a {
            Actuator::Vibration(v) => Some(v),
            _ => None,
        })
    }

    pub fn position(&self) -> impl Iterator<Item = &PositionActuator> {
        self.actuators.iter().filter_map(|a| match a {
            Actuator::Position(p) => Some(p),
            _ => None,
        })
    }

    pub fn position_mut(&mut self) -> impl Iterator<Item = &mut PositionActuator> {
        self.actuators.iter_mut().filter_map(|a| match a {
            Actuator::Position(p) => Some(p),
            _ => None,
        })
    }

    pub fn other(&self) -> impl Iterator<Item = (ActuatorKind, u32)> + '_ {
        self.actuators.iter().filter_map(|a| match a {
            Actuator::Other { kind, index } => Some((*kind, *index)),
            _ => None,
        })
    }

    /// Size of the batched vibration command buffer: highest vibration
    /// slot index plus one. Sparse reports leave `None` holes in the
    /// buffer, they never shrink it.
    pub fn vibration_span(&self) -> usize {
        vibration_span(&self.actuators)
    }
}

fn vibration_span(actuators: &[Actuator]) -> usize {
    actuators
        .iter()
        .filter_map(|a| match a {
            Actuator::Vibration(v) => Some(v.index() as usize + 1),
            _ => None,
        })
        .max()
        .unwrap_or(0)
}
