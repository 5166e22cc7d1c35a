//! Per-device output driver.
//!
//! Owns the actuator registry for one connected device and a shared
//! transport handle. Each tick it computes every actuator's output and
//! batches same-kind outputs into one device command:
//!
//! ```text
//!               ┌───────────────────────────────┐
//!  tick ───────▶│ vibration → sparse buffer ────┼──▶ set_vibration_levels
//!  (stroke,     │ position  → last command ─────┼──▶ move_to_position
//!   intensity,  │ other     → trace log only    │
//!   pace)       └───────────────────────────────┘
//! ```
//!
//! Phase edges are handled separately: entering Pause/Break silences all
//! vibration immediately; entering Climax hands back a [`ClimaxRun`]
//! which the caller drives concurrently with further ticks.

use std::cell::Cell;
use std::rc::Rc;

use log::{debug, trace, warn};

use crate::actuators::{ActuatorCapability, ActuatorRegistry, PositionCommand};
use crate::app::ports::DeviceTransport;
use crate::error::Result;
use crate::stimulus::{GamePhase, Stroke};

use super::climax::{ClimaxRun, ClimaxStyle};

/// Driver for one connected device.
///
/// Created on connect from the capability report; dropped on disconnect.
/// The transport handle is shared (`Rc`) so an in-flight climax sequence
/// survives independently of the tick path.
pub struct DeviceDriver<T: DeviceTransport> {
    transport: Rc<T>,
    registry: ActuatorRegistry,
    phase: GamePhase,
    /// Reused batched vibration buffer; `None` slots mean "no change".
    vib_buffer: Vec<Option<f32>>,
    /// Single-flight guard for the climax sequence, shared with the run.
    climax_active: Rc<Cell<bool>>,
}

impl<T: DeviceTransport> DeviceDriver<T> {
    /// Build the driver from the connect-time capability report.
    pub fn new(transport: Rc<T>, report: &[ActuatorCapability]) -> Self {
        let registry = ActuatorRegistry::from_capabilities(report);
        Self {
            transport,
            registry,
            phase: GamePhase::Active,
            vib_buffer: Vec::new(),
            climax_active: Rc::new(Cell::new(false)),
        }
    }

    pub fn name(&self) -> &str {
        self.transport.name()
    }

    /// Actuator list, for the settings UI read side.
    pub fn registry(&self) -> &ActuatorRegistry {
        &self.registry
    }

    /// Actuator list, for the settings UI write side (mode/range setters).
    pub fn registry_mut(&mut self) -> &mut ActuatorRegistry {
        &mut self.registry
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Whether a climax sequence is currently in flight.
    pub fn climax_in_flight(&self) -> bool {
        self.climax_active.get()
    }

    /// Drive one stimulus update.
    ///
    /// Issues at most one batched vibration command and at most one
    /// position command. With several position actuators configured the
    /// last computed output wins — the design assumes one meaningful
    /// rail per device. Transport failures propagate unretried.
    pub async fn tick(&mut self, stroke: Stroke, intensity: f32, pace: f32) -> Result<()> {
        trace!(
            "{}: tick {:?} intensity={intensity} pace={pace}",
            self.transport.name(),
            stroke
        );

        // Vibration: sparse buffer sized to the highest slot index.
        // Untouched slots stay `None` so a sparse report never silently
        // zeroes motors it does not own.
        let span = self.registry.vibration_span();
        self.vib_buffer.clear();
        self.vib_buffer.resize(span, None);
        let mut any_vibration = false;
        for motor in self.registry.vibration() {
            self.vib_buffer[motor.index() as usize] = Some(motor.output(stroke, intensity));
            any_vibration = true;
        }
        if any_vibration {
            self.transport.set_vibration_levels(&self.vib_buffer).await?;
        }

        // Position: last computed command wins, one send per tick.
        let mut pending: Option<PositionCommand> = None;
        for rail in self.registry.position() {
            if let Some(cmd) = rail.output(stroke, pace) {
                pending = Some(cmd);
            }
        }
        if let Some(cmd) = pending {
            self.transport.move_to_position(cmd.target, cmd.travel_ms).await?;
        }

        for (kind, index) in self.registry.other() {
            trace!(
                "{}: {:?}[{index}] has no output function, skipped",
                self.transport.name(),
                kind
            );
        }
        Ok(())
    }

    /// React to a phase edge. No-op when the phase is unchanged.
    ///
    /// Entering Pause or Break silences all vibration immediately,
    /// independent of the current stimulus. Entering Climax returns a
    /// [`ClimaxRun`] for the caller to drive; a second Climax edge while
    /// one is in flight is refused (single-flight) and returns `None`.
    pub async fn on_phase_change(
        &mut self,
        new_phase: GamePhase,
        style: ClimaxStyle,
    ) -> Result<Option<ClimaxRun<T>>> {
        if self.phase == new_phase {
            return Ok(None);
        }
        let old = self.phase;
        self.phase = new_phase;
        debug!(
            "{}: phase {old:?} -> {new_phase:?}",
            self.transport.name()
        );

        if new_phase.silences_output() {
            self.silence().await?;
            return Ok(None);
        }

        if new_phase == GamePhase::Climax {
            if self.climax_active.get() {
                warn!(
                    "{}: climax already in flight, ignoring re-trigger",
                    self.transport.name()
                );
                return Ok(None);
            }
            self.climax_active.set(true);
            let slots: Vec<u32> = self.registry.vibration().map(|m| m.index()).collect();
            return Ok(Some(ClimaxRun::new(
                Rc::clone(&self.transport),
                style,
                slots,
                self.registry.vibration_span(),
                Rc::clone(&self.climax_active),
            )));
        }
        Ok(None)
    }

    /// Command every vibration slot to zero, leaving position untouched.
    pub async fn silence(&mut self) -> Result<()> {
        let span = self.registry.vibration_span();
        if span == 0 {
            return Ok(());
        }
        self.vib_buffer.clear();
        self.vib_buffer.resize(span, None);
        for motor in self.registry.vibration() {
            self.vib_buffer[motor.index() as usize] = Some(0.0);
        }
        self.transport.set_vibration_levels(&self.vib_buffer).await
    }

    /// Device-level stop: kills vibration and halts in-flight movement.
    /// Does not touch an in-flight climax sequence's timers.
    pub async fn stop(&self) -> Result<()> {
        self.transport.stop().await
    }
}
