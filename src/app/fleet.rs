//! Fleet fan-out — the application-facing facade.
//!
//! ```text
//!                ┌──────────────────────────────┐
//!  game loop ───▶│ DeviceFleet                   │──▶ DeviceDriver #0
//!  (tick/phase)  │  tick · on_phase_change ·     │──▶ DeviceDriver #1
//!                │  stop_all                     │──▶ …
//!                └──────────────────────────────┘
//! ```
//!
//! Every operation is applied identically to every connected driver. A
//! failing device never starves its siblings: the fan-out continues and
//! the first error is reported to the caller afterwards.

use std::rc::Rc;

use log::warn;

use crate::actuators::ActuatorCapability;
use crate::config::FleetConfig;
use crate::drivers::climax::ClimaxRun;
use crate::drivers::device::DeviceDriver;
use crate::error::{Result, TransportError};
use crate::stimulus::{GamePhase, Stroke};

use super::ports::DeviceTransport;

/// All currently connected device drivers.
pub struct DeviceFleet<T: DeviceTransport> {
    drivers: Vec<DeviceDriver<T>>,
    config: FleetConfig,
}

impl<T: DeviceTransport> DeviceFleet<T> {
    pub fn new(config: FleetConfig) -> Self {
        Self {
            drivers: Vec::new(),
            config,
        }
    }

    /// Attach a newly connected device, building its driver from the
    /// capability report.
    pub fn attach(&mut self, transport: Rc<T>, report: &[ActuatorCapability]) {
        self.drivers.push(DeviceDriver::new(transport, report));
    }

    /// Drop the driver for a disconnected device, by name.
    pub fn detach(&mut self, name: &str) {
        self.drivers.retain(|d| d.name() != name);
    }

    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }

    pub fn devices(&self) -> impl Iterator<Item = &DeviceDriver<T>> {
        self.drivers.iter()
    }

    /// Mutable driver access for the settings UI (mode/range setters).
    pub fn devices_mut(&mut self) -> impl Iterator<Item = &mut DeviceDriver<T>> {
        self.drivers.iter_mut()
    }

    pub fn config(&self) -> &FleetConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut FleetConfig {
        &mut self.config
    }

    /// Fan one stimulus update out to every device.
    pub async fn tick(&mut self, stroke: Stroke, intensity: f32, pace: f32) -> Result<()> {
        let mut first_err: Option<TransportError> = None;
        for driver in &mut self.drivers {
            if let Err(e) = driver.tick(stroke, intensity, pace).await {
                warn!("{}: tick failed: {e}", driver.name());
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Fan a phase edge out to every device. Climax edges yield one
    /// [`ClimaxRun`] per device; the caller drives them concurrently
    /// with further ticks (they share the device handles, unlocked).
    pub async fn on_phase_change(&mut self, new_phase: GamePhase) -> Result<Vec<ClimaxRun<T>>> {
        let style = self.config.climax_style;
        let mut runs = Vec::new();
        let mut first_err: Option<TransportError> = None;
        for driver in &mut self.drivers {
            match driver.on_phase_change(new_phase, style).await {
                Ok(Some(run)) => runs.push(run),
                Ok(None) => {}
                Err(e) => {
                    warn!("{}: phase change failed: {e}", driver.name());
                    first_err.get_or_insert(e);
                }
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(runs),
        }
    }

    /// Unconditional device-level stop on every device. Distinct from
    /// silencing: this also halts in-flight position movement. In-flight
    /// climax timers are unaffected.
    pub async fn stop_all(&self) -> Result<()> {
        let mut first_err: Option<TransportError> = None;
        for driver in &self.drivers {
            if let Err(e) = driver.stop().await {
                warn!("{}: stop failed: {e}", driver.name());
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
