//! Scripted climax decay sequence.
//!
//! Fifteen steps, 400 ms apart, strength decaying linearly from 1.0 down
//! to ≈0.06 (floored at 0, never reaching it within the sequence). The
//! run is independent of the live stimulus stream: once started it
//! always completes all steps, and the final level is left standing
//! rather than reset to zero.

use std::cell::Cell;
use std::rc::Rc;

use embassy_time::Timer;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::app::ports::DeviceTransport;
use crate::error::Result;

/// Number of decay steps.
pub const CLIMAX_STEPS: u32 = 15;
/// Suspension between steps, and the thump pulse width, in milliseconds.
pub const CLIMAX_STEP_MS: u64 = 400;
/// Per-step strength decrement.
const DECAY_PER_STEP: f32 = 0.067;

/// How the decaying strength is delivered to a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClimaxStyle {
    /// Batched vibration command at the step strength. Bypasses the
    /// per-actuator range mapping — the full-scale override is the point.
    #[default]
    Constant,
    /// One fixed-width pulse per step, for devices with a pulse channel.
    Thump,
}

impl ClimaxStyle {
    pub fn label(self) -> &'static str {
        match self {
            Self::Constant => "Constant",
            Self::Thump => "Thump",
        }
    }
}

/// Strength of decay step `i` (zero-indexed).
pub fn strength(step: u32) -> f32 {
    (1.0 - step as f32 * DECAY_PER_STEP).max(0.0)
}

/// One in-flight climax sequence against a single device.
///
/// Created by [`DeviceDriver::on_phase_change`] on the edge into
/// [`GamePhase::Climax`]; the caller drives it concurrently with the
/// tick stream (same shared transport handle, no locking — interleaved
/// writes are last-write-wins at the device).
///
/// The vibration slot layout is snapshotted at construction, so a
/// mid-sequence settings change or disconnect cannot shift which slots
/// the remaining steps address.
///
/// [`DeviceDriver::on_phase_change`]: super::device::DeviceDriver::on_phase_change
/// [`GamePhase::Climax`]: crate::stimulus::GamePhase::Climax
pub struct ClimaxRun<T: DeviceTransport> {
    transport: Rc<T>,
    style: ClimaxStyle,
    /// Vibration slot indices captured at sequence start.
    slots: Vec<u32>,
    span: usize,
    /// Single-flight guard shared with the owning driver; released on
    /// drop so a failed or never-driven run cannot wedge the driver.
    guard: Rc<Cell<bool>>,
}

impl<T: DeviceTransport> Drop for ClimaxRun<T> {
    fn drop(&mut self) {
        self.guard.set(false);
    }
}

impl<T: DeviceTransport> ClimaxRun<T> {
    pub(crate) fn new(
        transport: Rc<T>,
        style: ClimaxStyle,
        slots: Vec<u32>,
        span: usize,
        guard: Rc<Cell<bool>>,
    ) -> Self {
        Self {
            transport,
            style,
            slots,
            span,
            guard,
        }
    }

    /// Drive the full sequence to completion.
    ///
    /// Each step awaits its transport call before the 400 ms suspend, so
    /// a slow transport stretches the pacing rather than piling up
    /// unsent commands. A transport failure aborts the remaining steps;
    /// the single-flight guard releases when the run drops.
    pub async fn run(self) -> Result<()> {
        self.drive().await
    }

    async fn drive(&self) -> Result<()> {
        debug!(
            "{}: climax sequence start ({} steps, {:?})",
            self.transport.name(),
            CLIMAX_STEPS,
            self.style
        );
        for step in 0..CLIMAX_STEPS {
            let level = strength(step);
            match self.style {
                ClimaxStyle::Constant if self.span > 0 => {
                    let mut levels = vec![None; self.span];
                    for &slot in &self.slots {
                        levels[slot as usize] = Some(level);
                    }
                    self.transport.set_vibration_levels(&levels).await?;
                }
                // No vibration slots to drive; keep the pacing anyway.
                ClimaxStyle::Constant => {}
                ClimaxStyle::Thump => {
                    self.transport.pulse(CLIMAX_STEP_MS as u32, level).await?;
                }
            }
            Timer::after_millis(CLIMAX_STEP_MS).await;
        }
        debug!("{}: climax sequence complete", self.transport.name());
        Ok(())
    }
}
