//! Inbound stimulus types.
//!
//! The game loop feeds the driver two streams:
//!
//! ```text
//! ┌────────────┐  (stroke, intensity, pace)  ┌──────────────┐
//! │ Game loop  │────────────────────────────▶│ DeviceFleet   │
//! │ (external) │────────────────────────────▶│ .tick / phase │
//! └────────────┘        GamePhase            └──────────────┘
//! ```
//!
//! Both are consumed, never produced, by this crate.

use serde::{Deserialize, Serialize};

/// Instantaneous phase of the repeating drive cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stroke {
    Up,
    Down,
}

/// Coarse game phase, compared edge-triggered against the previous value.
///
/// Only three transitions matter to the output driver: into [`Pause`] or
/// [`Break`] (silence vibration) and into [`Climax`] (start the decay
/// sequence). Everything else passes through untouched.
///
/// [`Pause`]: GamePhase::Pause
/// [`Break`]: GamePhase::Break
/// [`Climax`]: GamePhase::Climax
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    /// Normal play — the stimulus stream drives output.
    Active,
    /// Player-requested pause.
    Pause,
    /// Scheduled break between rounds.
    Break,
    /// End-of-session climax.
    Climax,
}

impl GamePhase {
    /// Phases that silence all vibration on entry.
    pub fn silences_output(self) -> bool {
        matches!(self, Self::Pause | Self::Break)
    }
}
