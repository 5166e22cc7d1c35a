//! Port traits — the boundary between the output driver and the outside
//! world.
//!
//! ```text
//!   DeviceDriver / ClimaxRun ──▶ DeviceTransport ──▶ network adapter
//! ```
//!
//! The transport adapter (websocket client, BLE bridge, test mock)
//! implements [`DeviceTransport`]; the driver layer consumes it via
//! generics and never touches the wire directly. Discovery, pairing and
//! protocol framing all live on the adapter's side of this line.

use crate::error::Result;

/// Command sink for one connected device.
///
/// Every method is an asynchronous, result-bearing send: the driver does
/// not await device confirmation beyond the transport call itself, does
/// not retry, and treats a returned error as "this command was lost".
///
/// Methods take `&self`: the handle is shared between the per-tick path
/// and an in-flight climax sequence (deliberately without mutual
/// exclusion — last write wins at the device), so adapters keep any
/// internal state behind their own interior mutability.
#[allow(async_fn_in_trait)] // single-threaded cooperative model, no Send bound wanted
pub trait DeviceTransport {
    /// Human-readable device name, for logs and settings UI.
    fn name(&self) -> &str;

    /// Batched "set all vibration levels" command. `levels[i]` addresses
    /// the motor with capability index `i`; `None` slots mean "no change"
    /// and must not be zeroed by the adapter.
    async fn set_vibration_levels(&self, levels: &[Option<f32>]) -> Result<()>;

    /// Move the linear actuator to `target` (normalized) over
    /// `duration_ms` milliseconds.
    async fn move_to_position(&self, target: f32, duration_ms: u32) -> Result<()>;

    /// Fixed-duration vibration pulse at `strength` (thump-style devices).
    async fn pulse(&self, duration_ms: u32, strength: f32) -> Result<()>;

    /// Unconditional device-level stop: kills vibration and halts any
    /// in-flight movement.
    async fn stop(&self) -> Result<()>;
}
