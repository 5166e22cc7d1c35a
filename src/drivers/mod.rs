//! Per-device command batching and sequencing.

pub mod climax;
pub mod device;
