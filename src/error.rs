//! Error types for match construction and configuration loading.

use thiserror::Error;

/// Errors the simulation core can report.
///
/// Only construction and settings loading return these to callers. Inside a
/// tick, `DegenerateDirection` and `OutOfBoundsSpawn` are neutralized (shot
/// dropped, spawn clamped) and only logged.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("cannot aim: origin and target coincide")]
    DegenerateDirection,

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("spawn position ({x}, {y}) places the body outside the arena")]
    OutOfBoundsSpawn { x: f32, y: f32 },

    #[error("settings parse error: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("settings io error: {0}")]
    Io(#[from] std::io::Error),
}
