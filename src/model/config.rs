//! Session-wide limits and output configuration.

use serde::{Deserialize, Serialize};

/// Default per-routine angle limits, in degrees.
pub const DEFAULT_UPPER_LIMIT: i32 = 179;
pub const DEFAULT_LOWER_LIMIT: i32 = 0;

/// Smallest allowed gap between the lower and upper angle limit.
pub const MIN_LIMIT_GAP: i32 = 5;

/// Default delay between expanded playback values, in milliseconds.
pub const DEFAULT_SAMPLE_INTERVAL_MS: u32 = 15;

/// Session-wide ceilings and fill values.
///
/// `max_total_seconds` models the downstream controller's memory budget:
/// `(routine length in seconds) x (servo count)` may never exceed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionLimits {
    /// Ceiling on routine seconds times servo count.
    pub max_total_seconds: u32,
    /// Ceiling on the number of servos.
    pub max_servos: u32,
    /// Largest angle any upper limit may take, in degrees.
    pub max_angle: i32,
    /// Angle used for fresh keyframes and tail backfill.
    pub default_angle: i32,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self {
            max_total_seconds: 360,
            max_servos: 8,
            max_angle: 180,
            default_angle: 90,
        }
    }
}

/// How the exported sketch drives its servos.
///
/// Only selects which firmware template the export payload is handed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputMode {
    /// PCA9685 I2C servo driver board.
    #[default]
    #[serde(rename = "i2c")]
    I2cBased,
    /// Direct GPIO pin control.
    #[serde(rename = "pins")]
    PinBased,
}
