//! Per-scrub configuration.

use serde::{Deserialize, Serialize};

use crate::interval::Interval;

/// Buffer tolerance applied when no explicit value is configured.
pub const DEFAULT_BUFFER: f32 = 0.05;

/// Recognized evaluation options.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScrubConfig {
    /// Tolerance outside a segment's bounds within which the boundary
    /// value is still emitted instead of holding.
    #[serde(default = "default_buffer")]
    pub buffer: f32,

    /// Selects one channel of bag keyframes; `None` uses direct values.
    #[serde(default)]
    pub channel: Option<String>,

    /// Remaps global progress into local [0,1] scoped to this interval.
    #[serde(default)]
    pub interval: Option<Interval>,
}

fn default_buffer() -> f32 {
    DEFAULT_BUFFER
}

impl Default for ScrubConfig {
    fn default() -> Self {
        Self {
            buffer: DEFAULT_BUFFER,
            channel: None,
            interval: None,
        }
    }
}
