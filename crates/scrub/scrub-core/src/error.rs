//! Error types for scrub evaluation.

use serde::{Deserialize, Serialize};

/// Failures detectable synchronously before any output is emitted.
/// A buffer "hold" (progress too far outside the active segment) is a
/// designed outcome, not an error; see [`crate::engine::Sample`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ScrubError {
    /// Zero-width interval: local remapping would divide by zero.
    #[error("invalid interval: start {start} equals end {end}")]
    InvalidInterval { start: f32, end: f32 },

    /// Fewer than two usable keyframes remain after channel filtering.
    #[error("insufficient keyframes: {available} usable, need at least 2")]
    InsufficientKeyframes { available: usize },

    /// A string value matches neither `<number><unit>` nor rgb/rgba.
    #[error("unparseable typed value: {raw:?}")]
    UnparseableTypedValue { raw: String },

    /// Keyframe JSON did not match any accepted shape.
    #[error("keyframes json parse error: {0}")]
    JsonParse(String),
}
