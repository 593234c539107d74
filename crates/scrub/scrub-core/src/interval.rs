//! Interval remapping: global progress -> local [0,1].
//!
//! This is the single implementation shared by the engine and the
//! standalone remap surface; both call sites use [`map_interval`].

use serde::{Deserialize, Serialize};

use crate::error::ScrubError;

/// Active interval in global progress units. `start < end` is assumed;
/// the mapper does not reorder.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub start: f32,
    pub end: f32,
}

impl Interval {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }
}

/// Map a global progress value into local [0,1] progress.
///
/// - No interval: pass-through.
/// - Below `start`: saturates to 0. Above `end`: saturates to 1.
/// - Inside: linear `(global - start) / (end - start)`.
/// - Zero-width interval: `ScrubError::InvalidInterval`.
pub fn map_interval(global: f32, interval: Option<&Interval>) -> Result<f32, ScrubError> {
    let Some(iv) = interval else {
        return Ok(global);
    };
    if iv.start == iv.end {
        return Err(ScrubError::InvalidInterval {
            start: iv.start,
            end: iv.end,
        });
    }
    if global < iv.start {
        return Ok(0.0);
    }
    if global > iv.end {
        return Ok(1.0);
    }
    Ok((global - iv.start) / (iv.end - iv.start))
}
