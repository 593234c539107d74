//! Segment resolution over a keyframe set.
//!
//! Model:
//! - Keyframe positions live on a 0-100 scale; local progress on 0-1.
//! - The active segment is the pair of adjacent keyframes bracketing the
//!   scaled local progress.
//! - Progress outside the keyframe range still resolves to the first or
//!   last segment, so the buffer policy (interp.rs) decides clamp vs hold
//!   instead of resolution failing.

use crate::data::KeyframeSet;
use crate::error::ScrubError;
use crate::value::TypedValue;

/// The two adjacent keyframes bracketing the current local progress.
/// `start`/`end` are normalized to 0-1 local-progress units.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub start: f32,
    pub end: f32,
    pub from: TypedValue,
    pub to: TypedValue,
}

/// Resolve the active segment for `local` progress.
///
/// Selection over the filtered, ordered keyframe list, comparing on the
/// 0-100 key scale (`local * 100`):
/// - first position >= scaled local at index 0 -> first segment (0, 1);
/// - at index i -> segment (i-1, i);
/// - none (past the last keyframe) -> last segment (len-2, len-1).
pub fn resolve_segment(
    set: &KeyframeSet,
    local: f32,
    channel: Option<&str>,
) -> Result<Segment, ScrubError> {
    let endpoints = set.endpoints(channel);
    let n = endpoints.len();
    if n < 2 {
        return Err(ScrubError::InsufficientKeyframes { available: n });
    }

    let scaled = local * 100.0;
    let (a, b) = match endpoints.iter().position(|(pos, _)| *pos >= scaled) {
        None => (n - 2, n - 1),
        Some(0) => (0, 1),
        Some(i) => (i - 1, i),
    };

    let (start_pos, from) = endpoints[a].clone();
    let (end_pos, to) = endpoints[b].clone();
    Ok(Segment {
        start: start_pos / 100.0,
        end: end_pos / 100.0,
        from,
        to,
    })
}
