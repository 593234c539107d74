//! Type-aware interpolation and the buffer-clamp policy.
//!
//! - lerp_f32 / round_4dp (scalar rule, 4-decimal rounding)
//! - lerp_typed (unit strings keep the `from` suffix; colors blend 3-4
//!   channels with alpha defaulting to 1)
//! - sample_segment (buffer policy: clamp within tolerance, hold beyond)

use crate::sampling::Segment;
use crate::value::{fmt_min, OutputValue, TypedValue, Unit};

/// Linear interpolation of scalars. Direction-agnostic: the delta may be
/// negative.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Round to 4 decimal places.
#[inline]
pub fn round_4dp(v: f32) -> f32 {
    (v * 10_000.0).round() / 10_000.0
}

/// Interpolated magnitudes always print with 4 decimals; alpha prints
/// bare when integral (`rgba(127.5000,127.5000,127.5000,1)`).
fn fmt_alpha(a: f32) -> String {
    let rounded = round_4dp(a);
    if rounded == rounded.trunc() {
        fmt_min(rounded)
    } else {
        format!("{rounded:.4}")
    }
}

/// Interpolate between two typed endpoints at `t`.
///
/// Unit strings interpolate the magnitude and reattach the `from` suffix;
/// an empty suffix yields a plain number. Colors interpolate each channel
/// independently. Mismatched kinds (color vs unit string) emit the `from`
/// endpoint unchanged.
pub fn lerp_typed(from: &TypedValue, to: &TypedValue, t: f32) -> OutputValue {
    match (&from.unit, &to.unit) {
        (Unit::Rgb, Unit::Rgb) => {
            let channel = |i: usize| {
                let a = from.magnitude.get(i).copied().unwrap_or(1.0);
                let b = to.magnitude.get(i).copied().unwrap_or(1.0);
                round_4dp(lerp_f32(a, b, t))
            };
            OutputValue::Text(format!(
                "rgba({:.4},{:.4},{:.4},{})",
                channel(0),
                channel(1),
                channel(2),
                fmt_alpha(channel(3))
            ))
        }
        (Unit::Suffix(suffix), Unit::Suffix(_)) => {
            let v = round_4dp(lerp_f32(from.magnitude[0], to.magnitude[0], t));
            if suffix.is_empty() {
                OutputValue::Number(v)
            } else {
                OutputValue::Text(format!("{v:.4}{suffix}"))
            }
        }
        _ => from.to_output(),
    }
}

/// Sample a segment at `local` progress, applying the buffer policy.
///
/// Outside the segment but within `buffer` tolerance the nearest endpoint
/// is emitted unchanged; farther outside, `None` (the caller holds the
/// previously emitted value). Inside the segment the typed value at the
/// interpolation fraction is emitted.
pub fn sample_segment(local: f32, segment: &Segment, buffer: f32) -> Option<OutputValue> {
    if local < segment.start {
        if segment.start - local > buffer {
            return None;
        }
        return Some(segment.from.to_output());
    }
    if local > segment.end {
        if local - segment.end > buffer {
            return None;
        }
        return Some(segment.to.to_output());
    }
    let span = segment.end - segment.start;
    let fraction = if span > 0.0 {
        (local - segment.start) / span
    } else {
        0.0
    };
    Some(lerp_typed(&segment.from, &segment.to, fraction))
}
