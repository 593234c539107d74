//! Keyframe value types.
//!
//! The shape of a value (plain number, unit string, color, channel bag) is
//! decided once when the value is built or parsed, never re-sniffed during
//! interpolation. A plain number is the degenerate case of a unit string
//! with an empty suffix, so the interpolator has exactly two numeric paths:
//! single-magnitude (scalar/unit) and multi-magnitude (color).

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::error::ScrubError;

/// Unit attached to a parsed typed value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// RGBA color; magnitudes carry 3-4 channels.
    Rgb,
    /// Unit suffix ("px", "%", ...); empty string means a bare number.
    /// Magnitudes carry exactly 1 entry.
    Suffix(String),
}

impl Unit {
    /// True for a bare number (empty suffix).
    #[inline]
    pub fn is_plain(&self) -> bool {
        matches!(self, Unit::Suffix(s) if s.is_empty())
    }
}

/// A parsed typed value: numeric magnitude(s) plus a unit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypedValue {
    pub magnitude: Vec<f32>,
    pub unit: Unit,
}

impl TypedValue {
    /// A bare number, i.e. a unit string with an empty suffix.
    pub fn scalar(v: f32) -> Self {
        Self {
            magnitude: vec![v],
            unit: Unit::Suffix(String::new()),
        }
    }

    /// Parse a typed string: `"12px"`, `"50%"`, `"-3.5"`, `"rgb(0,0,0)"`,
    /// `"rgba(0,0,0,0.5)"`.
    pub fn parse(raw: &str) -> Result<Self, ScrubError> {
        let s = raw.trim();
        if let Some(inner) = strip_color_call(s) {
            return parse_color_args(raw, inner);
        }
        let split = numeric_prefix_len(s);
        if split == 0 {
            return Err(ScrubError::UnparseableTypedValue {
                raw: raw.to_string(),
            });
        }
        let magnitude: f32 =
            s[..split]
                .parse()
                .map_err(|_| ScrubError::UnparseableTypedValue {
                    raw: raw.to_string(),
                })?;
        Ok(Self {
            magnitude: vec![magnitude],
            unit: Unit::Suffix(s[split..].to_string()),
        })
    }

    /// Serialize an endpoint value as-is (no interpolation formatting).
    pub fn to_output(&self) -> OutputValue {
        match &self.unit {
            Unit::Rgb => {
                let a = self.magnitude.get(3).copied().unwrap_or(1.0);
                OutputValue::Text(format!(
                    "rgba({},{},{},{})",
                    fmt_min(self.magnitude[0]),
                    fmt_min(self.magnitude[1]),
                    fmt_min(self.magnitude[2]),
                    fmt_min(a)
                ))
            }
            Unit::Suffix(s) if s.is_empty() => OutputValue::Number(self.magnitude[0]),
            Unit::Suffix(s) => OutputValue::Text(format!("{}{}", fmt_min(self.magnitude[0]), s)),
        }
    }
}

/// Value stored in one channel of a bag keyframe.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum ChannelValue {
    Scalar(f32),
    Typed(TypedValue),
}

impl ChannelValue {
    pub fn to_typed(&self) -> TypedValue {
        match self {
            ChannelValue::Scalar(v) => TypedValue::scalar(*v),
            ChannelValue::Typed(t) => t.clone(),
        }
    }
}

/// Value attached to one keyframe position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum KeyframeValue {
    /// Plain number.
    Scalar(f32),
    /// Parsed unit string or color literal.
    Typed(TypedValue),
    /// Channel name -> value, for keyframe sets shared by several
    /// independently animated channels.
    Bag(HashMap<String, ChannelValue>),
}

impl KeyframeValue {
    /// The value this keyframe contributes for `channel`, if any.
    /// `None` channel selects the direct (non-bag) value; bag keyframes
    /// define nothing without a channel, and plain keyframes define
    /// nothing for a named channel.
    pub fn for_channel(&self, channel: Option<&str>) -> Option<TypedValue> {
        match (channel, self) {
            (None, KeyframeValue::Scalar(v)) => Some(TypedValue::scalar(*v)),
            (None, KeyframeValue::Typed(t)) => Some(t.clone()),
            (Some(name), KeyframeValue::Bag(channels)) => {
                channels.get(name).map(ChannelValue::to_typed)
            }
            _ => None,
        }
    }
}

/// One evaluated output, pushed to the caller's sink.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum OutputValue {
    Number(f32),
    Text(String),
}

impl OutputValue {
    pub fn as_number(&self) -> Option<f32> {
        match self {
            OutputValue::Number(v) => Some(*v),
            OutputValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            OutputValue::Number(_) => None,
            OutputValue::Text(s) => Some(s),
        }
    }
}

/// Length of the leading numeric literal: optional sign, digits, one dot.
fn numeric_prefix_len(s: &str) -> usize {
    let mut seen_dot = false;
    for (i, c) in s.char_indices() {
        let numeric = match c {
            '+' | '-' => i == 0,
            '.' => {
                if seen_dot {
                    false
                } else {
                    seen_dot = true;
                    true
                }
            }
            _ => c.is_ascii_digit(),
        };
        if !numeric {
            return i;
        }
    }
    s.len()
}

/// Strip `rgb(...)` / `rgba(...)` and return the argument list.
fn strip_color_call(s: &str) -> Option<&str> {
    let args = s
        .strip_prefix("rgba(")
        .or_else(|| s.strip_prefix("rgb("))?;
    args.strip_suffix(')')
}

fn parse_color_args(raw: &str, inner: &str) -> Result<TypedValue, ScrubError> {
    let magnitude: Vec<f32> = inner
        .split(',')
        .map(|arg| arg.trim().parse::<f32>())
        .collect::<Result<_, _>>()
        .map_err(|_| ScrubError::UnparseableTypedValue {
            raw: raw.to_string(),
        })?;
    if magnitude.len() < 3 || magnitude.len() > 4 {
        return Err(ScrubError::UnparseableTypedValue {
            raw: raw.to_string(),
        });
    }
    Ok(TypedValue {
        magnitude,
        unit: Unit::Rgb,
    })
}

/// Minimal number formatting: integral values print without a decimal
/// point, everything else with the shortest float form.
pub(crate) fn fmt_min(v: f32) -> String {
    if v == v.trunc() && v.abs() < 1.0e7 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_unit_strings() {
        let v = TypedValue::parse("12px").unwrap();
        assert_eq!(v.magnitude, vec![12.0]);
        assert_eq!(v.unit, Unit::Suffix("px".into()));

        let v = TypedValue::parse("50%").unwrap();
        assert_eq!(v.magnitude, vec![50.0]);
        assert_eq!(v.unit, Unit::Suffix("%".into()));

        let v = TypedValue::parse("-3.5em").unwrap();
        assert_eq!(v.magnitude, vec![-3.5]);
        assert_eq!(v.unit, Unit::Suffix("em".into()));
    }

    #[test]
    fn parse_bare_number_has_empty_suffix() {
        let v = TypedValue::parse("42").unwrap();
        assert_eq!(v.magnitude, vec![42.0]);
        assert!(v.unit.is_plain());
    }

    #[test]
    fn parse_colors() {
        let v = TypedValue::parse("rgb(255, 128, 0)").unwrap();
        assert_eq!(v.magnitude, vec![255.0, 128.0, 0.0]);
        assert_eq!(v.unit, Unit::Rgb);

        let v = TypedValue::parse("rgba(0,0,0,0.5)").unwrap();
        assert_eq!(v.magnitude, vec![0.0, 0.0, 0.0, 0.5]);
        assert_eq!(v.unit, Unit::Rgb);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            TypedValue::parse("px12"),
            Err(ScrubError::UnparseableTypedValue { .. })
        ));
        assert!(matches!(
            TypedValue::parse("rgb(1,2)"),
            Err(ScrubError::UnparseableTypedValue { .. })
        ));
        assert!(matches!(
            TypedValue::parse("rgb(a,b,c)"),
            Err(ScrubError::UnparseableTypedValue { .. })
        ));
        assert!(matches!(
            TypedValue::parse(""),
            Err(ScrubError::UnparseableTypedValue { .. })
        ));
    }

    #[test]
    fn endpoint_output_is_minimal() {
        assert_eq!(
            TypedValue::parse("0px").unwrap().to_output(),
            OutputValue::Text("0px".into())
        );
        assert_eq!(
            TypedValue::parse("rgb(0,0,0)").unwrap().to_output(),
            OutputValue::Text("rgba(0,0,0,1)".into())
        );
        assert_eq!(
            TypedValue::scalar(7.0).to_output(),
            OutputValue::Number(7.0)
        );
    }

    #[test]
    fn channel_selection() {
        let mut channels = HashMap::new();
        channels.insert("opacity".to_string(), ChannelValue::Scalar(0.5));
        let bag = KeyframeValue::Bag(channels);
        assert!(bag.for_channel(Some("opacity")).is_some());
        assert!(bag.for_channel(Some("x")).is_none());
        assert!(bag.for_channel(None).is_none());

        let plain = KeyframeValue::Scalar(1.0);
        assert!(plain.for_channel(None).is_some());
        assert!(plain.for_channel(Some("opacity")).is_none());
    }
}
