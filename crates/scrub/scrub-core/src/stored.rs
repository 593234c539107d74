//! Parse stored scrub JSON into canonical core types.
//!
//! Two accepted shapes, matching how callers ship keyframe data:
//! - a bare keyframe map: `{"0": 25, "50": "10px", "100": {"opacity": 1}}`
//!   (keys are positions on the 0-100 scale);
//! - a params object: `{"keyframes": {...}, "buffer": 0.1,
//!   "type": "opacity", "interval": [0.2, 0.8]}`.
//!
//! Raw untagged shapes are converted once into tagged [`KeyframeValue`]s;
//! nothing downstream re-inspects strings.

use hashbrown::HashMap;
use serde::Deserialize;

use crate::config::{ScrubConfig, DEFAULT_BUFFER};
use crate::data::{Keyframe, KeyframeSet};
use crate::engine::Scrub;
use crate::error::ScrubError;
use crate::interval::Interval;
use crate::value::{ChannelValue, KeyframeValue, TypedValue};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawChannel {
    Number(f64),
    Text(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawKeyframe {
    Number(f64),
    Text(String),
    Channels(HashMap<String, RawChannel>),
}

#[derive(Debug, Deserialize)]
struct RawParams {
    keyframes: HashMap<String, RawKeyframe>,
    #[serde(default)]
    buffer: Option<f32>,
    #[serde(default, rename = "type")]
    channel: Option<String>,
    #[serde(default)]
    interval: Option<[f32; 2]>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawScrub {
    Params(RawParams),
    Bare(HashMap<String, RawKeyframe>),
}

/// Parse a bare keyframe map.
pub fn parse_keyframes_json(s: &str) -> Result<KeyframeSet, ScrubError> {
    let raw: HashMap<String, RawKeyframe> =
        serde_json::from_str(s).map_err(|e| ScrubError::JsonParse(e.to_string()))?;
    keyframes_from_raw(raw)
}

/// Parse either accepted shape into a ready-to-evaluate [`Scrub`].
/// Omitted options take their defaults (`buffer` 0.05, no channel, no
/// interval), as a bare map always does.
pub fn parse_scrub_json(s: &str) -> Result<Scrub, ScrubError> {
    let raw: RawScrub = serde_json::from_str(s).map_err(|e| ScrubError::JsonParse(e.to_string()))?;
    let (keyframes, config) = match raw {
        RawScrub::Params(p) => {
            let config = ScrubConfig {
                buffer: p.buffer.unwrap_or(DEFAULT_BUFFER),
                channel: p.channel,
                interval: p.interval.map(|[start, end]| Interval::new(start, end)),
            };
            (keyframes_from_raw(p.keyframes)?, config)
        }
        RawScrub::Bare(map) => (keyframes_from_raw(map)?, ScrubConfig::default()),
    };
    Ok(Scrub::new(keyframes, config))
}

fn keyframes_from_raw(raw: HashMap<String, RawKeyframe>) -> Result<KeyframeSet, ScrubError> {
    let mut keys = Vec::with_capacity(raw.len());
    for (pos, value) in raw {
        let position: f32 = pos
            .trim()
            .parse()
            .map_err(|_| ScrubError::JsonParse(format!("invalid keyframe position {pos:?}")))?;
        keys.push(Keyframe {
            position,
            value: to_core_value(value)?,
        });
    }
    Ok(KeyframeSet::new(keys))
}

fn to_core_value(raw: RawKeyframe) -> Result<KeyframeValue, ScrubError> {
    Ok(match raw {
        RawKeyframe::Number(n) => KeyframeValue::Scalar(n as f32),
        RawKeyframe::Text(s) => KeyframeValue::Typed(TypedValue::parse(&s)?),
        RawKeyframe::Channels(map) => {
            let mut channels = HashMap::with_capacity(map.len());
            for (name, value) in map {
                let value = match value {
                    RawChannel::Number(n) => ChannelValue::Scalar(n as f32),
                    RawChannel::Text(s) => ChannelValue::Typed(TypedValue::parse(&s)?),
                };
                channels.insert(name, value);
            }
            KeyframeValue::Bag(channels)
        }
    })
}
