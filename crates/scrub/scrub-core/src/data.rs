//! Keyframe data model.

use serde::{Deserialize, Serialize};

use crate::value::{KeyframeValue, TypedValue};

/// One declared anchor: position on the 0-100 progress scale plus a value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub position: f32,
    pub value: KeyframeValue,
}

/// Ordered keyframes, ascending by position. Positions are treated as
/// unique; construction sorts caller data.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyframeSet {
    keys: Vec<Keyframe>,
}

impl KeyframeSet {
    pub fn new(mut keys: Vec<Keyframe>) -> Self {
        keys.sort_by(|a, b| a.position.total_cmp(&b.position));
        Self { keys }
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (f32, KeyframeValue)>) -> Self {
        Self::new(
            pairs
                .into_iter()
                .map(|(position, value)| Keyframe { position, value })
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Keyframe> {
        self.keys.iter()
    }

    /// Keyframes usable for `channel`, as (position, endpoint value) pairs
    /// in ascending position order. Entries that do not define the channel
    /// are dropped (see [`KeyframeValue::for_channel`]).
    pub fn endpoints(&self, channel: Option<&str>) -> Vec<(f32, TypedValue)> {
        self.keys
            .iter()
            .filter_map(|k| k.value.for_channel(channel).map(|v| (k.position, v)))
            .collect()
    }
}
