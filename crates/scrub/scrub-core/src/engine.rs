//! Scrub: the evaluation facade.
//!
//! One evaluation is a pure function of (progress, keyframe set, config):
//! interval remap -> segment resolution -> typed interpolation -> sink.
//! The engine has no clock and no internal scheduling; the caller invokes
//! `evaluate` whenever any input changes.

use crate::config::ScrubConfig;
use crate::data::KeyframeSet;
use crate::error::ScrubError;
use crate::interp::sample_segment;
use crate::interval::map_interval;
use crate::sampling::resolve_segment;
use crate::sink::ProgressSink;
use crate::value::OutputValue;

/// Outcome of one evaluation.
#[derive(Clone, Debug, PartialEq)]
pub enum Sample {
    /// A value was computed and pushed to the sink.
    Emitted(OutputValue),
    /// Progress was farther outside the active segment than the buffer
    /// tolerance; the sink keeps its previous value.
    Held,
}

/// A keyframe set paired with its evaluation options.
#[derive(Clone, Debug, PartialEq)]
pub struct Scrub {
    set: KeyframeSet,
    config: ScrubConfig,
}

impl Scrub {
    pub fn new(set: KeyframeSet, config: ScrubConfig) -> Self {
        Self { set, config }
    }

    pub fn keyframes(&self) -> &KeyframeSet {
        &self.set
    }

    pub fn config(&self) -> &ScrubConfig {
        &self.config
    }

    /// The first usable keyframe's value, for seeding a sink before the
    /// first evaluation. A single usable keyframe is enough here (it is a
    /// valid constant), unlike `evaluate` which needs a segment.
    pub fn initial(&self) -> Result<OutputValue, ScrubError> {
        self.set
            .endpoints(self.config.channel.as_deref())
            .first()
            .map(|(_, v)| v.to_output())
            .ok_or(ScrubError::InsufficientKeyframes { available: 0 })
    }

    /// Evaluate at a global progress value, writing at most one output to
    /// `sink`. Errors surface before anything is emitted; a [`Sample::Held`]
    /// outcome is designed buffer behavior, not an error.
    pub fn evaluate(
        &self,
        progress: f32,
        sink: &mut dyn ProgressSink,
    ) -> Result<Sample, ScrubError> {
        let local = map_interval(progress, self.config.interval.as_ref())?;
        let segment = resolve_segment(&self.set, local, self.config.channel.as_deref())?;
        match sample_segment(local, &segment, self.config.buffer) {
            Some(value) => {
                sink.set(value.clone());
                Ok(Sample::Emitted(value))
            }
            None => Ok(Sample::Held),
        }
    }
}
