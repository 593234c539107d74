//! Scrub core (host-framework agnostic)
//!
//! Maps a continuous scalar progress value (scroll position, playhead
//! time, normalized state) onto interpolated output values defined by
//! sparse keyframes on a 0-100 position scale. Numeric, unit-suffixed and
//! RGBA color values interpolate linearly within the active segment; a
//! buffer tolerance clamps near-boundary noise instead of extrapolating;
//! an optional interval remaps global progress into a local 0-1 range.
//!
//! The engine is a pure function of its inputs, invoked by the caller on
//! every change; its only side effect is one `set` on the caller-owned
//! sink per emitting evaluation.

pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod interp;
pub mod interval;
pub mod sampling;
pub mod sink;
pub mod stored;
pub mod value;

// Re-exports for consumers
pub use config::{ScrubConfig, DEFAULT_BUFFER};
pub use data::{Keyframe, KeyframeSet};
pub use engine::{Sample, Scrub};
pub use error::ScrubError;
pub use interval::{map_interval, Interval};
pub use sampling::{resolve_segment, Segment};
pub use sink::{MotionValue, ProgressSink};
pub use stored::{parse_keyframes_json, parse_scrub_json};
pub use value::{ChannelValue, KeyframeValue, OutputValue, TypedValue, Unit};
