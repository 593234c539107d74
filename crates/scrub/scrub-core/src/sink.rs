//! Output sink contract.
//!
//! The engine's only observable side effect is one `set` per emitting
//! evaluation. The sink is caller-owned for its entire lifetime; holding
//! the previous value across a buffered-out evaluation is simply "no set
//! happened".

use serde::{Deserialize, Serialize};

use crate::value::OutputValue;

/// Receiver for computed output values.
pub trait ProgressSink {
    fn set(&mut self, value: OutputValue);
}

/// Default caller-owned sink: a mutable cell holding the latest emission.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MotionValue {
    current: Option<OutputValue>,
}

impl MotionValue {
    /// Seeded sink, typically with [`crate::engine::Scrub::initial`].
    pub fn new(initial: OutputValue) -> Self {
        Self {
            current: Some(initial),
        }
    }

    /// Unseeded sink; `get` returns `None` until the first emission.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<&OutputValue> {
        self.current.as_ref()
    }
}

impl ProgressSink for MotionValue {
    fn set(&mut self, value: OutputValue) {
        self.current = Some(value);
    }
}
