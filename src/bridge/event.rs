use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Flat string-keyed mapping used for event payloads, metadata and dispatch options.
pub type Payload = Map<String, Value>;

/// Per-call dispatch options. Carried with the batch, never sent on the wire.
pub type DispatchOptions = Payload;

/// Slice path of the practice state on the handler side.
pub const PRACTICE_SLICE: &str = "state.sum_practice_state";

/// Handler method names, namespaced under [`PRACTICE_SLICE`].
pub mod handlers {
    pub const SUBMIT_ANSWER: &str = "state.sum_practice_state.handle_submit";
    pub const START_NEW_PROBLEM: &str = "state.sum_practice_state.start_new_problem";
    pub const INITIALIZE_SESSION: &str = "state.sum_practice_state.initialize_session";
}

/// A named request to the remote handler.
///
/// Fields are private: once built an event is never mutated, and the
/// dispatcher takes it by value so it is consumed exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    name: String,
    #[serde(default)]
    payload: Payload,
    #[serde(default)]
    metadata: Payload,
}

impl Event {
    pub fn new(name: impl Into<String>, payload: Payload) -> Self {
        Self {
            name: name.into(),
            payload,
            metadata: Payload::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }
}

/// The interaction that produced a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Mount,
    Submit,
    Click,
}
