use crate::bridge::event::{handlers, DispatchOptions, Event, Payload, Trigger, PRACTICE_SLICE};
use crate::bridge::form::{Form, FormField, SubmitEvent, SubmitHandler};
use crate::bridge::lifecycle::MountHook;
use crate::bridge::scheduler::{Interest, ReaderId};
use crate::bridge::store::Snapshot;
use crate::bridge::Bridge;
use crate::config::AppConfig;
use serde_json::Value;

pub const ANSWER_FIELD: &str = "answer";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connecting,
    Connected,
    Disconnected,
}

/// Feedback display state. The handler owns the transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
    Warning,
    /// `none`, absent, or anything unrecognized.
    Neutral,
}

impl FeedbackKind {
    pub fn from_value(value: Option<&Value>) -> Self {
        match value.and_then(Value::as_str) {
            Some("success") => FeedbackKind::Success,
            Some("error") => FeedbackKind::Error,
            Some("warning") => FeedbackKind::Warning,
            _ => FeedbackKind::Neutral,
        }
    }
}

/// Read-only projection of the practice slice for the view.
#[derive(Debug, Clone)]
pub struct PracticeView {
    snapshot: Snapshot,
}

impl PracticeView {
    pub fn num1(&self) -> i64 {
        self.snapshot.get_i64("num1").unwrap_or(0)
    }

    pub fn num2(&self) -> i64 {
        self.snapshot.get_i64("num2").unwrap_or(0)
    }

    pub fn feedback_kind(&self) -> FeedbackKind {
        FeedbackKind::from_value(self.snapshot.get("feedback_type"))
    }

    pub fn feedback_message(&self) -> &str {
        self.snapshot.get_str("feedback_message").unwrap_or("")
    }

    pub fn exercise(&self) -> i64 {
        self.snapshot.get_i64("current_exercise_number").unwrap_or(0)
    }

    pub fn score(&self) -> i64 {
        self.snapshot.get_i64("score").unwrap_or(0)
    }

    pub fn game_over(&self) -> bool {
        self.snapshot.get_bool("game_over").unwrap_or(false)
    }
}

#[derive(Debug)]
pub struct AppState {
    pub config: AppConfig,
    pub bridge: Bridge,
    pub form: Form,
    pub submit: SubmitHandler,
    pub mount: MountHook,
    pub status: ConnectionStatus,
    pub dirty: bool,
    pub should_quit: bool,
    readers: Vec<(ReaderId, &'static str)>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let mut bridge = Bridge::new();
        let readers = vec![
            (
                bridge.register_reader(Interest::fields(PRACTICE_SLICE, &["num1", "num2"])),
                "numbers",
            ),
            (
                bridge.register_reader(Interest::fields(
                    PRACTICE_SLICE,
                    &["feedback_type", "feedback_message"],
                )),
                "feedback",
            ),
            (
                bridge.register_reader(Interest::fields(
                    PRACTICE_SLICE,
                    &["current_exercise_number", "score"],
                )),
                "status_bar",
            ),
            (
                bridge.register_reader(Interest::fields(PRACTICE_SLICE, &["game_over", "score"])),
                "screen",
            ),
            (bridge.register_reader(Interest::ConnectErrors), "connection"),
        ];

        let form = Form::new(vec![FormField::new(ANSWER_FIELD)]);
        let submit = SubmitHandler::new(
            handlers::SUBMIT_ANSWER,
            Payload::new(),
            config.ui.reset_on_submit,
        );

        Self {
            config,
            bridge,
            form,
            submit,
            mount: MountHook::new(handlers::START_NEW_PROBLEM),
            status: ConnectionStatus::Connecting,
            dirty: true,
            should_quit: false,
            readers,
        }
    }

    pub fn practice(&self) -> PracticeView {
        PracticeView {
            snapshot: self.bridge.subscribe(PRACTICE_SLICE),
        }
    }

    pub fn answer(&self) -> Option<&FormField> {
        self.form.field(ANSWER_FIELD)
    }

    pub fn submit_answer(&mut self) {
        let mut ev = SubmitEvent::new();
        self.submit.on_submit(&mut ev, &mut self.form, &mut self.bridge);
        tracing::debug!(default_prevented = ev.default_prevented(), "answer submitted");
        self.dirty = true;
    }

    pub fn play_again(&mut self) {
        self.bridge.add_events(
            vec![Event::new(handlers::INITIALIZE_SESSION, Payload::new())],
            Trigger::Click,
            DispatchOptions::new(),
        );
    }

    /// Start a UI cycle. Returns `true` if a frame should be drawn.
    pub fn begin_render_cycle(&mut self) -> bool {
        let due = self.bridge.next_render_cycle();
        if due.is_empty() && !self.dirty {
            return false;
        }
        if !due.is_empty() {
            let names: Vec<&str> = self
                .readers
                .iter()
                .filter(|(id, _)| due.contains(id))
                .map(|(_, name)| *name)
                .collect();
            tracing::trace!(readers = ?names, "render cycle");
        }
        self.dirty = false;
        true
    }

    pub fn status_line(&self) -> String {
        match (self.status, self.bridge.connect_errors().last()) {
            (ConnectionStatus::Connected, _) => "connected".to_string(),
            (ConnectionStatus::Connecting, None) => "connecting...".to_string(),
            (_, Some(err)) => format!(
                "offline ({} error(s), last at {}: {})",
                self.bridge.connect_errors().len(),
                err.at.format("%H:%M:%S"),
                err.reason
            ),
            (ConnectionStatus::Disconnected, None) => "offline".to_string(),
        }
    }
}
