//! Form fields and the submit handler.
//!
//! Submission suppresses the default action, collects named field values,
//! merges a static extra payload, dispatches one event and optionally resets
//! the form. Validation of the submitted value belongs to the handler.

use crate::bridge::event::{DispatchOptions, Event, Payload, Trigger};
use crate::bridge::Bridge;
use serde_json::Value;

/// Numeric input: digits with at most one leading minus sign.
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub value: String,
    pub cursor: usize,
    initial: String,
}

impl FormField {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: String::new(),
            cursor: 0,
            initial: String::new(),
        }
    }

    fn accepts(&self, c: char) -> bool {
        // Nothing may go in front of the sign
        if self.cursor == 0 && self.value.starts_with('-') {
            return false;
        }
        c.is_ascii_digit() || (c == '-' && self.cursor == 0)
    }

    /// Insert `c` at the cursor. Returns `false` if the field rejects it.
    pub fn insert_char(&mut self, c: char) -> bool {
        if !self.accepts(c) {
            return false;
        }
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        true
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.value[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.value.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.value.len() {
            let next = self.value[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.value.len());
            self.value.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.value[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = self.value[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.value.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn reset(&mut self) {
        self.value = self.initial.clone();
        self.cursor = self.value.len();
    }
}

#[derive(Debug, Clone, Default)]
pub struct Form {
    fields: Vec<FormField>,
}

impl Form {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields }
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Named field values as a flat string map.
    pub fn entries(&self) -> Payload {
        self.fields
            .iter()
            .map(|f| (f.name.clone(), Value::String(f.value.clone())))
            .collect()
    }

    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.reset();
        }
    }
}

/// The native submit event, reduced to what the handler touches.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[derive(Debug, Clone)]
pub struct SubmitHandler {
    handler: String,
    extra_payload: Payload,
    reset_on_submit: bool,
}

impl SubmitHandler {
    pub fn new(handler: impl Into<String>, extra_payload: Payload, reset_on_submit: bool) -> Self {
        Self {
            handler: handler.into(),
            extra_payload,
            reset_on_submit,
        }
    }

    /// Extra keys override form keys with the same name.
    fn form_data(&self, form: &Form) -> Payload {
        let mut data = form.entries();
        for (key, value) in &self.extra_payload {
            data.insert(key.clone(), value.clone());
        }
        data
    }

    pub fn on_submit(&self, ev: &mut SubmitEvent, form: &mut Form, bridge: &mut Bridge) {
        ev.prevent_default();

        let mut payload = Payload::new();
        payload.insert("form_data".into(), Value::Object(self.form_data(form)));
        let event = Event::new(self.handler.clone(), payload);
        bridge.add_events(vec![event], Trigger::Submit, DispatchOptions::new());

        if self.reset_on_submit {
            form.reset();
        }
    }
}
