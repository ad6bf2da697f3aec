use crate::bridge::error::ConnectError;
use crate::bridge::event::{DispatchOptions, Event, Trigger};
use tokio::sync::mpsc;

/// The events of one `add_events` call, sent in order.
#[derive(Debug)]
pub struct Batch {
    pub events: Vec<Event>,
    pub trigger: Trigger,
    pub options: DispatchOptions,
}

pub type Link = mpsc::UnboundedSender<Batch>;

/// Oldest connect errors are dropped past this many.
pub const MAX_CONNECT_ERRORS: usize = 50;

/// FIFO event queue feeding the transport send loop.
///
/// Dispatch never fails from the caller's point of view. When no link is
/// attached the failure is recorded in the connect-error list instead.
#[derive(Debug, Default)]
pub struct Dispatcher {
    link: Option<Link>,
    connect_errors: Vec<ConnectError>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a live transport link. Clears the connect-error list.
    pub fn attach(&mut self, link: Link) {
        self.link = Some(link);
        self.connect_errors.clear();
    }

    pub fn detach(&mut self) {
        self.link = None;
    }

    pub fn is_connected(&self) -> bool {
        self.link.as_ref().is_some_and(|link| !link.is_closed())
    }

    pub fn connect_errors(&self) -> &[ConnectError] {
        &self.connect_errors
    }

    pub fn record_connect_error(&mut self, reason: impl Into<String>) {
        let error = ConnectError::new(reason);
        tracing::warn!(reason = %error.reason, "connect error");
        if self.connect_errors.len() >= MAX_CONNECT_ERRORS {
            let excess = self.connect_errors.len() + 1 - MAX_CONNECT_ERRORS;
            self.connect_errors.drain(..excess);
        }
        self.connect_errors.push(error);
    }

    /// Enqueue `events` for transmission. Returns `false` when nothing was
    /// enqueued and a connect error was recorded instead.
    pub fn add_events(
        &mut self,
        events: Vec<Event>,
        trigger: Trigger,
        options: DispatchOptions,
    ) -> bool {
        if events.is_empty() {
            return true;
        }

        let Some(link) = self.link.as_ref() else {
            self.record_connect_error(format!(
                "not connected: dropped {} event(s) from {:?}",
                events.len(),
                trigger
            ));
            return false;
        };

        let count = events.len();
        let batch = Batch {
            events,
            trigger,
            options,
        };
        if link.send(batch).is_err() {
            self.link = None;
            self.record_connect_error(format!(
                "transport closed: dropped {} event(s) from {:?}",
                count, trigger
            ));
            return false;
        }

        tracing::debug!(count, ?trigger, "events enqueued");
        true
    }
}
