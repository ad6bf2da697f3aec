//! Event-dispatch and state-subscription bridge between view code and the
//! remote state handler.
//!
//! [`Bridge`] owns the dispatcher, the state cache and the render scheduler.
//! It lives in the main event loop; the transport task only talks to it
//! through channels.

pub mod dispatcher;
pub mod error;
pub mod event;
pub mod form;
pub mod lifecycle;
pub mod scheduler;
pub mod store;
pub mod transport;

use dispatcher::{Dispatcher, Link};
use error::ConnectError;
use event::{DispatchOptions, Event, Trigger};
use scheduler::{Interest, ReaderId, RenderScheduler};
use store::{Snapshot, StateDelta, StateStore};

#[derive(Debug, Default)]
pub struct Bridge {
    dispatcher: Dispatcher,
    store: StateStore,
    scheduler: RenderScheduler,
}

impl Bridge {
    pub fn new() -> Self {
        Self {
            dispatcher: Dispatcher::new(),
            store: StateStore::new(),
            scheduler: RenderScheduler::new(),
        }
    }

    pub fn add_events(&mut self, events: Vec<Event>, trigger: Trigger, options: DispatchOptions) {
        if !self.dispatcher.add_events(events, trigger, options) {
            self.scheduler.invalidate_connect_errors();
        }
    }

    pub fn attach(&mut self, link: Link) {
        let had_errors = !self.dispatcher.connect_errors().is_empty();
        self.dispatcher.attach(link);
        if had_errors {
            self.scheduler.invalidate_connect_errors();
        }
    }

    pub fn detach(&mut self, reason: impl Into<String>) {
        self.dispatcher.detach();
        self.record_connect_error(reason);
    }

    pub fn record_connect_error(&mut self, reason: impl Into<String>) {
        self.dispatcher.record_connect_error(reason);
        self.scheduler.invalidate_connect_errors();
    }

    pub fn is_connected(&self) -> bool {
        self.dispatcher.is_connected()
    }

    pub fn connect_errors(&self) -> &[ConnectError] {
        self.dispatcher.connect_errors()
    }

    pub fn apply_delta(&mut self, delta: StateDelta) {
        let slice = delta.slice_name.clone();
        let changed = self.store.apply(delta);
        if changed.is_empty() {
            return;
        }
        tracing::debug!(
            slice = %slice,
            version = self.store.subscribe(&slice).version(),
            ?changed,
            "delta applied"
        );
        self.scheduler.invalidate_fields(&slice, &changed);
    }

    pub fn subscribe(&self, slice: &str) -> Snapshot {
        self.store.subscribe(slice)
    }

    pub fn register_reader(&mut self, interest: Interest) -> ReaderId {
        self.scheduler.register(interest)
    }

    pub fn next_render_cycle(&mut self) -> Vec<ReaderId> {
        self.scheduler.next_cycle()
    }
}
