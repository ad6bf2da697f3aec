//! Coalescing re-render scheduler.
//!
//! View readers register what they read. Invalidations only mark readers
//! pending; the host drains them once per UI cycle with [`RenderScheduler::next_cycle`].

use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReaderId(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interest {
    /// Specific fields of one slice.
    Fields { slice: String, fields: Vec<String> },
    /// The bridge's connect-error list.
    ConnectErrors,
}

impl Interest {
    pub fn fields(slice: &str, fields: &[&str]) -> Self {
        Interest::Fields {
            slice: slice.to_string(),
            fields: fields.iter().map(|f| f.to_string()).collect(),
        }
    }
}

#[derive(Debug, Default)]
pub struct RenderScheduler {
    readers: Vec<Interest>,
    pending: BTreeSet<ReaderId>,
}

impl RenderScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a reader. New readers start pending so they get a first render.
    pub fn register(&mut self, interest: Interest) -> ReaderId {
        let id = ReaderId(self.readers.len());
        self.readers.push(interest);
        self.pending.insert(id);
        id
    }

    pub fn invalidate_fields(&mut self, slice_name: &str, changed: &[String]) {
        for (idx, interest) in self.readers.iter().enumerate() {
            if let Interest::Fields { slice, fields } = interest {
                if slice == slice_name && fields.iter().any(|f| changed.contains(f)) {
                    self.pending.insert(ReaderId(idx));
                }
            }
        }
    }

    pub fn invalidate_connect_errors(&mut self) {
        for (idx, interest) in self.readers.iter().enumerate() {
            if *interest == Interest::ConnectErrors {
                self.pending.insert(ReaderId(idx));
            }
        }
    }

    /// Drain the readers due for this cycle, each at most once.
    pub fn next_cycle(&mut self) -> Vec<ReaderId> {
        std::mem::take(&mut self.pending).into_iter().collect()
    }
}
