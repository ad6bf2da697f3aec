use crate::bridge::event::{DispatchOptions, Event, Payload, Trigger};
use crate::bridge::Bridge;

/// One-shot mount hook.
///
/// Dispatches its event after the first render that happens with a live
/// connection, then never again for this mount. Re-renders caused by state
/// changes only check the flag.
#[derive(Debug)]
pub struct MountHook {
    handler: String,
    has_initialized: bool,
}

impl MountHook {
    pub fn new(handler: impl Into<String>) -> Self {
        Self {
            handler: handler.into(),
            has_initialized: false,
        }
    }

    /// Returns `true` if the mount event was dispatched by this call.
    pub fn after_render(&mut self, bridge: &mut Bridge) -> bool {
        if self.has_initialized || !bridge.is_connected() {
            return false;
        }
        self.has_initialized = true;
        tracing::info!(handler = %self.handler, "mounted");
        bridge.add_events(
            vec![Event::new(self.handler.clone(), Payload::new())],
            Trigger::Mount,
            DispatchOptions::new(),
        );
        true
    }

    /// Cleanup is a no-op.
    pub fn unmount(self) {}
}
