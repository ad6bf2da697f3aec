use crate::bridge::dispatcher::Link;
use crate::bridge::store::StateDelta;
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Transport connected; events for the handler go through `link`
    HandlerConnected { link: Link },
    HandlerDisconnected { reason: String },
    /// Connection attempt failed
    HandlerError { error: String },

    /// State delta received from the handler
    StateDelta(StateDelta),

    /// UI update cycle
    Tick,
}
