//! Listeners: the capability the dispatcher drives, plus a reference implementation
//!
//! Anything that can fire a named event and say whether propagation should stop is
//! a [`Listener`]. [`EventListener`] is the batteries-included implementation that
//! resolves actions by event name, keeps a log of every fire and supports a
//! propagation-stop callback.

pub mod event;
pub mod naming;

use std::sync::Arc;

pub use event::{EventListener, EventListenerBuilder};
pub use naming::default_action_name;
use serde_json::Value;

use crate::{error::Result, types::ActionResult};

/// Capability required by the dispatcher
///
/// Listeners are compared by identity: two handles to the same allocation are the
/// same listener, however equal their state might look.
pub trait Listener: Send + Sync {
    /// Execute the action bound to `event` with `params`
    fn fire(&self, event: &str, params: &[Value]) -> Result<ActionResult>;

    /// Whether the dispatcher should skip the listeners that come after this one
    fn stop_propagation(&self) -> bool;
}

/// Shared handle to a listener
pub type ListenerRef = Arc<dyn Listener>;

/// Default log line for a fired event
///
/// - `Event '<event>' called with parameters '<json>', return '<json>'` for a
///   successful action
/// - `Error : no action found for event '<event>' with parameters '<json>'` for
///   [`ActionResult::Failed`], the same text [`DispatchError::NoActionFound`] carries
///
/// [`DispatchError::NoActionFound`]: crate::DispatchError::NoActionFound
pub fn format_event_log(event: &str, params: &[Value], result: &ActionResult) -> String {
    match result {
        ActionResult::Done(value) => format!(
            "Event '{}' called with parameters '{}', return '{}'",
            event,
            render_params(params),
            value
        ),
        ActionResult::Failed => format!(
            "Error : no action found for event '{}' with parameters '{}'",
            event,
            render_params(params)
        ),
    }
}

/// JSON rendering of event parameters used in log lines and error messages
pub fn render_params(params: &[Value]) -> String {
    Value::Array(params.to_vec()).to_string()
}
