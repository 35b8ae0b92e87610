//! Event dispatcher for binding listeners and triggering events

pub mod event;
pub mod set;

use std::sync::Arc;

pub use event::Dispatcher;
use serde_json::Value;
pub use set::{accept, same_listener, unique_listeners, IntoListeners};

use crate::error::Result;

/// Trait for routing named events to ordered listeners
///
/// A dispatcher keeps two collections: listeners bound to every event, and
/// listeners bound to specific event names. Both are ordered by first
/// registration and never hold the same listener twice.
///
/// Triggering an event:
/// 1. Collects the all-events listeners followed by the event's own listeners,
///    without repeats
/// 2. Fires each listener in that order with the event parameters
/// 3. Stops early when a listener's result is not [`crate::ActionResult::Failed`]
///    and the listener reports that propagation must stop
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use event_dispatcher::{action, ActionResult, Dispatcher, EventDispatcher, EventListener};
/// use serde_json::json;
///
/// let listener = Arc::new(EventListener::new());
/// listener
///     .set_event_action("file_saved", action(|_| ActionResult::Done(json!(true))))
///     .unwrap();
///
/// let mut dispatcher = Dispatcher::new();
/// dispatcher.bind(&listener, ["file_saved"]);
/// dispatcher.trigger("file_saved", &[json!("/tmp/a.txt")]).unwrap();
///
/// assert_eq!(listener.get_logs().len(), 1);
/// assert!(dispatcher.contains(&listener));
/// ```
pub trait EventDispatcher {
    /// Fire `event` on every applicable listener, in order
    ///
    /// # Errors
    ///
    /// Propagates the first listener error. Listeners that already ran keep their
    /// side effects.
    fn trigger(&self, event: &str, params: &[Value]) -> Result<&Self>;

    /// Bind listeners to every event
    fn bind_all<L: IntoListeners>(&mut self, listeners: L) -> &mut Self;

    /// Bind listeners to each of `events`
    fn bind<L, I, S>(&mut self, listeners: L, events: I) -> &mut Self
    where
        L: IntoListeners,
        I: IntoIterator<Item = S>,
        S: AsRef<str>;

    /// Detach listeners from every event, whichever way they were bound
    fn unbind_all<L: IntoListeners>(&mut self, listeners: L) -> &mut Self;

    /// Detach listeners from the given events only
    fn unbind<L, I, S>(&mut self, listeners: L, events: I)
    where
        L: IntoListeners,
        I: IntoIterator<Item = S>,
        S: AsRef<str>;

    /// Whether the listener is bound to anything
    fn contains<T: ?Sized>(&self, listener: &Arc<T>) -> bool;
}
