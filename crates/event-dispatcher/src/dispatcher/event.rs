//! Event binding and triggering implementation

use std::{any::Any, collections::HashMap, fmt, mem, sync::Arc};

use serde_json::Value;
use tracing::debug;

use super::{
    set::{self, address, unique_listeners, IntoListeners},
    EventDispatcher,
};
use crate::{error::Result, listener::ListenerRef};

/// Default implementation of EventDispatcher
///
/// Single-threaded and synchronous: `trigger` calls each listener on the current
/// stack. It borrows the dispatcher immutably and works on a snapshot of the
/// listener list, so a listener may trigger further events on the same dispatcher
/// through a shared handle. Nothing guards against unbounded recursion.
#[derive(Default, Clone)]
pub struct Dispatcher {
    all_events: Vec<ListenerRef>,
    events: HashMap<String, Vec<ListenerRef>>,
}

impl Dispatcher {
    /// Create an empty dispatcher
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `candidate` is something the dispatcher can bind
    pub fn accept(candidate: &dyn Any) -> bool {
        set::accept(candidate)
    }

    /// Listeners fired for `event`: all-events listeners first, then the event's own
    pub fn get_listeners_for(&self, event: &str) -> Vec<ListenerRef> {
        let own = self.events.get(event).map(Vec::as_slice).unwrap_or_default();
        unique_listeners(self.all_events.iter().chain(own).cloned())
    }

    /// Listeners bound to every event, in registration order
    pub fn all_event_listeners(&self) -> &[ListenerRef] {
        &self.all_events
    }

    /// Listeners bound to `event` specifically, in registration order
    pub fn event_listeners(&self, event: &str) -> &[ListenerRef] {
        self.events.get(event).map(Vec::as_slice).unwrap_or_default()
    }

    /// Event names that have been bound at least once
    ///
    /// A name stays listed after its last listener is unbound.
    pub fn event_names(&self) -> impl Iterator<Item = &str> {
        self.events.keys().map(String::as_str)
    }
}

impl EventDispatcher for Dispatcher {
    fn trigger(&self, event: &str, params: &[Value]) -> Result<&Self> {
        let listeners = self.get_listeners_for(event);
        debug!(
            event = %event,
            listener_count = listeners.len(),
            "Triggering event"
        );

        for (position, listener) in listeners.iter().enumerate() {
            let result = listener.fire(event, params)?;
            if !result.is_failure() && listener.stop_propagation() {
                debug!(
                    event = %event,
                    position = position,
                    skipped = listeners.len() - position - 1,
                    "Propagation stopped"
                );
                return Ok(self);
            }
        }

        Ok(self)
    }

    fn bind_all<L: IntoListeners>(&mut self, listeners: L) -> &mut Self {
        let listeners = listeners.into_listeners();
        debug!(count = listeners.len(), "Binding listeners to all events");

        let existing = mem::take(&mut self.all_events);
        self.all_events = unique_listeners(existing.into_iter().chain(listeners));
        self
    }

    fn bind<L, I, S>(&mut self, listeners: L, events: I) -> &mut Self
    where
        L: IntoListeners,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let listeners = listeners.into_listeners();

        for event in events {
            let event = event.as_ref();
            debug!(event = %event, count = listeners.len(), "Binding listeners");

            let bound = self.events.entry(event.to_string()).or_default();
            let existing = mem::take(bound);
            *bound = unique_listeners(existing.into_iter().chain(listeners.iter().cloned()));
        }
        self
    }

    fn unbind_all<L: IntoListeners>(&mut self, listeners: L) -> &mut Self {
        let listeners = listeners.into_listeners();
        debug!(count = listeners.len(), "Unbinding listeners from all events");

        self.all_events
            .retain(|bound| !listeners.iter().any(|l| set::same_listener(l, bound)));

        let events: Vec<String> = self.events.keys().cloned().collect();
        self.unbind(listeners, events);
        self
    }

    fn unbind<L, I, S>(&mut self, listeners: L, events: I)
    where
        L: IntoListeners,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let listeners = listeners.into_listeners();

        for event in events {
            let event = event.as_ref();
            let Some(bound) = self.events.get_mut(event) else {
                continue;
            };
            debug!(event = %event, count = listeners.len(), "Unbinding listeners");

            let remaining = mem::take(bound)
                .into_iter()
                .filter(|b| !listeners.iter().any(|l| set::same_listener(l, b)));
            *bound = unique_listeners(remaining);
        }
    }

    fn contains<T: ?Sized>(&self, listener: &Arc<T>) -> bool {
        let wanted = address(listener);
        let matches = |bound: &ListenerRef| address(bound) == wanted;

        self.all_events.iter().any(matches)
            || self.events.values().any(|bound| bound.iter().any(matches))
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let events: HashMap<&str, usize> = self
            .events
            .iter()
            .map(|(name, bound)| (name.as_str(), bound.len()))
            .collect();
        f.debug_struct("Dispatcher")
            .field("all_events", &self.all_events.len())
            .field("events", &events)
            .finish()
    }
}
