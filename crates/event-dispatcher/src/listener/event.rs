//! Reference listener implementation

use std::{
    collections::HashMap,
    fmt,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use parking_lot::{Mutex, RwLock};
use serde_json::Value;
use tracing::{debug, trace};
use uuid::Uuid;

use super::{default_action_name, format_event_log, Listener};
use crate::{
    error::{DispatchError, Result},
    types::{ActionResult, Action, Callable, LogFormatter, Stopper},
};

/// Listener that maps event names to actions
///
/// An event fires the action registered with [`EventListener::set_event_action`], or,
/// when none is registered, the handler named after the event (see
/// [`default_action_name`]). Handlers are installed once through
/// [`EventListener::builder`], which is how a specialised listener adds event
/// handling purely by naming convention.
///
/// Every successful fire appends one line to the listener's log. The stop flag is
/// plain data: setting it makes [`Listener::stop_propagation`] return `true` and run
/// the stop callback, if any, each time it is queried.
///
/// All methods take `&self`, so a listener can be shared with a dispatcher and
/// reconfigured while bound.
///
/// # Examples
///
/// ```
/// use event_dispatcher::{action, ActionResult, EventListener, Listener};
/// use serde_json::json;
///
/// let listener = EventListener::builder()
///     .handler("onUcFirst", action(|params| {
///         let word = params[0].as_str().unwrap_or_default();
///         let mut chars = word.chars();
///         let first = chars.next().map(|c| c.to_uppercase().collect::<String>());
///         ActionResult::Done(json!(format!("{}{}", first.unwrap_or_default(), chars.as_str())))
///     }))
///     .build();
///
/// let result = listener.fire("uc first", &[json!("a word")]).unwrap();
/// assert_eq!(result, ActionResult::Done(json!("A word")));
/// assert_eq!(listener.get_logs().len(), 1);
/// ```
pub struct EventListener {
    id: Uuid,
    stop: AtomicBool,
    stopper: RwLock<Option<Stopper>>,
    logs: Mutex<Vec<String>>,
    actions: RwLock<HashMap<String, Action>>,
    handlers: HashMap<String, Action>,
    logger: RwLock<LogFormatter>,
}

impl EventListener {
    /// Create a listener with no handlers, propagation allowed and the default logger
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Start building a listener
    pub fn builder() -> EventListenerBuilder {
        EventListenerBuilder::default()
    }

    /// Opaque per-instance identifier
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Set whether propagation must stop after this listener fires
    pub fn prevent_propagation(&self, prevent: bool) -> &Self {
        self.stop.store(prevent, Ordering::SeqCst);
        self
    }

    /// Register the action to run for `event`, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::InvalidAction`] if `action` names a handler this
    /// listener does not have.
    pub fn set_event_action(&self, event: &str, action: impl Into<Callable>) -> Result<&Self> {
        let action = match action.into() {
            Callable::Func(func) => func,
            Callable::Named(name) => self.handler(&name).ok_or_else(|| {
                DispatchError::InvalidAction(format!("'{}' action must be callable.", event))
            })?,
        };

        self.actions.write().insert(event.to_string(), action);
        Ok(self)
    }

    /// Action for `event`: the registered one, else the default handler
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::NoActionFound`] if neither exists.
    pub fn get_event_action(&self, event: &str, params: &[Value]) -> Result<Action> {
        if let Some(action) = self.actions.read().get(event) {
            return Ok(action.clone());
        }
        self.get_default_action(event, params)
    }

    /// Handler named after `event` by convention
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::NoActionFound`] carrying `event` and `params` if no
    /// handler of that name is installed.
    pub fn get_default_action(&self, event: &str, params: &[Value]) -> Result<Action> {
        let name = default_action_name(event);
        self.handler(&name).ok_or_else(|| {
            trace!(event = %event, handler = %name, "No default handler");
            DispatchError::no_action_found(event, params)
        })
    }

    /// Replace the log formatter; `None` restores [`format_event_log`]
    pub fn set_logger(&self, logger: Option<LogFormatter>) -> &Self {
        *self.logger.write() = logger.unwrap_or_else(default_logger);
        self
    }

    /// Log lines accumulated so far, oldest first
    pub fn get_logs(&self) -> Vec<String> {
        self.logs.lock().clone()
    }

    /// Set the side effect run whenever propagation is reported as stopped
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::InvalidAction`] if `how` names a handler this
    /// listener does not have.
    pub fn set_how_to_stop_propagation(&self, how: impl Into<Callable<Stopper>>) -> Result<&Self> {
        let stopper: Stopper = match how.into() {
            Callable::Func(func) => func,
            Callable::Named(name) => {
                let handler = self.handler(&name).ok_or_else(|| {
                    DispatchError::InvalidAction(format!("'{}' not callable", name))
                })?;
                Arc::new(move || {
                    handler(&[]);
                })
            }
        };

        *self.stopper.write() = Some(stopper);
        Ok(self)
    }

    /// Whether a handler with this name is installed, ignoring ASCII case
    pub fn has_handler(&self, name: &str) -> bool {
        self.handler(name).is_some()
    }

    /// Handler names match exactly first, then ignoring ASCII case
    fn handler(&self, name: &str) -> Option<Action> {
        if let Some(handler) = self.handlers.get(name) {
            return Some(handler.clone());
        }
        self.handlers
            .iter()
            .find(|(installed, _)| installed.eq_ignore_ascii_case(name))
            .map(|(_, handler)| handler.clone())
    }
}

impl Listener for EventListener {
    fn fire(&self, event: &str, params: &[Value]) -> Result<ActionResult> {
        let action = self.get_event_action(event, params)?;
        let result = action(params);

        let logger = self.logger.read().clone();
        let line = logger(event, params, &result);
        self.logs.lock().push(line);

        debug!(listener = %self.id, event = %event, failed = result.is_failure(), "Event fired");

        self.stop_propagation();
        Ok(result)
    }

    fn stop_propagation(&self) -> bool {
        let stop = self.stop.load(Ordering::SeqCst);
        if stop {
            let stopper = self.stopper.read().clone();
            if let Some(stopper) = stopper {
                stopper();
            }
        }
        stop
    }
}

impl Default for EventListener {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl fmt::Debug for EventListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventListener")
            .field("id", &self.id)
            .field("stop", &self.stop.load(Ordering::SeqCst))
            .field("actions", &self.actions.read().keys().collect::<Vec<_>>())
            .field("handlers", &self.handlers.keys().collect::<Vec<_>>())
            .field("logs", &self.logs.lock().len())
            .finish()
    }
}

fn default_logger() -> LogFormatter {
    Arc::new(format_event_log)
}

/// Builder for [`EventListener`]
#[derive(Default)]
pub struct EventListenerBuilder {
    prevent_propagation: bool,
    logger: Option<LogFormatter>,
    handlers: HashMap<String, Action>,
}

impl EventListenerBuilder {
    /// Stop propagation after this listener fires
    pub fn prevent_propagation(mut self, prevent: bool) -> Self {
        self.prevent_propagation = prevent;
        self
    }

    /// Use `logger` instead of [`format_event_log`]
    pub fn logger(mut self, logger: LogFormatter) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Install a handler; `on*` names act as default actions for matching events
    pub fn handler(mut self, name: impl Into<String>, handler: Action) -> Self {
        self.handlers.insert(name.into(), handler);
        self
    }

    /// Create the listener with a fresh identifier and no registered actions
    pub fn build(self) -> EventListener {
        EventListener {
            id: Uuid::new_v4(),
            stop: AtomicBool::new(self.prevent_propagation),
            stopper: RwLock::new(None),
            logs: Mutex::new(Vec::new()),
            actions: RwLock::new(HashMap::new()),
            handlers: self.handlers,
            logger: RwLock::new(self.logger.unwrap_or_else(default_logger)),
        }
    }
}
