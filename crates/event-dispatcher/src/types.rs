//! Core data types shared by listeners and the dispatcher
//!
//! Actions receive the event parameters as a positional list of JSON values and
//! return an [`ActionResult`]. The result is tagged: [`ActionResult::Failed`] is the
//! explicit failure sentinel that keeps a listener from stopping propagation.
//!
//! # Examples
//!
//! ```
//! use event_dispatcher::{action, ActionResult};
//! use serde_json::json;
//!
//! let shout = action(|params| match params.first().and_then(|v| v.as_str()) {
//!     Some(text) => ActionResult::Done(json!(text.to_uppercase())),
//!     None => ActionResult::Failed,
//! });
//!
//! assert_eq!(shout(&[json!("hey")]), ActionResult::Done(json!("HEY")));
//! assert!(shout(&[]).is_failure());
//! ```

use std::{fmt, sync::Arc};

use serde_json::Value;

/// Outcome of an event action
#[derive(Debug, Clone, PartialEq)]
pub enum ActionResult {
    /// The action ran and produced a payload
    Done(Value),

    /// The action reported failure; never treated as propagation-stopping
    Failed,
}

impl ActionResult {
    /// Whether this is the explicit failure sentinel
    pub fn is_failure(&self) -> bool {
        matches!(self, ActionResult::Failed)
    }

    /// Payload of a successful action
    pub fn value(&self) -> Option<&Value> {
        match self {
            ActionResult::Done(value) => Some(value),
            ActionResult::Failed => None,
        }
    }
}

impl From<Value> for ActionResult {
    fn from(value: Value) -> Self {
        ActionResult::Done(value)
    }
}

impl fmt::Display for ActionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionResult::Done(value) => write!(f, "{}", value),
            ActionResult::Failed => f.write_str("false"),
        }
    }
}

/// Callable invoked when a listener fires an event
pub type Action = Arc<dyn Fn(&[Value]) -> ActionResult + Send + Sync>;

/// Side effect run whenever a listener reports that propagation must stop
pub type Stopper = Arc<dyn Fn() + Send + Sync>;

/// Turns an event name, its parameters and the action result into a log line
pub type LogFormatter = Arc<dyn Fn(&str, &[Value], &ActionResult) -> String + Send + Sync>;

/// Wrap a closure as an [`Action`]
pub fn action<F>(f: F) -> Action
where
    F: Fn(&[Value]) -> ActionResult + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Wrap a closure as a [`Stopper`]
pub fn stopper<F>(f: F) -> Stopper
where
    F: Fn() + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Wrap a closure as a [`LogFormatter`]
pub fn log_formatter<F>(f: F) -> LogFormatter
where
    F: Fn(&str, &[Value], &ActionResult) -> String + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Something a listener may be asked to invoke
///
/// A concrete function is always invocable. A name refers to a handler installed on
/// the listener and is only invocable if such a handler exists; registering an
/// unresolvable name fails with [`crate::DispatchError::InvalidAction`].
///
/// `F` is [`Action`] for event actions and [`Stopper`] for stop callbacks.
#[derive(Clone)]
pub enum Callable<F = Action> {
    /// A concrete function
    Func(F),

    /// The name of a handler installed on the listener (e.g. `"onUppercase"`)
    Named(String),
}

impl<F> fmt::Debug for Callable<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Callable::Func(_) => f.write_str("Func(..)"),
            Callable::Named(name) => f.debug_tuple("Named").field(name).finish(),
        }
    }
}

impl From<Action> for Callable<Action> {
    fn from(action: Action) -> Self {
        Callable::Func(action)
    }
}

impl From<Stopper> for Callable<Stopper> {
    fn from(stopper: Stopper) -> Self {
        Callable::Func(stopper)
    }
}

impl<F> From<&str> for Callable<F> {
    fn from(name: &str) -> Self {
        Callable::Named(name.to_string())
    }
}

impl<F> From<String> for Callable<F> {
    fn from(name: String) -> Self {
        Callable::Named(name)
    }
}
