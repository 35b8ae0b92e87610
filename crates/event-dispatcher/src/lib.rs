//! Event Dispatcher
//!
//! Observer-pattern event dispatching: listeners register interest in named events
//! (or in every event), and a dispatcher fires the matching listeners in
//! registration order, stopping early when a listener asks it to.
//!
//! # Architecture
//!
//! 1. **Listener** (`listener`): the [`Listener`] capability and the
//!    [`EventListener`] reference implementation (action lookup, default handlers
//!    by naming convention, logging, stop callback)
//! 2. **Dispatcher** (`dispatcher`): ordered, duplicate-free listener sets for
//!    "all events" and per event name; bind, unbind and trigger
//! 3. **Configuration** (`config`): declarative bindings loaded from YAML
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//!
//! use event_dispatcher::{
//!     action, ActionResult, Dispatcher, EventDispatcher, EventListener,
//! };
//! use serde_json::json;
//!
//! // A listener that reacts to "file saved" through its default handler
//! let formatter = Arc::new(
//!     EventListener::builder()
//!         .handler("onFileSaved", action(|params| ActionResult::Done(params[0].clone())))
//!         .build(),
//! );
//!
//! // A listener that observes everything and halts propagation after itself
//! let guard = Arc::new(EventListener::builder().prevent_propagation(true).build());
//! guard.set_event_action("file saved", action(|_| ActionResult::Done(json!("blocked"))))?;
//!
//! let mut dispatcher = Dispatcher::new();
//! dispatcher.bind(&formatter, ["file saved"]).bind_all(&guard);
//!
//! // All-events listeners run first, so the guard stops the formatter
//! dispatcher.trigger("file saved", &[json!("/tmp/notes.txt")])?;
//! assert_eq!(guard.get_logs().len(), 1);
//! assert!(formatter.get_logs().is_empty());
//! # Ok::<(), event_dispatcher::DispatchError>(())
//! ```
//!
//! # Propagation
//!
//! After each listener fires, the dispatcher stops if the listener's result is not
//! [`ActionResult::Failed`] **and** [`Listener::stop_propagation`] returns `true`. A
//! listener whose action fails never stops propagation, whatever its flag says.
//!
//! # Identity
//!
//! Listeners are compared by identity, never by value. Binding the same handle
//! twice has no effect; two listeners with identical state are distinct.
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`], an alias for
//! `std::result::Result<T, DispatchError>`. Values that are not listeners are
//! dropped silently by the binding operations rather than reported.
//!
//! # Threading
//!
//! Dispatch is synchronous and single-threaded: `trigger` calls each listener on
//! the caller's stack. Listeners are `Send + Sync` so they can be shared, but no
//! ordering guarantees are made for concurrent mutation.

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod listener;
pub mod types;

// Re-export public types
pub use config::{BindingConfig, ConfigLoader, ConfigValidator, ListenerConfig};
pub use dispatcher::{
    accept, same_listener, unique_listeners, Dispatcher, EventDispatcher, IntoListeners,
};
pub use error::{DispatchError, Result};
pub use listener::{
    default_action_name, format_event_log, render_params, EventListener, EventListenerBuilder,
    Listener, ListenerRef,
};
pub use types::{action, log_formatter, stopper, Action, ActionResult, Callable, LogFormatter, Stopper};
