//! Error types for the event dispatcher
//!
//! Registration and resolution failures surface immediately to the caller of the
//! operation that raised them; nothing in this crate catches and retries them.
//!
//! # Examples
//!
//! ```
//! use event_dispatcher::{DispatchError, EventListener, Listener};
//!
//! let listener = EventListener::new();
//! match listener.fire("unmapped", &[]) {
//!     Err(DispatchError::NoActionFound { event, .. }) => assert_eq!(event, "unmapped"),
//!     other => panic!("unexpected outcome: {:?}", other.map(|_| ())),
//! }
//! ```

use serde_json::Value;
use thiserror::Error;

use crate::listener::render_params;

/// Errors that can occur while registering or firing event actions
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A value that cannot be invoked was registered as an action or stop callback
    ///
    /// The string names the event (for actions) or the unresolved handler name
    /// (for stop callbacks).
    #[error("Invalid action: {0}")]
    InvalidAction(String),

    /// An event resolved to neither a registered action nor a default handler
    ///
    /// The message embeds the event name and the parameters that were passed, so
    /// unmapped events can be diagnosed from the error alone.
    #[error(
        "Error : no action found for event '{event}' with parameters '{}'",
        render_params(.params)
    )]
    NoActionFound {
        /// Event that could not be resolved
        event: String,
        /// Parameters passed along with the event
        params: Vec<Value>,
    },

    /// Binding configuration is structurally invalid
    #[error("Invalid binding configuration: {0}")]
    InvalidConfiguration(String),

    /// IO error while reading a configuration file
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML error while parsing a configuration file
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_yaml::Error),
}

impl DispatchError {
    pub(crate) fn no_action_found(event: &str, params: &[Value]) -> Self {
        DispatchError::NoActionFound {
            event: event.to_string(),
            params: params.to_vec(),
        }
    }
}

/// Result type for dispatcher operations
pub type Result<T> = std::result::Result<T, DispatchError>;
