//! Declarative listener bindings
//!
//! A [`BindingConfig`] names listeners and says which events they observe. It is
//! usually read from YAML with [`ConfigLoader`]:
//!
//! ```yaml
//! listeners:
//!   audit: {}
//!   guard:
//!     prevent_propagation: true
//! all_events:
//!   - audit
//! events:
//!   file_saved:
//!     - guard
//! ```
//!
//! Listener actions are code, so the configuration only carries construction
//! options; the application installs handlers on the built listeners before (or
//! after) applying the bindings to a dispatcher.

pub mod loader;
pub mod validator;

use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
};

pub use loader::ConfigLoader;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
pub use validator::ConfigValidator;

use crate::{
    dispatcher::{Dispatcher, EventDispatcher, IntoListeners},
    error::Result,
    listener::{EventListener, EventListenerBuilder, ListenerRef},
};

/// Construction options for an [`EventListener`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Stop propagation after the listener fires
    pub prevent_propagation: bool,
}

impl ListenerConfig {
    /// Builder preloaded with these options, for adding handlers
    pub fn builder(&self) -> EventListenerBuilder {
        EventListener::builder().prevent_propagation(self.prevent_propagation)
    }

    /// Listener with these options and no handlers
    pub fn build(&self) -> EventListener {
        self.builder().build()
    }
}

/// Which named listeners observe which events
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BindingConfig {
    /// Listener declarations by name
    pub listeners: BTreeMap<String, ListenerConfig>,

    /// Names of listeners bound to every event
    pub all_events: Vec<String>,

    /// Names of listeners bound to each event
    pub events: BTreeMap<String, Vec<String>>,
}

impl BindingConfig {
    /// Check the configuration with [`ConfigValidator`]
    pub fn validate(&self) -> Result<()> {
        ConfigValidator::validate(self)
    }

    /// Build one listener per declaration
    pub fn build_listeners(&self) -> HashMap<String, Arc<EventListener>> {
        self.listeners
            .iter()
            .map(|(name, config)| (name.clone(), Arc::new(config.build())))
            .collect()
    }

    /// Bind the listeners of `registry` as configured
    ///
    /// Names missing from `registry` are skipped with a warning, the same way the
    /// dispatcher ignores values that are not listeners.
    pub fn apply<'d, V>(
        &self,
        dispatcher: &'d mut Dispatcher,
        registry: &HashMap<String, V>,
    ) -> &'d mut Dispatcher
    where
        V: IntoListeners + Clone,
    {
        let all_events = resolve(&self.all_events, registry, "*");
        dispatcher.bind_all(all_events);

        for (event, names) in &self.events {
            let listeners = resolve(names, registry, event);
            debug!(event = %event, count = listeners.len(), "Applying configured bindings");
            dispatcher.bind(listeners, [event]);
        }

        dispatcher
    }
}

fn resolve<V>(names: &[String], registry: &HashMap<String, V>, event: &str) -> Vec<ListenerRef>
where
    V: IntoListeners + Clone,
{
    names
        .iter()
        .filter_map(|name| {
            let found = registry.get(name).cloned();
            if found.is_none() {
                warn!(listener = %name, event = %event, "Configured listener is not registered");
            }
            found
        })
        .flat_map(IntoListeners::into_listeners)
        .collect()
}
