use crate::emitter::EventEmitter;
use crate::error::RegistryError;
use crate::listener::Listener;
use crate::options::RegistryOptions;
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// In-memory [`EventEmitter`] backed by a map of listener sets.
///
/// Clones share the same underlying map. The lock is only held while the map is
/// read or updated, never while listeners run, so a listener may call back into
/// the registry.
#[derive(Debug, Clone)]
pub struct ListenerRegistry {
    listeners: Arc<RwLock<HashMap<String, HashSet<Listener>>>>,
    options: RegistryOptions,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self {
            listeners: Arc::new(RwLock::new(HashMap::new())),
            options: RegistryOptions::default(),
        }
    }

    pub fn with_options(options: RegistryOptions) -> Result<Self, RegistryError> {
        options.validate()?;
        Ok(Self {
            listeners: Arc::new(RwLock::new(HashMap::with_capacity(
                options.initial_capacity,
            ))),
            options,
        })
    }

    pub fn options(&self) -> RegistryOptions {
        self.options
    }

    /// Wraps `f` in a new [`Listener`], binds it to `event_name` and returns the
    /// handle needed to remove it later.
    pub fn on<F>(&self, event_name: &str, f: F) -> Listener
    where
        F: Fn() + Send + Sync + 'static,
    {
        let listener = Listener::new(f);
        self.add_event_listener(event_name, &listener);
        listener
    }

    fn snapshot(&self, event_name: &str) -> Option<Vec<Listener>> {
        let listeners = self.listeners.read();
        listeners
            .get(event_name)
            .map(|set| set.iter().cloned().collect())
    }

    #[cfg(test)]
    fn has_entry(&self, event_name: &str) -> bool {
        self.listeners.read().contains_key(event_name)
    }
}

impl Default for ListenerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl EventEmitter for ListenerRegistry {
    fn add_event_listener(&self, event_name: &str, listener: &Listener) {
        let mut listeners = self.listeners.write();
        let inserted = match listeners.get_mut(event_name) {
            Some(set) => set.insert(listener.clone()),
            None => {
                listeners.insert(event_name.to_string(), HashSet::from([listener.clone()]));
                true
            }
        };
        tracing::trace!(event = event_name, inserted, "listener added");
    }

    fn remove_event_listener(&self, event_name: &str, listener: &Listener) {
        let mut listeners = self.listeners.write();
        let Some(set) = listeners.get_mut(event_name) else {
            return;
        };

        let removed = set.remove(listener);
        if self.options.prune_empty && set.is_empty() {
            listeners.remove(event_name);
        }
        tracing::trace!(event = event_name, removed, "listener removed");
    }

    fn emit(&self, event_name: &str) {
        // Listeners added or removed while this runs apply from the next emit.
        let Some(snapshot) = self.snapshot(event_name) else {
            return;
        };

        tracing::debug!(
            event = event_name,
            listeners = snapshot.len(),
            "emitting event"
        );
        for listener in &snapshot {
            listener.call();
        }
    }
}
