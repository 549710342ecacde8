use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// Upper bound for [`RegistryOptions::initial_capacity`].
pub const MAX_INITIAL_CAPACITY: usize = 1 << 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct RegistryOptions {
    /// Drop an event name's entry once its last listener is removed.
    ///
    /// Off by default: entries are kept for the registry's lifetime.
    pub prune_empty: bool,

    /// Number of event names to pre-allocate room for.
    pub initial_capacity: usize,
}

impl RegistryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prune_empty(mut self, prune: bool) -> Self {
        self.prune_empty = prune;
        self
    }

    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    pub fn validate(&self) -> Result<(), RegistryError> {
        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(RegistryError::InvalidOptions(format!(
                "initial_capacity {} exceeds maximum {}",
                self.initial_capacity, MAX_INITIAL_CAPACITY
            )));
        }
        Ok(())
    }
}
