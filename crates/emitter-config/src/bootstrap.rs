use crate::loader::load_config;
use crate::schema::EmitterConfig;
use anyhow::{Context, Result};
use emitter_core::ListenerRegistry;
use emitter_telemetry::try_init_subscriber;
use std::path::Path;

/// Builds a registry from the `registry` section of `config`.
pub fn build_registry(config: &EmitterConfig) -> Result<ListenerRegistry> {
    ListenerRegistry::with_options(config.registry).context("Failed to create listener registry")
}

/// Installs telemetry from `config`, then builds the registry.
pub fn bootstrap_with(config: &EmitterConfig) -> Result<ListenerRegistry> {
    try_init_subscriber(&config.telemetry).context("Failed to initialize telemetry")?;
    let registry = build_registry(config)?;
    tracing::debug!(options = ?registry.options(), "listener registry ready");
    Ok(registry)
}

/// Loads the config file (searched for when `config_path` is `None`), installs
/// telemetry and returns a registry built from it.
pub fn bootstrap(config_path: Option<&Path>) -> Result<ListenerRegistry> {
    let config = load_config(config_path)?;
    bootstrap_with(&config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_config_from_file;
    use emitter_core::{EventEmitter, RegistryOptions};
    use std::fs;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tempfile::TempDir;

    #[test]
    fn test_build_registry_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("emitter.json");
        fs::write(
            &path,
            r#"{"registry": {"prune_empty": true, "initial_capacity": 8}}"#,
        )
        .unwrap();

        let config = load_config_from_file(&path).unwrap().config;
        let registry = build_registry(&config).unwrap();
        assert_eq!(
            registry.options(),
            RegistryOptions::new().prune_empty(true).initial_capacity(8)
        );
    }

    #[test]
    fn test_build_registry_rejects_invalid_options() {
        let mut config = EmitterConfig::default();
        config.registry.initial_capacity = emitter_core::MAX_INITIAL_CAPACITY + 1;

        let err = build_registry(&config).unwrap_err();
        assert!(err.to_string().contains("Failed to create listener registry"));
    }

    // The only test in this binary that installs the global subscriber.
    #[test]
    fn test_bootstrap_from_yaml_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("emitter.yaml");
        fs::write(
            &path,
            "registry:\n  prune_empty: true\ntelemetry:\n  level: warn\n",
        )
        .unwrap();

        let registry = bootstrap(Some(&path)).unwrap();
        assert!(registry.options().prune_empty);

        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        let listener = registry.on("ready", move || {
            c.fetch_add(1, Ordering::SeqCst);
        });
        registry.emit("ready");
        registry.remove_event_listener("ready", &listener);
        registry.emit("ready");
        assert_eq!(count.load(Ordering::SeqCst), 1);

        let second = bootstrap(Some(&path)).unwrap_err();
        assert!(second.to_string().contains("Failed to initialize telemetry"));
    }

    #[test]
    fn test_bootstrap_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("emitter.json");

        let err = bootstrap(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
