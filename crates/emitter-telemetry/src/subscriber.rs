use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log filter '{directive}': {reason}")]
    InvalidFilter { directive: String, reason: String },

    #[error("global subscriber already installed: {0}")]
    AlreadyInitialized(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub json_output: bool,

    #[serde(default)]
    pub service_name: Option<String>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json_output: false,
            service_name: None,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

pub fn filter_for_level(level: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(level).map_err(|e| TelemetryError::InvalidFilter {
        directive: level.to_string(),
        reason: e.to_string(),
    })
}

/// Installs the global subscriber. `RUST_LOG` wins over `config.level` when it parses.
pub fn try_init_subscriber(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => filter_for_level(&config.level)?,
    };

    let result = if config.json_output {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .try_init()
    };
    result.map_err(|e| TelemetryError::AlreadyInitialized(e.to_string()))?;

    if let Some(service) = config.service_name.as_deref() {
        tracing::info!(service, "telemetry initialized");
    }
    Ok(())
}

pub fn init_subscriber(config: &TelemetryConfig) {
    match try_init_subscriber(config) {
        Ok(()) => {}
        Err(e @ TelemetryError::AlreadyInitialized(_)) => {
            tracing::warn!("Failed to initialize telemetry: {}", e);
        }
        // Nothing is installed to receive a tracing event.
        Err(e) => eprintln!("Failed to initialize telemetry: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TelemetryConfig::default();
        assert_eq!(config.level, "info");
        assert!(!config.json_output);
        assert!(config.service_name.is_none());
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: TelemetryConfig = serde_json::from_str(r#"{"json_output": true}"#).unwrap();
        assert_eq!(config.level, "info");
        assert!(config.json_output);
    }

    #[test]
    fn test_filter_for_level() {
        assert!(filter_for_level("debug").is_ok());
        assert!(filter_for_level("info,emitter_core=trace").is_ok());

        let err = filter_for_level("emitter_core=loud").unwrap_err();
        assert!(matches!(err, TelemetryError::InvalidFilter { .. }));
        assert!(err.to_string().contains("emitter_core=loud"));
    }

    #[test]
    fn test_init_with_invalid_filter_does_not_panic() {
        let config = TelemetryConfig {
            level: "emitter_core=loud".to_string(),
            ..Default::default()
        };
        if std::env::var_os("RUST_LOG").is_none() {
            assert!(matches!(
                try_init_subscriber(&config),
                Err(TelemetryError::InvalidFilter { .. })
            ));
        }
        init_subscriber(&config);
    }

    #[test]
    fn test_second_init_is_rejected() {
        let config = TelemetryConfig::default();
        let first = try_init_subscriber(&config);
        assert!(
            matches!(first, Ok(()) | Err(TelemetryError::AlreadyInitialized(_))),
            "unexpected first init result: {first:?}"
        );

        let second = try_init_subscriber(&config);
        assert!(matches!(second, Err(TelemetryError::AlreadyInitialized(_))));
    }
}
