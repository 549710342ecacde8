use emitter_core::RegistryOptions;
use emitter_telemetry::TelemetryConfig;
use serde::{Deserialize, Serialize};

/// Top-level configuration file layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmitterConfig {
    #[serde(default)]
    pub registry: RegistryOptions,

    #[serde(default)]
    pub telemetry: TelemetryConfig,
}
