mod subscriber;

pub use subscriber::{
    filter_for_level, init_subscriber, try_init_subscriber, TelemetryConfig, TelemetryError,
};
