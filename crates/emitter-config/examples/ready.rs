//! Registers a listener on "ready", emits a few events, then removes it.
//!
//! Pass a config file path as the first argument, or drop an `emitter.yaml` (or any
//! other supported candidate) in the working directory or `~/.config/emitter/`.
//! Without one the defaults are used. Run with `RUST_LOG=emitter_core=trace` to see
//! registry activity.

use emitter_config::{bootstrap, bootstrap_with, find_all_config_files, EmitterConfig};
use emitter_core::EventEmitter;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let registry = if config_path.is_some() || !find_all_config_files().is_empty() {
        bootstrap(config_path.as_deref())?
    } else {
        bootstrap_with(&EmitterConfig::default())?
    };

    let calls = Arc::new(AtomicUsize::new(0));

    let counter = calls.clone();
    let on_ready = registry.on("ready", move || {
        let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
        println!("ready fired ({n})");
    });

    registry.emit("login");
    registry.emit("ready");

    registry.remove_event_listener("ready", &on_ready);
    registry.emit("ready");

    println!("total calls: {}", calls.load(Ordering::SeqCst));
    Ok(())
}
