//! String-keyed listener registry.
//!
//! Listeners are zero-argument callbacks registered under an event name. Emitting a
//! name runs every listener currently registered under it, synchronously, on the
//! calling thread.

mod emitter;
mod error;
mod listener;
mod options;
mod registry;

pub use emitter::EventEmitter;
pub use error::RegistryError;
pub use listener::{Callback, Listener};
pub use options::{RegistryOptions, MAX_INITIAL_CAPACITY};
pub use registry::ListenerRegistry;
