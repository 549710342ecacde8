use crate::listener::Listener;

/// Observer-style registry of listeners keyed by event name.
///
/// None of the operations fail: unknown event names and unknown listeners are no-ops.
pub trait EventEmitter: Send + Sync {
    /// Binds `listener` to `event_name`.
    ///
    /// Registering the same listener twice under one name keeps a single entry.
    fn add_event_listener(&self, event_name: &str, listener: &Listener);

    /// Unbinds `listener` from `event_name`.
    fn remove_event_listener(&self, event_name: &str, listener: &Listener);

    /// Runs every listener bound to `event_name`.
    ///
    /// Listeners run on the calling thread in no particular order. A panicking
    /// listener unwinds out of this call and the listeners after it are skipped.
    fn emit(&self, event_name: &str);
}
