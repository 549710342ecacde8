use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Zero-argument callback stored by the registry.
pub type Callback = dyn Fn() + Send + Sync;

/// Identity-bearing handle around a callback.
///
/// Equality and hashing use the address of the shared allocation, so clones of a
/// `Listener` are the same listener while two listeners built from identical
/// closures are not.
#[derive(Clone)]
pub struct Listener {
    callback: Arc<Callback>,
}

impl Listener {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            callback: Arc::new(f),
        }
    }

    pub fn from_arc(callback: Arc<Callback>) -> Self {
        Self { callback }
    }

    pub fn call(&self) {
        (self.callback)();
    }

    pub fn ptr_eq(&self, other: &Listener) -> bool {
        self.addr() == other.addr()
    }

    fn addr(&self) -> *const () {
        Arc::as_ptr(&self.callback).cast::<()>()
    }
}

impl PartialEq for Listener {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Listener {}

impl Hash for Listener {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("addr", &self.addr())
            .finish()
    }
}
