//! Shared application state.

use crate::store::TodoStore;
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

/// Handle to the store, cloned into every request.
///
/// Handlers hold the lock for a whole read-modify-persist sequence, so
/// requests are applied strictly one after another.
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<TodoStore>>,
}

impl AppState {
    pub fn new(store: TodoStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Lock the store. Never hold the guard across an `.await`.
    pub fn store(&self) -> MutexGuard<'_, TodoStore> {
        self.store.lock()
    }
}
