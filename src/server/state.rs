//! Application state shared by all request handlers.

use std::sync::Arc;

use crate::service::Service;
use crate::store::RecordStore;

/// Shared application state: the one service instance, and through it the
/// one open store.
pub struct AppState<S> {
    service: Arc<Service<S>>,
}

impl<S: RecordStore> AppState<S> {
    pub fn new(service: Service<S>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// A handle to the service, cheap to move into a worker.
    pub fn service(&self) -> Arc<Service<S>> {
        Arc::clone(&self.service)
    }

    /// Take the service back once every handler has finished with it.
    ///
    /// Returns `None` while other handles are still alive.
    pub fn into_service(self) -> Option<Service<S>> {
        Arc::into_inner(self.service)
    }
}

// Manual impl: `S` itself does not need to be `Clone`.
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}
