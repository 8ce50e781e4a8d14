//! State threaded through the study-assistant HTTP handlers.

use std::sync::Arc;

use crate::db::repository::FullRepository;

/// Handler state: the storage backend every endpoint operates on.
///
/// Cloned per request by axum; the backend itself is shared behind the `Arc`.
#[derive(Clone)]
pub struct AppState {
    repository: Arc<dyn FullRepository>,
}

impl AppState {
    pub fn new(repository: Arc<dyn FullRepository>) -> Self {
        Self { repository }
    }

    /// Borrow the backend for a service call.
    pub fn repo(&self) -> &dyn FullRepository {
        self.repository.as_ref()
    }
}
