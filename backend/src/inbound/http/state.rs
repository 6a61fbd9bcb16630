//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ContentStore, RemoteContentSource};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Process-local store for first-party records.
    pub store: Arc<dyn ContentStore>,
    /// Read-only source for CMS-owned display content.
    pub remote: Arc<dyn RemoteContentSource>,
}

impl HttpState {
    /// Bundle the two ports handlers depend on.
    #[must_use]
    pub fn new(store: Arc<dyn ContentStore>, remote: Arc<dyn RemoteContentSource>) -> Self {
        Self { store, remote }
    }
}
