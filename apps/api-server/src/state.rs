//! Application state - shared across all handlers.

use std::sync::Arc;

use posts_core::ports::PostRepository;

/// Shared application state.
///
/// Built once at startup; handlers only ever read it.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }
}
