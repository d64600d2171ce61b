//! Shared application state.

use std::sync::Arc;

use iris_core::Classifier;

/// State shared across request handlers: the classifier loaded once at
/// startup, read-only for the lifetime of the process.
pub struct AppState {
    pub classifier: Arc<dyn Classifier>,
}

impl AppState {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self { classifier }
    }
}

/// Type alias for shared state
pub type SharedState = Arc<AppState>;
