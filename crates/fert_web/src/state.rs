use std::fmt;
use std::sync::Arc;

use fert_core::Classifier;

/// Shared, read-only request state. Built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn Classifier>,
}

impl AppState {
    pub fn new(model: Arc<dyn Classifier>) -> Self {
        Self { model }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("model", &self.model.name())
            .finish()
    }
}
