use std::sync::Arc;

use crate::models::cv::Cv;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup; never mutated.
    pub cv: Arc<Cv>,
}
