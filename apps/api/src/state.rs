use std::sync::Arc;

use crate::config::Config;
use crate::intake::store::SubmissionStore;
use crate::layout::PositionSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SubmissionStore>,
    /// Pluggable position source. Default: FallbackPositionSource. Swap via CAREER_POSITIONS_PATH.
    pub position_source: Arc<dyn PositionSource>,
}

impl AppState {
    pub fn new(config: &Config, position_source: Arc<dyn PositionSource>) -> Self {
        Self {
            store: Arc::new(SubmissionStore::new(config.max_submissions)),
            position_source,
        }
    }
}
