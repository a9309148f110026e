//! Application state.

use std::sync::Arc;
use vibecheck_core::Config;
use vibecheck_gemini::TextGenerator;

/// State shared across handlers. Both members are read-only after startup,
/// so concurrent requests need no coordination.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub generator: Arc<dyn TextGenerator>,
}

impl AppState {
    pub fn new(config: Arc<Config>, generator: Arc<dyn TextGenerator>) -> Self {
        Self { config, generator }
    }
}
