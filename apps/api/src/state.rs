use std::sync::Arc;

use crate::config::Config;
use crate::scoring::aggregate::LetterScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable letter scorer. Default: `RubricScorer`, the deterministic
    /// pattern-cascade engine.
    pub scorer: Arc<dyn LetterScorer>,
}
