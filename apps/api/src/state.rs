use std::sync::Arc;

use sqlx::PgPool;

use crate::matching::scorer::MatchScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Pluggable match scorer. Default: WeightedSkillScorer.
    pub scorer: Arc<dyn MatchScorer>,
}
