//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::Config;
use crate::contest::ContestController;
use crate::events::EventBus;
use crate::judge::{IsolationProvider, JudgePipeline};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Database connection pool
    db: SqlitePool,

    /// Application configuration
    config: Config,

    /// Outbound event channel
    events: EventBus,

    /// Contest state machine
    contest: ContestController,

    /// Submission evaluation engine
    judge: JudgePipeline,
}

impl AppState {
    /// Create a new application state around a pool and isolation provider.
    pub fn new(db: SqlitePool, config: Config, provider: Arc<dyn IsolationProvider>) -> Self {
        let events = EventBus::new();
        let contest = ContestController::new(events.clone());
        let judge = JudgePipeline::new(
            db.clone(),
            provider,
            contest.clone(),
            events.clone(),
            config.sandbox.clone(),
        );

        Self {
            inner: Arc::new(AppStateInner {
                db,
                config,
                events,
                contest,
                judge,
            }),
        }
    }

    /// Get a reference to the database pool
    pub fn db(&self) -> &SqlitePool {
        &self.inner.db
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get a reference to the event bus
    pub fn events(&self) -> &EventBus {
        &self.inner.events
    }

    /// Get a reference to the contest state machine
    pub fn contest(&self) -> &ContestController {
        &self.inner.contest
    }

    /// Get a reference to the judge pipeline
    pub fn judge(&self) -> &JudgePipeline {
        &self.inner.judge
    }
}
