//! Contest service
//!
//! Administrative operations around the contest lifecycle: the dashboard,
//! status transitions, the final-ranking snapshot, and the full reset.

use sqlx::SqlitePool;

use crate::{
    constants::DASHBOARD_LOG_LIMIT,
    contest::ContestController,
    db::repositories::{
        FirstBloodRepository, LogRepository, ParticipantRepository, ProblemRepository,
        RankingRepository,
    },
    error::AppResult,
    events::{Event, EventBus},
    models::{ContestStatus, FinalRanking, GlobalAlert, Participant},
};

/// Data backing the admin dashboard.
#[derive(Debug)]
pub struct DashboardData {
    pub participants: Vec<Participant>,
    pub recent_logs: Vec<String>,
    pub total_problems: i64,
}

/// Contest service for business logic
pub struct ContestService;

impl ContestService {
    /// Collect the admin dashboard view.
    pub async fn dashboard(pool: &SqlitePool) -> AppResult<DashboardData> {
        let participants = ParticipantRepository::list_by_score(pool).await?;
        let recent_logs = LogRepository::recent(pool, DASHBOARD_LOG_LIMIT)
            .await?
            .into_iter()
            .map(|r| r.message)
            .collect();
        let total_problems = ProblemRepository::count(pool).await?;

        Ok(DashboardData {
            participants,
            recent_logs,
            total_problems,
        })
    }

    /// Administrator-requested status transition.
    pub async fn set_status(
        pool: &SqlitePool,
        contest: &ContestController,
        next: ContestStatus,
    ) -> AppResult<ContestStatus> {
        let status = contest.transition(next)?;
        LogRepository::append(pool, &format!("[LOG] Contest status changed to {}.", status))
            .await?;
        Ok(status)
    }

    /// Snapshot live scores into the immutable final ranking table.
    pub async fn finalize_rankings(pool: &SqlitePool) -> AppResult<Vec<FinalRanking>> {
        let rankings = RankingRepository::finalize(pool).await?;
        LogRepository::append(pool, "[LOG] Admin finalized and saved the final rankings.").await?;
        Ok(rankings)
    }

    /// Read the current final-ranking snapshot.
    pub async fn rankings(pool: &SqlitePool) -> AppResult<Vec<FinalRanking>> {
        RankingRepository::list(pool).await
    }

    /// Persisted global alerts (first-blood banners).
    pub async fn alerts(pool: &SqlitePool) -> AppResult<Vec<GlobalAlert>> {
        LogRepository::list_alerts(pool).await
    }

    /// Full contest reset: clear participants, logs, alerts, first bloods
    /// and the ranking snapshot, return the state machine to Waiting, and
    /// force-log-out every connected participant.
    pub async fn reset(
        pool: &SqlitePool,
        contest: &ContestController,
        events: &EventBus,
    ) -> AppResult<()> {
        RankingRepository::delete_all(pool).await?;
        ParticipantRepository::delete_all(pool).await?;
        FirstBloodRepository::delete_all(pool).await?;
        LogRepository::delete_all(pool).await?;
        LogRepository::append(pool, "[LOG] Contest data has been reset by admin.").await?;

        tracing::info!("Contest reset");

        // reset() broadcasts the Waiting status itself
        contest.reset();
        events.publish(Event::DashboardRefresh);
        events.publish(Event::ForceLogout);
        Ok(())
    }
}
