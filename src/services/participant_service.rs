//! Participant service

use sqlx::SqlitePool;

use crate::{
    db::repositories::{LogRepository, ParticipantRepository},
    error::{AppError, AppResult},
    events::{Event, EventBus},
    models::Participant,
};

/// Participant service for business logic
pub struct ParticipantService;

impl ParticipantService {
    /// Fetch a participant's live status (score, unlock index).
    pub async fn status(pool: &SqlitePool, name: &str) -> AppResult<Participant> {
        ParticipantRepository::find_by_name(pool, name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Participant {} not found", name)))
    }

    /// Administrative kick: delete the participant's state entirely and
    /// invalidate their session via a broadcast the client must obey.
    pub async fn kick(pool: &SqlitePool, events: &EventBus, name: &str) -> AppResult<()> {
        let deleted = ParticipantRepository::delete(pool, name).await?;
        if !deleted {
            return Err(AppError::NotFound(format!("Participant {} not found", name)));
        }

        LogRepository::append(pool, &format!("[LOG] Admin kicked participant '{}'.", name)).await?;
        tracing::info!(participant = name, "Participant kicked");

        events.publish(Event::DashboardRefresh);
        events.publish(Event::ParticipantKicked {
            name: name.to_string(),
        });
        Ok(())
    }
}
