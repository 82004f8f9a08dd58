//! Participant repository (progression ledger)

use sqlx::SqlitePool;

use crate::{error::AppResult, models::Participant};

/// Repository for participant database operations.
///
/// This is the progression ledger: score and unlock index move together,
/// only forward, and only through [`ParticipantRepository::record_solve`].
pub struct ParticipantRepository;

impl ParticipantRepository {
    /// Create a new participant (first login), logged in.
    pub async fn create(pool: &SqlitePool, name: &str) -> AppResult<Participant> {
        let participant = sqlx::query_as::<_, Participant>(
            r#"
            INSERT INTO participants (name, score, unlock_index, is_logged_in)
            VALUES (?, 0, 1, 1)
            RETURNING *
            "#,
        )
        .bind(name)
        .fetch_one(pool)
        .await?;

        Ok(participant)
    }

    /// Find participant by name
    pub async fn find_by_name(pool: &SqlitePool, name: &str) -> AppResult<Option<Participant>> {
        let participant =
            sqlx::query_as::<_, Participant>(r#"SELECT * FROM participants WHERE name = ?"#)
                .bind(name)
                .fetch_optional(pool)
                .await?;

        Ok(participant)
    }

    /// Record a solve for the problem at `unlock_index`.
    ///
    /// The update is conditional on the participant still sitting at that
    /// exact unlock index, which serializes racing submissions from the same
    /// identity: of two concurrent solves for the same problem, exactly one
    /// matches the predicate. Returns `true` if this call advanced the
    /// ledger.
    pub async fn record_solve(
        pool: &SqlitePool,
        name: &str,
        unlock_index: i64,
        points: i64,
    ) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE participants
            SET score = score + ?, unlock_index = unlock_index + 1
            WHERE name = ? AND unlock_index = ?
            "#,
        )
        .bind(points)
        .bind(name)
        .bind(unlock_index)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    /// Mark a participant as logged in / out.
    pub async fn set_logged_in(pool: &SqlitePool, name: &str, logged_in: bool) -> AppResult<()> {
        sqlx::query(r#"UPDATE participants SET is_logged_in = ? WHERE name = ?"#)
            .bind(logged_in)
            .bind(name)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Remove a participant entirely (administrative kick).
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &SqlitePool, name: &str) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM participants WHERE name = ?"#)
            .bind(name)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() == 1)
    }

    /// List all participants ordered for the scoreboard.
    pub async fn list_by_score(pool: &SqlitePool) -> AppResult<Vec<Participant>> {
        let participants = sqlx::query_as::<_, Participant>(
            r#"SELECT * FROM participants ORDER BY score DESC, name ASC"#,
        )
        .fetch_all(pool)
        .await?;

        Ok(participants)
    }

    /// Delete all participants (contest reset).
    pub async fn delete_all(pool: &SqlitePool) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM participants"#).execute(pool).await?;
        Ok(())
    }
}
