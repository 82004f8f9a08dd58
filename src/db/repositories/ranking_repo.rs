//! Final ranking repository

use sqlx::SqlitePool;

use crate::{error::AppResult, models::FinalRanking};

/// Repository for the finalized ranking snapshot.
pub struct RankingRepository;

impl RankingRepository {
    /// Snapshot the live scoreboard into `final_rankings`.
    ///
    /// The previous snapshot is replaced in the same transaction, so readers
    /// never observe a half-written table.
    pub async fn finalize(pool: &SqlitePool) -> AppResult<Vec<FinalRanking>> {
        let mut tx = pool.begin().await?;

        sqlx::query(r#"DELETE FROM final_rankings"#).execute(&mut *tx).await?;

        sqlx::query(
            r#"
            INSERT INTO final_rankings (rank, name, score)
            SELECT ROW_NUMBER() OVER (ORDER BY score DESC, name ASC), name, score
            FROM participants
            "#,
        )
        .execute(&mut *tx)
        .await?;

        let rankings = sqlx::query_as::<_, FinalRanking>(
            r#"SELECT * FROM final_rankings ORDER BY rank ASC"#,
        )
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(rankings)
    }

    /// Read the current snapshot.
    pub async fn list(pool: &SqlitePool) -> AppResult<Vec<FinalRanking>> {
        let rankings = sqlx::query_as::<_, FinalRanking>(
            r#"SELECT * FROM final_rankings ORDER BY rank ASC"#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rankings)
    }

    /// Delete the snapshot (contest reset).
    pub async fn delete_all(pool: &SqlitePool) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM final_rankings"#).execute(pool).await?;
        Ok(())
    }
}
