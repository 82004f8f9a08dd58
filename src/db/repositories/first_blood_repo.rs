//! First blood repository

use sqlx::SqlitePool;

use crate::{error::AppResult, models::FirstBlood};

/// Repository for first-blood records.
pub struct FirstBloodRepository;

impl FirstBloodRepository {
    /// Claim first blood for a problem.
    ///
    /// `INSERT OR IGNORE` against the `problem_id` primary key makes this an
    /// atomic insert-if-absent: across arbitrarily many concurrent callers
    /// exactly one insert lands and returns `true`; everyone else gets
    /// `false` with no side effects. Never read-then-write here: two
    /// participants can finish the same problem within milliseconds.
    pub async fn try_claim(
        pool: &SqlitePool,
        problem_id: &str,
        participant: &str,
    ) -> AppResult<bool> {
        let result = sqlx::query(
            r#"INSERT OR IGNORE INTO first_bloods (problem_id, participant) VALUES (?, ?)"#,
        )
        .bind(problem_id)
        .bind(participant)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    /// Find the first-blood record for a problem, if any.
    pub async fn find_by_problem(
        pool: &SqlitePool,
        problem_id: &str,
    ) -> AppResult<Option<FirstBlood>> {
        let record =
            sqlx::query_as::<_, FirstBlood>(r#"SELECT * FROM first_bloods WHERE problem_id = ?"#)
                .bind(problem_id)
                .fetch_optional(pool)
                .await?;

        Ok(record)
    }

    /// Delete all first-blood records (contest reset).
    pub async fn delete_all(pool: &SqlitePool) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM first_bloods"#).execute(pool).await?;
        Ok(())
    }
}
