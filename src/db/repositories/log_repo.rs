//! Log and alert repository

use sqlx::SqlitePool;

use crate::{
    error::AppResult,
    models::{GlobalAlert, LogRecord},
};

/// Repository for the append-only contest log and persisted alerts.
pub struct LogRepository;

impl LogRepository {
    /// Append a log line.
    pub async fn append(pool: &SqlitePool, message: &str) -> AppResult<()> {
        sqlx::query(r#"INSERT INTO logs (message) VALUES (?)"#)
            .bind(message)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Most recent log lines, oldest first.
    pub async fn recent(pool: &SqlitePool, limit: i64) -> AppResult<Vec<LogRecord>> {
        let mut records = sqlx::query_as::<_, LogRecord>(
            r#"SELECT * FROM logs ORDER BY id DESC LIMIT ?"#,
        )
        .bind(limit)
        .fetch_all(pool)
        .await?;

        records.reverse();
        Ok(records)
    }

    /// Persist a global alert and return it (with its assigned id).
    pub async fn append_alert(
        pool: &SqlitePool,
        message: &str,
        kind: &str,
    ) -> AppResult<GlobalAlert> {
        let alert = sqlx::query_as::<_, GlobalAlert>(
            r#"INSERT INTO alerts (message, kind) VALUES (?, ?) RETURNING *"#,
        )
        .bind(message)
        .bind(kind)
        .fetch_one(pool)
        .await?;

        Ok(alert)
    }

    /// All persisted alerts in publication order.
    pub async fn list_alerts(pool: &SqlitePool) -> AppResult<Vec<GlobalAlert>> {
        let alerts = sqlx::query_as::<_, GlobalAlert>(r#"SELECT * FROM alerts ORDER BY id ASC"#)
            .fetch_all(pool)
            .await?;

        Ok(alerts)
    }

    /// Delete all logs and alerts (contest reset).
    pub async fn delete_all(pool: &SqlitePool) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM logs"#).execute(pool).await?;
        sqlx::query(r#"DELETE FROM alerts"#).execute(pool).await?;
        Ok(())
    }
}
