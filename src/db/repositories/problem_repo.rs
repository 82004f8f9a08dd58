//! Problem repository

use sqlx::SqlitePool;

use crate::{
    error::{AppError, AppResult},
    models::{Problem, TestCase},
};

/// Input for creating or replacing a test case.
#[derive(Debug, Clone)]
pub struct NewTestCase {
    pub input: Option<String>,
    pub expected_output: String,
}

/// Repository for problems and their owned test cases.
pub struct ProblemRepository;

impl ProblemRepository {
    /// List all problems in solve order.
    pub async fn list(pool: &SqlitePool) -> AppResult<Vec<Problem>> {
        let problems =
            sqlx::query_as::<_, Problem>(r#"SELECT * FROM problems ORDER BY position ASC"#)
                .fetch_all(pool)
                .await?;

        Ok(problems)
    }

    /// Find a problem by its public id.
    pub async fn find_by_id(pool: &SqlitePool, id: &str) -> AppResult<Option<Problem>> {
        let problem = sqlx::query_as::<_, Problem>(r#"SELECT * FROM problems WHERE id = ?"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(problem)
    }

    /// Test cases for a problem, in declaration (insertion) order.
    pub async fn test_cases(pool: &SqlitePool, problem_id: &str) -> AppResult<Vec<TestCase>> {
        let test_cases = sqlx::query_as::<_, TestCase>(
            r#"SELECT * FROM test_cases WHERE problem_id = ? ORDER BY id ASC"#,
        )
        .bind(problem_id)
        .fetch_all(pool)
        .await?;

        Ok(test_cases)
    }

    /// Count all problems.
    pub async fn count(pool: &SqlitePool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM problems"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }

    /// Create a problem at the next position, with its test cases, in one
    /// transaction.
    pub async fn create(
        pool: &SqlitePool,
        title: &str,
        statement: &str,
        test_cases: &[NewTestCase],
    ) -> AppResult<Problem> {
        let mut tx = pool.begin().await?;

        let position: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) + 1 FROM problems"#)
            .fetch_one(&mut *tx)
            .await?;
        let id = Problem::id_for_position(position);

        let problem = sqlx::query_as::<_, Problem>(
            r#"
            INSERT INTO problems (id, position, title, statement)
            VALUES (?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&id)
        .bind(position)
        .bind(title)
        .bind(statement)
        .fetch_one(&mut *tx)
        .await?;

        for tc in test_cases {
            sqlx::query(
                r#"INSERT INTO test_cases (problem_id, input, expected_output) VALUES (?, ?, ?)"#,
            )
            .bind(&id)
            .bind(&tc.input)
            .bind(&tc.expected_output)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(problem)
    }

    /// Update a problem and atomically replace its test cases
    /// (delete-all-then-insert in a single transaction).
    pub async fn update(
        pool: &SqlitePool,
        id: &str,
        title: &str,
        statement: &str,
        test_cases: &[NewTestCase],
    ) -> AppResult<Problem> {
        let mut tx = pool.begin().await?;

        let problem = sqlx::query_as::<_, Problem>(
            r#"
            UPDATE problems SET title = ?, statement = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(statement)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Problem {} not found", id)))?;

        sqlx::query(r#"DELETE FROM test_cases WHERE problem_id = ?"#)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        for tc in test_cases {
            sqlx::query(
                r#"INSERT INTO test_cases (problem_id, input, expected_output) VALUES (?, ?, ?)"#,
            )
            .bind(id)
            .bind(&tc.input)
            .bind(&tc.expected_output)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(problem)
    }

    /// Delete a problem; its test cases go with it (ON DELETE CASCADE).
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &SqlitePool, id: &str) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM problems WHERE id = ?"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() == 1)
    }
}
