//! Problem service

use sqlx::SqlitePool;

use crate::{
    db::repositories::{LogRepository, NewTestCase, ProblemRepository},
    error::{AppError, AppResult},
    events::{Event, EventBus},
    models::{Problem, TestCase},
};

/// Problem service for business logic
pub struct ProblemService;

impl ProblemService {
    /// List all problems in solve order.
    pub async fn list(pool: &SqlitePool) -> AppResult<Vec<Problem>> {
        ProblemRepository::list(pool).await
    }

    /// Problem detail including test cases. Admin only: test cases are
    /// hidden from participants.
    pub async fn detail(pool: &SqlitePool, id: &str) -> AppResult<(Problem, Vec<TestCase>)> {
        let problem = ProblemRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Problem {} not found", id)))?;
        let test_cases = ProblemRepository::test_cases(pool, id).await?;
        Ok((problem, test_cases))
    }

    /// Create a problem at the next position.
    pub async fn create(
        pool: &SqlitePool,
        events: &EventBus,
        title: &str,
        statement: &str,
        test_cases: Vec<NewTestCase>,
    ) -> AppResult<Problem> {
        let problem = ProblemRepository::create(pool, title, statement, &test_cases).await?;
        LogRepository::append(pool, &format!("[LOG] Admin added problem {}", problem.id)).await?;
        events.publish(Event::ProblemListChanged);
        Ok(problem)
    }

    /// Update a problem, replacing its test cases atomically.
    pub async fn update(
        pool: &SqlitePool,
        events: &EventBus,
        id: &str,
        title: &str,
        statement: &str,
        test_cases: Vec<NewTestCase>,
    ) -> AppResult<Problem> {
        let problem = ProblemRepository::update(pool, id, title, statement, &test_cases).await?;
        LogRepository::append(pool, &format!("[LOG] Admin updated problem {}", id)).await?;
        events.publish(Event::ProblemListChanged);
        Ok(problem)
    }

    /// Delete a problem and its test cases.
    pub async fn delete(pool: &SqlitePool, events: &EventBus, id: &str) -> AppResult<()> {
        let deleted = ProblemRepository::delete(pool, id).await?;
        if !deleted {
            return Err(AppError::NotFound(format!("Problem {} not found", id)));
        }
        LogRepository::append(pool, &format!("[LOG] Admin deleted problem {}", id)).await?;
        events.publish(Event::ProblemListChanged);
        Ok(())
    }
}
