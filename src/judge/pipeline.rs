//! Judge pipeline
//!
//! Orchestrates one submission end to end: admission control (contest gate,
//! participant, problem ordering), then workspace → compile → sequence, then
//! the atomic score/unlock update and the first-blood claim. Admission
//! checks run before any sandbox cost is paid; the progression mutation only
//! happens after the full test-case sequence has unambiguously passed.

use std::sync::Arc;

use sqlx::SqlitePool;
use uuid::Uuid;

use crate::config::SandboxConfig;
use crate::constants::POINTS_PER_SOLVE;
use crate::contest::ContestController;
use crate::db::repositories::{
    FirstBloodRepository, LogRepository, ParticipantRepository, ProblemRepository,
};
use crate::error::{AppError, AppResult};
use crate::events::{Event, EventBus};
use crate::judge::compiler::{self, CompileOutcome};
use crate::judge::isolation::IsolationProvider;
use crate::judge::sequencer::{self, RunLimits, SequenceOutcome};
use crate::judge::verdict::{JudgeFailure, Verdict};
use crate::judge::workspace::Workspace;
use crate::models::{PositionClass, Problem, TestCase};

/// The submission evaluation engine.
pub struct JudgePipeline {
    db: SqlitePool,
    provider: Arc<dyn IsolationProvider>,
    contest: ContestController,
    events: EventBus,
    sandbox: SandboxConfig,
}

impl JudgePipeline {
    pub fn new(
        db: SqlitePool,
        provider: Arc<dyn IsolationProvider>,
        contest: ContestController,
        events: EventBus,
        sandbox: SandboxConfig,
    ) -> Self {
        Self {
            db,
            provider,
            contest,
            events,
            sandbox,
        }
    }

    /// Evaluate one submission to a terminal verdict.
    ///
    /// Judging failures (compile error, wrong answer, runtime error) and
    /// precondition rejections come back as `Ok` verdicts; `Err` is reserved
    /// for request-level problems (unknown participant, malformed problem
    /// id, database failure).
    pub async fn evaluate(
        &self,
        participant_name: &str,
        problem_id: &str,
        source: &str,
    ) -> AppResult<Verdict> {
        let submission_id = Uuid::new_v4();
        tracing::info!(
            %submission_id,
            participant = participant_name,
            problem = problem_id,
            "Submission received"
        );

        // Contest gate: no sandbox work outside InProgress.
        if !self.contest.status().accepts_submissions() {
            tracing::info!(%submission_id, status = %self.contest.status(), "Submission rejected: contest not running");
            return Ok(Verdict::contest_not_running());
        }

        let participant = ParticipantRepository::find_by_name(&self.db, participant_name)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Participant {} not found", participant_name))
            })?;

        let position = Problem::position_from_id(problem_id).ok_or_else(|| {
            AppError::Validation(format!("Malformed problem id: {}", problem_id))
        })?;
        let problem = ProblemRepository::find_by_id(&self.db, problem_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Problem {} not found", problem_id)))?;

        let test_cases = ProblemRepository::test_cases(&self.db, &problem.id).await?;
        if test_cases.is_empty() {
            return Err(AppError::NotFound(format!(
                "Problem {} has no test cases",
                problem_id
            )));
        }

        // Ordering gate. Already-solved covers everything below the unlock
        // index, including the contest-complete state where the index has
        // run past the last problem.
        match participant.classify_position(position) {
            PositionClass::AlreadySolved => {
                tracing::info!(%submission_id, "Submission rejected: already solved");
                return Ok(Verdict::already_solved());
            }
            PositionClass::OutOfOrder => {
                tracing::info!(%submission_id, "Submission rejected: out of order");
                return Ok(Verdict::out_of_order());
            }
            PositionClass::Current => {}
        }

        // Sandbox phase. Infrastructure failures collapse into a generic
        // verdict; internals go to the error log only.
        let verdict = match self.run_sandboxed(source, &test_cases).await {
            Ok(Ok(total)) => {
                self.record_accepted(submission_id, participant_name, &problem, position, total)
                    .await?
            }
            Ok(Err(failure)) => {
                self.record_failure(submission_id, participant_name, &problem, &failure)
                    .await?
            }
            Err(e) => {
                tracing::error!(%submission_id, error = ?e, "Judging infrastructure failure");
                LogRepository::append(
                    &self.db,
                    &format!(
                        "[LOG] {} failed {} (server error)",
                        participant_name, problem.id
                    ),
                )
                .await?;
                Verdict::server_error()
            }
        };

        self.events.publish(Event::DashboardRefresh);
        Ok(verdict)
    }

    /// Compile and sequence inside a scoped workspace.
    ///
    /// The workspace is removed when it drops, whichever way this returns.
    /// `Ok(Ok(total))` = all passed, `Ok(Err(_))` = judged failure,
    /// `Err(_)` = infrastructure failure.
    async fn run_sandboxed(
        &self,
        source: &str,
        test_cases: &[TestCase],
    ) -> anyhow::Result<Result<usize, JudgeFailure>> {
        let workspace = Workspace::create(&self.sandbox.root).await?;
        workspace.write_source(source).await?;

        match compiler::compile(
            self.provider.as_ref(),
            workspace.path(),
            self.sandbox.compile_timeout,
        )
        .await?
        {
            CompileOutcome::Success => {}
            CompileOutcome::Failure { diagnostic } => {
                return Ok(Err(JudgeFailure::Compile { diagnostic }));
            }
        }

        let limits = RunLimits {
            wall_time: self.sandbox.run_timeout,
            memory_limit_mb: self.sandbox.memory_limit_mb,
        };
        match sequencer::run_all(self.provider.as_ref(), &workspace, test_cases, limits).await? {
            SequenceOutcome::AllPassed { total } => Ok(Ok(total)),
            SequenceOutcome::Failed(failure) => Ok(Err(failure)),
        }
    }

    /// All tests passed: advance the ledger, try the first-blood claim, log.
    async fn record_accepted(
        &self,
        submission_id: Uuid,
        participant_name: &str,
        problem: &Problem,
        position: i64,
        total: usize,
    ) -> AppResult<Verdict> {
        // Conditional update keyed on the current unlock index; of two
        // racing submissions from the same identity only one advances.
        let advanced = ParticipantRepository::record_solve(
            &self.db,
            participant_name,
            position,
            POINTS_PER_SOLVE,
        )
        .await?;

        if !advanced {
            tracing::info!(%submission_id, "Solve raced a concurrent submission; ledger unchanged");
            return Ok(Verdict::already_solved());
        }

        if FirstBloodRepository::try_claim(&self.db, &problem.id, participant_name).await? {
            let message = format!(
                "[FIRST BLOOD] {} was the first to solve {}!",
                participant_name, problem.id
            );
            LogRepository::append(&self.db, &message).await?;
            let alert = LogRepository::append_alert(&self.db, &message, "firstblood").await?;
            tracing::info!(%submission_id, problem = %problem.id, "First blood");
            self.events.publish(Event::FirstBlood(alert));
        }

        LogRepository::append(
            &self.db,
            &format!(
                "[LOG] {} solved {} (+{} points)",
                participant_name, problem.id, POINTS_PER_SOLVE
            ),
        )
        .await?;

        tracing::info!(%submission_id, problem = %problem.id, "Submission accepted");
        Ok(Verdict::accepted(total, total))
    }

    /// A judged failure: expected outcome, logged at info level.
    async fn record_failure(
        &self,
        submission_id: Uuid,
        participant_name: &str,
        problem: &Problem,
        failure: &JudgeFailure,
    ) -> AppResult<Verdict> {
        if let JudgeFailure::Compile { diagnostic } = failure {
            tracing::info!(%submission_id, diagnostic = %diagnostic, "Compilation failed");
        } else {
            tracing::info!(%submission_id, %failure, "Submission rejected by judging");
        }

        let verdict = Verdict::from_failure(failure);
        LogRepository::append(
            &self.db,
            &format!(
                "[LOG] {} failed {} ({})",
                participant_name, problem.id, verdict.message
            ),
        )
        .await?;

        Ok(verdict)
    }
}
