//! End-to-end tests for the submission pipeline against a real SQLite
//! database and a scripted isolation provider.

use std::collections::VecDeque;
use std::path::Path;
use std::str::FromStr;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use std::time::Duration;

use async_trait::async_trait;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use tempfile::TempDir;

use codegate::{
    config::SandboxConfig,
    contest::ContestController,
    db::repositories::{
        FirstBloodRepository, NewTestCase, ParticipantRepository, ProblemRepository,
        RankingRepository,
    },
    events::EventBus,
    judge::{ExecOutcome, ExecRequest, IsolationProvider, JudgePipeline},
    models::ContestStatus,
    services::ContestService,
};

/// Scripted provider: compile requests (anything invoking gcc) succeed by
/// default, run requests pop the next scripted outcome.
struct ScriptedProvider {
    compile_ok: bool,
    run_outcomes: Mutex<VecDeque<ExecOutcome>>,
    sandbox_calls: AtomicUsize,
}

impl ScriptedProvider {
    fn new(compile_ok: bool, run_outcomes: Vec<ExecOutcome>) -> Self {
        Self {
            compile_ok,
            run_outcomes: Mutex::new(run_outcomes.into()),
            sandbox_calls: AtomicUsize::new(0),
        }
    }

    fn passing(n: usize, stdout: &str) -> Self {
        Self::new(
            true,
            (0..n).map(|_| exited(0, stdout)).collect::<Vec<_>>(),
        )
    }

    fn calls(&self) -> usize {
        self.sandbox_calls.load(Ordering::SeqCst)
    }
}

fn exited(exit_code: i32, stdout: &str) -> ExecOutcome {
    ExecOutcome::Exited {
        exit_code,
        stdout: stdout.to_string(),
        stderr: String::new(),
    }
}

#[async_trait]
impl IsolationProvider for ScriptedProvider {
    async fn execute(&self, _workspace: &Path, request: &ExecRequest) -> anyhow::Result<ExecOutcome> {
        self.sandbox_calls.fetch_add(1, Ordering::SeqCst);

        if request.command.iter().any(|part| part.contains("gcc")) {
            return Ok(if self.compile_ok {
                exited(0, "")
            } else {
                exited(1, "main.c: error: expected ';'")
            });
        }

        let outcome = self
            .run_outcomes
            .lock()
            .unwrap()
            .pop_front()
            .expect("more runs than scripted outcomes");
        Ok(outcome)
    }
}

struct Harness {
    pool: SqlitePool,
    contest: ContestController,
    events: EventBus,
    pipeline: JudgePipeline,
    // Held so the database file and sandbox root outlive the test
    _dir: TempDir,
}

async fn harness(provider: Arc<ScriptedProvider>) -> Harness {
    let dir = tempfile::tempdir().unwrap();

    let options = SqliteConnectOptions::from_str(&format!(
        "sqlite://{}",
        dir.path().join("test.db").display()
    ))
    .unwrap()
    .create_if_missing(true)
    .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .unwrap();
    sqlx::migrate!("./migrations").run(&pool).await.unwrap();

    let sandbox = SandboxConfig {
        root: dir.path().join("sandbox"),
        image: "c-judge-env".to_string(),
        compile_timeout: Duration::from_secs(5),
        run_timeout: Duration::from_secs(2),
        memory_limit_mb: 64,
        docker_api_version: None,
    };

    let events = EventBus::new();
    let contest = ContestController::new(events.clone());
    let pipeline = JudgePipeline::new(
        pool.clone(),
        provider,
        contest.clone(),
        events.clone(),
        sandbox,
    );

    Harness {
        pool,
        contest,
        events,
        pipeline,
        _dir: dir,
    }
}

async fn seed_problem(pool: &SqlitePool, expected: &str) -> String {
    let problem = ProblemRepository::create(
        pool,
        "Sum",
        "Print the answer.",
        &[NewTestCase {
            input: Some("1 2".to_string()),
            expected_output: expected.to_string(),
        }],
    )
    .await
    .unwrap();
    problem.id
}

#[tokio::test]
async fn accepted_solve_advances_ledger_and_claims_first_blood() {
    let provider = Arc::new(ScriptedProvider::passing(1, "3\n"));
    let h = harness(provider).await;
    h.contest.transition(ContestStatus::InProgress).unwrap();

    let problem_id = seed_problem(&h.pool, "3").await;
    ParticipantRepository::create(&h.pool, "alice").await.unwrap();

    let verdict = h
        .pipeline
        .evaluate("alice", &problem_id, "int main(){}")
        .await
        .unwrap();
    assert!(verdict.success, "unexpected verdict: {}", verdict.message);

    let alice = ParticipantRepository::find_by_name(&h.pool, "alice")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(alice.score, 100);
    assert_eq!(alice.unlock_index, 2);

    let blood = FirstBloodRepository::find_by_problem(&h.pool, &problem_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(blood.participant, "alice");
}

#[tokio::test]
async fn wrong_answer_leaves_ledger_unchanged() {
    let provider = Arc::new(ScriptedProvider::passing(1, "999\n"));
    let h = harness(provider).await;
    h.contest.transition(ContestStatus::InProgress).unwrap();

    let problem_id = seed_problem(&h.pool, "3").await;
    ParticipantRepository::create(&h.pool, "alice").await.unwrap();

    let verdict = h
        .pipeline
        .evaluate("alice", &problem_id, "int main(){}")
        .await
        .unwrap();
    assert!(!verdict.success);
    assert!(verdict.message.contains("Wrong answer"));

    let alice = ParticipantRepository::find_by_name(&h.pool, "alice")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(alice.score, 0);
    assert_eq!(alice.unlock_index, 1);
    assert!(
        FirstBloodRepository::find_by_problem(&h.pool, &problem_id)
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn compile_error_reported_without_diagnostic() {
    let provider = Arc::new(ScriptedProvider::new(false, vec![]));
    let h = harness(provider).await;
    h.contest.transition(ContestStatus::InProgress).unwrap();

    let problem_id = seed_problem(&h.pool, "3").await;
    ParticipantRepository::create(&h.pool, "alice").await.unwrap();

    let verdict = h
        .pipeline
        .evaluate("alice", &problem_id, "int main( broken")
        .await
        .unwrap();
    assert!(!verdict.success);
    assert_eq!(verdict.message, "Compilation error");
    assert!(!verdict.message.contains("main.c"));
}

#[tokio::test]
async fn already_solved_and_out_of_order_skip_the_sandbox() {
    let provider = Arc::new(ScriptedProvider::new(true, vec![]));
    let h = harness(provider.clone()).await;
    h.contest.transition(ContestStatus::InProgress).unwrap();

    let p1 = seed_problem(&h.pool, "3").await;
    let _p2 = seed_problem(&h.pool, "4").await;
    ParticipantRepository::create(&h.pool, "alice").await.unwrap();
    // Simulate p1 already solved
    ParticipantRepository::record_solve(&h.pool, "alice", 1, 100)
        .await
        .unwrap();

    let verdict = h.pipeline.evaluate("alice", &p1, "x").await.unwrap();
    assert!(!verdict.success);
    assert!(verdict.message.contains("already solved"));

    let p3 = seed_problem(&h.pool, "5").await;
    let verdict = h.pipeline.evaluate("alice", &p3, "x").await.unwrap();
    assert!(!verdict.success);
    assert!(verdict.message.contains("in order"));

    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn submissions_rejected_unless_contest_in_progress() {
    let provider = Arc::new(ScriptedProvider::new(true, vec![]));
    let h = harness(provider.clone()).await;

    let problem_id = seed_problem(&h.pool, "3").await;
    ParticipantRepository::create(&h.pool, "alice").await.unwrap();

    let verdict = h
        .pipeline
        .evaluate("alice", &problem_id, "x")
        .await
        .unwrap();
    assert!(!verdict.success);
    assert!(verdict.message.contains("not in progress"));

    h.contest.transition(ContestStatus::InProgress).unwrap();
    h.contest.transition(ContestStatus::Finished).unwrap();

    let verdict = h
        .pipeline
        .evaluate("alice", &problem_id, "x")
        .await
        .unwrap();
    assert!(!verdict.success);
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn unknown_participant_is_an_error() {
    let provider = Arc::new(ScriptedProvider::new(true, vec![]));
    let h = harness(provider).await;
    h.contest.transition(ContestStatus::InProgress).unwrap();
    let problem_id = seed_problem(&h.pool, "3").await;

    assert!(h.pipeline.evaluate("ghost", &problem_id, "x").await.is_err());
}

#[tokio::test]
async fn malformed_problem_id_is_an_error() {
    let provider = Arc::new(ScriptedProvider::new(true, vec![]));
    let h = harness(provider).await;
    h.contest.transition(ContestStatus::InProgress).unwrap();
    ParticipantRepository::create(&h.pool, "alice").await.unwrap();

    assert!(h.pipeline.evaluate("alice", "problem-one", "x").await.is_err());
}

#[tokio::test]
async fn racing_solves_from_one_participant_advance_the_ledger_once() {
    let provider = Arc::new(ScriptedProvider::passing(2, "3\n"));
    let h = harness(provider).await;
    h.contest.transition(ContestStatus::InProgress).unwrap();

    let problem_id = seed_problem(&h.pool, "3").await;
    ParticipantRepository::create(&h.pool, "alice").await.unwrap();

    let (a, b) = tokio::join!(
        h.pipeline.evaluate("alice", &problem_id, "x"),
        h.pipeline.evaluate("alice", &problem_id, "x"),
    );
    let (a, b) = (a.unwrap(), b.unwrap());

    // Exactly one submission wins the conditional update
    assert_eq!(a.success as u8 + b.success as u8, 1);

    let alice = ParticipantRepository::find_by_name(&h.pool, "alice")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(alice.score, 100);
    assert_eq!(alice.unlock_index, 2);
}

#[tokio::test]
async fn first_blood_goes_to_exactly_one_of_two_racing_participants() {
    let provider = Arc::new(ScriptedProvider::passing(2, "3\n"));
    let h = harness(provider).await;
    h.contest.transition(ContestStatus::InProgress).unwrap();

    let problem_id = seed_problem(&h.pool, "3").await;
    ParticipantRepository::create(&h.pool, "alice").await.unwrap();
    ParticipantRepository::create(&h.pool, "bob").await.unwrap();

    let (a, b) = tokio::join!(
        h.pipeline.evaluate("alice", &problem_id, "x"),
        h.pipeline.evaluate("bob", &problem_id, "x"),
    );
    assert!(a.unwrap().success);
    assert!(b.unwrap().success);

    let blood = FirstBloodRepository::find_by_problem(&h.pool, &problem_id)
        .await
        .unwrap()
        .unwrap();
    assert!(blood.participant == "alice" || blood.participant == "bob");

    // Exactly one claim landed: a single first-blood alert was published,
    // and it names the participant who holds the record.
    let alerts = ContestService::alerts(&h.pool).await.unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].kind, "firstblood");
    assert!(alerts[0].message.contains(&blood.participant));
}

#[tokio::test]
async fn reset_wipes_contest_data_and_returns_to_waiting() {
    let provider = Arc::new(ScriptedProvider::passing(1, "3\n"));
    let h = harness(provider).await;
    h.contest.transition(ContestStatus::InProgress).unwrap();

    let problem_id = seed_problem(&h.pool, "3").await;
    ParticipantRepository::create(&h.pool, "alice").await.unwrap();
    h.pipeline
        .evaluate("alice", &problem_id, "x")
        .await
        .unwrap();
    ContestService::finalize_rankings(&h.pool).await.unwrap();

    ContestService::reset(&h.pool, &h.contest, &h.events)
        .await
        .unwrap();

    assert_eq!(h.contest.status(), ContestStatus::Waiting);
    assert!(
        ParticipantRepository::find_by_name(&h.pool, "alice")
            .await
            .unwrap()
            .is_none()
    );
    assert!(
        FirstBloodRepository::find_by_problem(&h.pool, &problem_id)
            .await
            .unwrap()
            .is_none()
    );
    assert!(RankingRepository::list(&h.pool).await.unwrap().is_empty());

    // Problems survive a reset
    assert!(
        ProblemRepository::find_by_id(&h.pool, &problem_id)
            .await
            .unwrap()
            .is_some()
    );
}
