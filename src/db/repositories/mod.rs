//! Database repositories

mod first_blood_repo;
mod log_repo;
mod participant_repo;
mod problem_repo;
mod ranking_repo;

pub use first_blood_repo::FirstBloodRepository;
pub use log_repo::LogRepository;
pub use participant_repo::ParticipantRepository;
pub use problem_repo::{NewTestCase, ProblemRepository};
pub use ranking_repo::RankingRepository;
