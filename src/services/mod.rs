//! Business logic services

pub mod auth_service;
pub mod contest_service;
pub mod participant_service;
pub mod problem_service;

pub use auth_service::AuthService;
pub use contest_service::ContestService;
pub use participant_service::ParticipantService;
pub use problem_service::ProblemService;
