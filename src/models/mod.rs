//! Domain models

mod alert;
mod contest;
mod first_blood;
mod log;
mod participant;
mod problem;
mod ranking;
mod test_case;

pub use alert::GlobalAlert;
pub use contest::ContestStatus;
pub use first_blood::FirstBlood;
pub use log::LogRecord;
pub use participant::{Participant, PositionClass};
pub use problem::Problem;
pub use ranking::FinalRanking;
pub use test_case::TestCase;
