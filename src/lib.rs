//! Codegate - Sequential-Unlock Contest Judge
//!
//! This library implements a small programming-contest judge: participants
//! log in, receive problems in a fixed order, and submit C source code that
//! is compiled and executed against hidden test cases inside an isolated
//! Docker sandbox. Solving a problem awards points and unlocks the next one;
//! the first solver of each problem earns a first-blood distinction.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Database access
//! - **Judge**: The submission evaluation engine (compile → run → compare)
//! - **Models**: Domain models and DTOs
//!
//! Contest-wide state (Waiting/InProgress/Finished) lives in a single
//! [`contest::ContestController`]; all outward notifications flow through the
//! typed [`events::EventBus`].

pub mod config;
pub mod constants;
pub mod contest;
pub mod db;
pub mod error;
pub mod events;
pub mod handlers;
pub mod judge;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
