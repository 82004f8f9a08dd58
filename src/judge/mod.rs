//! Submission evaluation engine
//!
//! A submission travels through this module as follows:
//!
//! ```text
//! pipeline → workspace (scoped dir) → compiler → sequencer → comparator
//!                          │                │
//!                          └── isolation provider (Docker) ──┘
//! ```
//!
//! Everything below the pipeline is free of HTTP and contest concerns; the
//! pipeline owns admission control, scoring, and event emission.

pub mod comparator;
pub mod compiler;
pub mod isolation;
pub mod pipeline;
pub mod sequencer;
pub mod verdict;
pub mod workspace;

pub use isolation::{DockerIsolation, ExecOutcome, ExecRequest, IsolationProvider};
pub use pipeline::JudgePipeline;
pub use verdict::Verdict;
