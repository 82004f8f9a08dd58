//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default SQLite database path
pub const DEFAULT_DATABASE_URL: &str = "sqlite://contest.db";

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 8;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default JWT token expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 3;

/// Participant name minimum length
pub const MIN_PARTICIPANT_NAME_LENGTH: u64 = 1;

/// Participant name maximum length
pub const MAX_PARTICIPANT_NAME_LENGTH: u64 = 32;

// =============================================================================
// SANDBOX DEFAULTS
// =============================================================================

/// Default Docker image with the C toolchain
pub const DEFAULT_SANDBOX_IMAGE: &str = "c-judge-env";

/// Default host directory that holds per-submission working directories
pub const DEFAULT_SANDBOX_ROOT: &str = "./sandbox";

/// Compilation wall-clock timeout in seconds
pub const DEFAULT_COMPILE_TIMEOUT_SECS: u64 = 5;

/// Per-test-case execution wall-clock timeout in seconds
pub const DEFAULT_RUN_TIMEOUT_SECS: u64 = 2;

/// Memory limit for a sandboxed run in megabytes
pub const DEFAULT_MEMORY_LIMIT_MB: u64 = 64;

/// Process count limit inside the sandbox (fork-bomb guard)
pub const SANDBOX_PIDS_LIMIT: u32 = 64;

/// Path the workspace is mounted at inside the container
pub const SANDBOX_MOUNT_PATH: &str = "/app";

/// Source file name written into the workspace
pub const SOURCE_FILE_NAME: &str = "main.c";

/// Compiled artifact name inside the workspace
pub const ARTIFACT_FILE_NAME: &str = "main.out";

/// Test case input file name inside the workspace
pub const INPUT_FILE_NAME: &str = "input.txt";

// =============================================================================
// SCORING
// =============================================================================

/// Points awarded for solving a problem
pub const POINTS_PER_SOLVE: i64 = 100;

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum problem title length
pub const MAX_PROBLEM_TITLE_LENGTH: u64 = 256;

/// Maximum problem statement length
pub const MAX_PROBLEM_STATEMENT_LENGTH: u64 = 65535;

/// Maximum source code size in bytes (64 KB)
pub const MAX_SOURCE_CODE_SIZE: u64 = 64 * 1024;

// =============================================================================
// DASHBOARD
// =============================================================================

/// Number of recent log lines shown on the admin dashboard
pub const DASHBOARD_LOG_LIMIT: i64 = 10;
