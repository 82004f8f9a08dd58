//! Application configuration management
//!
//! This module handles loading and validating configuration from environment
//! variables. All configuration is loaded at startup and validated before the
//! application runs.

use std::env;
use std::path::PathBuf;
use std::sync::LazyLock;
use std::time::Duration;

use crate::constants::{
    DEFAULT_COMPILE_TIMEOUT_SECS, DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_DATABASE_URL,
    DEFAULT_JWT_EXPIRY_HOURS, DEFAULT_MEMORY_LIMIT_MB, DEFAULT_RUN_TIMEOUT_SECS,
    DEFAULT_SANDBOX_IMAGE, DEFAULT_SANDBOX_ROOT, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub auth: AuthConfig,
    pub sandbox: SandboxConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// JWT authentication configuration (admin sessions)
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiry_hours: i64,
}

/// Contest credentials. The admin pair guards the privileged API; the
/// participant password is a single shared secret handed out at the venue.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub admin_username: String,
    pub admin_password: String,
    pub participant_password: String,
}

/// Sandbox execution configuration
#[derive(Debug, Clone)]
pub struct SandboxConfig {
    /// Host directory under which per-submission workspaces are created
    pub root: PathBuf,
    /// Docker image providing the C toolchain
    pub image: String,
    /// Wall-clock limit for compilation
    pub compile_timeout: Duration,
    /// Wall-clock limit per test-case run
    pub run_timeout: Duration,
    /// Memory limit per run in megabytes
    pub memory_limit_mb: u64,
    /// Optional `DOCKER_API_VERSION` override for older daemons
    pub docker_api_version: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            jwt: JwtConfig::from_env()?,
            auth: AuthConfig::from_env()?,
            sandbox: SandboxConfig::from_env()?,
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| DEFAULT_DATABASE_MAX_CONNECTIONS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DATABASE_MAX_CONNECTIONS".to_string()))?,
        })
    }
}

impl JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            secret: env::var("JWT_SECRET")
                .map_err(|_| ConfigError::Missing("JWT_SECRET".to_string()))?,
            expiry_hours: env::var("JWT_EXPIRY_HOURS")
                .unwrap_or_else(|_| DEFAULT_JWT_EXPIRY_HOURS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("JWT_EXPIRY_HOURS".to_string()))?,
        })
    }
}

impl AuthConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            admin_username: env::var("ADMIN_USERNAME")
                .map_err(|_| ConfigError::Missing("ADMIN_USERNAME".to_string()))?,
            admin_password: env::var("ADMIN_PASSWORD")
                .map_err(|_| ConfigError::Missing("ADMIN_PASSWORD".to_string()))?,
            participant_password: env::var("PARTICIPANT_PASSWORD")
                .map_err(|_| ConfigError::Missing("PARTICIPANT_PASSWORD".to_string()))?,
        })
    }
}

impl SandboxConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let compile_timeout_secs: u64 = env::var("COMPILE_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_COMPILE_TIMEOUT_SECS.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("COMPILE_TIMEOUT_SECS".to_string()))?;
        let run_timeout_secs: u64 = env::var("RUN_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_RUN_TIMEOUT_SECS.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("RUN_TIMEOUT_SECS".to_string()))?;

        Ok(Self {
            root: PathBuf::from(
                env::var("SANDBOX_ROOT").unwrap_or_else(|_| DEFAULT_SANDBOX_ROOT.to_string()),
            ),
            image: env::var("SANDBOX_IMAGE").unwrap_or_else(|_| DEFAULT_SANDBOX_IMAGE.to_string()),
            compile_timeout: Duration::from_secs(compile_timeout_secs),
            run_timeout: Duration::from_secs(run_timeout_secs),
            memory_limit_mb: env::var("SANDBOX_MEMORY_LIMIT_MB")
                .unwrap_or_else(|_| DEFAULT_MEMORY_LIMIT_MB.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SANDBOX_MEMORY_LIMIT_MB".to_string()))?,
            docker_api_version: env::var("DOCKER_API_VERSION").ok(),
        })
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
