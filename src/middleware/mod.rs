//! HTTP middleware

pub mod auth;

pub use auth::{AdminUser, admin_auth_middleware};
