//! Authentication service
//!
//! Two kinds of identity exist: the single administrator (configured
//! username/password pair, issued a JWT) and venue participants (a shared
//! configured password; a participant row is created on first login). The
//! credentials are always passed in explicitly from config; there is no
//! ambient token lookup anywhere in the call graph.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::{
    config::Config,
    db::repositories::{LogRepository, ParticipantRepository},
    error::{AppError, AppResult},
    events::{Event, EventBus},
    models::Participant,
};

/// JWT claims structure (admin sessions only)
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // username
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Role carried in admin tokens
pub const ROLE_ADMIN: &str = "admin";

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Log the administrator in and issue a JWT.
    pub async fn login_admin(
        pool: &SqlitePool,
        config: &Config,
        username: &str,
        password: &str,
    ) -> AppResult<String> {
        if username != config.auth.admin_username || password != config.auth.admin_password {
            return Err(AppError::InvalidCredentials);
        }

        LogRepository::append(pool, &format!("[LOG] Admin '{}' logged in.", username)).await?;

        Self::generate_token(username, ROLE_ADMIN, config)
    }

    /// Log a participant in, creating the row on first login.
    ///
    /// A second login for a name whose session is still active is rejected:
    /// at most one session per identity.
    pub async fn login_participant(
        pool: &SqlitePool,
        events: &EventBus,
        config: &Config,
        name: &str,
        password: &str,
    ) -> AppResult<Participant> {
        if password != config.auth.participant_password {
            return Err(AppError::InvalidCredentials);
        }

        let participant = match ParticipantRepository::find_by_name(pool, name).await? {
            None => {
                let participant = ParticipantRepository::create(pool, name).await?;
                LogRepository::append(
                    pool,
                    &format!("[LOG] Participant '{}' registered and logged in.", name),
                )
                .await?;
                participant
            }
            Some(existing) if existing.is_logged_in => {
                LogRepository::append(
                    pool,
                    &format!("[WARNING] Blocked concurrent login attempt for '{}'.", name),
                )
                .await?;
                return Err(AppError::AlreadyLoggedIn);
            }
            Some(existing) => {
                ParticipantRepository::set_logged_in(pool, name, true).await?;
                LogRepository::append(pool, &format!("[LOG] Participant '{}' re-logged in.", name))
                    .await?;
                Participant {
                    is_logged_in: true,
                    ..existing
                }
            }
        };

        events.publish(Event::DashboardRefresh);
        Ok(participant)
    }

    /// Log a participant out.
    pub async fn logout_participant(
        pool: &SqlitePool,
        events: &EventBus,
        name: &str,
    ) -> AppResult<()> {
        ParticipantRepository::set_logged_in(pool, name, false).await?;
        LogRepository::append(pool, &format!("[LOG] Participant '{}' logged out.", name)).await?;
        events.publish(Event::DashboardRefresh);
        Ok(())
    }

    /// Generate a signed JWT for the given identity.
    pub fn generate_token(username: &str, role: &str, config: &Config) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: username.to_string(),
            role: role.to_string(),
            exp: (now + Duration::hours(config.jwt.expiry_hours)).timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt.secret.as_bytes()),
        )?;

        Ok(token)
    }

    /// Verify a JWT and return its claims.
    pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(data.claims)
    }
}
