use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use axum::async_trait;
use axum::extract::FromRequestParts;
use chrono::{Duration, Utc};
use http::header::AUTHORIZATION;
use http::request::Parts;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::db;
use crate::errors::AppError;
use crate::models::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, User, UserSummary};
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: usize,
    pub exp: usize,
}

pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
}

pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            error!("Stored password hash is malformed: {}", e);
            false
        }
    }
}

pub fn issue_token(user_id: Uuid, secret: &str, ttl_hours: i64) -> Result<String, AppError> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        iat: now.timestamp() as usize,
        exp: (now + Duration::hours(ttl_hours)).timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))
}

/// Validates signature and expiry, returning the user id in `sub`.
pub fn verify_token(token: &str, secret: &str) -> Result<Uuid, AppError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| {
        warn!("Rejected bearer token: {}", e);
        AppError::Unauthorized
    })?;

    Uuid::parse_str(&data.claims.sub).map_err(|_| AppError::Unauthorized)
}

fn required(field: Option<String>) -> Option<String> {
    field.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

pub async fn register(
    pool: &PgPool,
    config: &AppConfig,
    input: RegisterRequest,
) -> Result<RegisterResponse, AppError> {
    let (Some(username), Some(email), Some(password)) = (
        required(input.username),
        required(input.email),
        input.password.filter(|p| !p.is_empty()),
    ) else {
        return Err(AppError::Validation("Missing username, email or password".into()));
    };

    let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let user = User {
        id: Uuid::new_v4(),
        username,
        email: email.to_lowercase(),
        password_hash,
        created_at: Utc::now(),
    };

    let user = db::user_queries::insert(pool, &user).await.map_err(|e| match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::Conflict("Email already registered".into())
        }
        other => AppError::Db(other),
    })?;

    info!("Registered user {}", user.id);
    let token = issue_token(user.id, &config.jwt_secret, config.jwt_ttl_hours)?;
    Ok(RegisterResponse { token })
}

pub async fn login(
    pool: &PgPool,
    config: &AppConfig,
    input: LoginRequest,
) -> Result<LoginResponse, AppError> {
    let (Some(email), Some(password)) = (required(input.email), input.password) else {
        return Err(AppError::Validation("Missing email or password".into()));
    };

    let user = db::user_queries::find_by_email(pool, &email.to_lowercase())
        .await?
        .ok_or_else(|| AppError::Validation("User not found".into()))?;

    let stored_hash = user.password_hash.clone();
    let valid = tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    if !valid {
        return Err(AppError::Validation("Invalid credentials".into()));
    }

    let token = issue_token(user.id, &config.jwt_secret, config.jwt_ttl_hours)?;
    Ok(LoginResponse {
        token,
        user: UserSummary::from(&user),
    })
}

/// The caller identified by a valid `Authorization: Bearer` token.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: Uuid,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(AppError::Unauthorized)?;

        let user_id = verify_token(token, &state.config.jwt_secret)?;
        Ok(AuthUser { user_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_round_trip() {
        let hash = hash_password("hunter2").unwrap();
        assert_ne!(hash, "hunter2");
        assert!(verify_password("hunter2", &hash));
        assert!(!verify_password("hunter3", &hash));
    }

    #[test]
    fn test_malformed_hash_never_verifies() {
        assert!(!verify_password("anything", "not-a-phc-string"));
    }

    #[test]
    fn test_token_carries_user_id() {
        let user_id = Uuid::new_v4();
        let token = issue_token(user_id, "secret", 1).unwrap();
        assert_eq!(verify_token(&token, "secret").unwrap(), user_id);
    }

    #[test]
    fn test_token_with_wrong_secret_is_rejected() {
        let token = issue_token(Uuid::new_v4(), "secret", 1).unwrap();
        assert!(matches!(verify_token(&token, "other"), Err(AppError::Unauthorized)));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let token = issue_token(Uuid::new_v4(), "secret", -2).unwrap();
        assert!(matches!(verify_token(&token, "secret"), Err(AppError::Unauthorized)));
    }
}
