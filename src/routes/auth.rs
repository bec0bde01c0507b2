use crate::{auth, db, error::ApiError, models::User, AppState};
use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    /// JWT token for API authentication
    pub access_token: String,
    pub token_type: String,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user_id: i64,
    pub email: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            user_id: user.user_id,
            email: user.email,
            username: user.username,
            created_at: user.created_at,
        }
    }
}

/// Register a new user with a bcrypt-hashed password
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    validate_registration(&payload)?;

    if db::queries::get_user_by_email(&state.db, &payload.email)
        .await?
        .is_some()
    {
        return Err(ApiError::EmailTaken);
    }
    if db::queries::get_user_by_username(&state.db, &payload.username)
        .await?
        .is_some()
    {
        return Err(ApiError::UsernameTaken);
    }

    let password_hash = auth::hash_password(&payload.password)?;
    let user =
        db::queries::create_user(&state.db, &payload.email, &payload.username, &password_hash)
            .await?;

    tracing::info!("Registered user {} (ID: {})", user.username, user.user_id);

    Ok(Json(user.into()))
}

/// Exchange username and password for a JWT token
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    // Unknown user and wrong password are indistinguishable to the client
    let user = db::queries::get_user_by_username(&state.db, &payload.username)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    if !auth::verify_password(&payload.password, &user.password_hash)? {
        return Err(ApiError::InvalidCredentials);
    }

    let access_token = auth::generate_token(
        user.user_id,
        &user.username,
        &state.config.security.jwt_secret,
    )?;

    tracing::info!("User {} logged in", user.username);

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer".to_string(),
    }))
}

/// Return the profile of the authenticated user
pub async fn get_current_user(
    State(state): State<Arc<AppState>>,
    user: auth::AuthenticatedUser,
) -> Result<Json<UserResponse>, ApiError> {
    let user = db::queries::get_user(&state.db, user.user_id)
        .await?
        .ok_or(ApiError::UserNotFound)?;

    Ok(Json(user.into()))
}

fn validate_registration(payload: &RegisterRequest) -> Result<(), ApiError> {
    if !payload.email.contains('@') {
        return Err(ApiError::Validation("email is not valid".to_string()));
    }
    if payload.username.len() < 3 || payload.username.len() > 50 {
        return Err(ApiError::Validation(
            "username must be between 3 and 50 characters".to_string(),
        ));
    }
    if payload.password.len() < 6 {
        return Err(ApiError::Validation(
            "password must be at least 6 characters".to_string(),
        ));
    }
    Ok(())
}
