use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Every failure surfaced by the API, one variant per user-visible category
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("email already registered")]
    EmailTaken,

    #[error("username already taken")]
    UsernameTaken,

    #[error("incorrect username or password")]
    InvalidCredentials,

    #[error("user not found")]
    UserNotFound,

    #[error("game not found")]
    GameNotFound,

    #[error("not a participant in this game")]
    Forbidden,

    #[error("not your turn")]
    InvalidTurn,

    #[error("invalid move")]
    InvalidMove,

    #[error("game was updated concurrently, reload and retry")]
    Conflict,

    #[error("database error")]
    Database(#[from] sqlx::Error),

    #[error("password hashing error")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("token error")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_)
            | ApiError::EmailTaken
            | ApiError::UsernameTaken
            | ApiError::InvalidTurn
            | ApiError::InvalidMove => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::UserNotFound | ApiError::GameNotFound => StatusCode::NOT_FOUND,
            ApiError::Conflict => StatusCode::CONFLICT,
            ApiError::Database(_) | ApiError::Hash(_) | ApiError::Token(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Internal failures carry details the client should not see
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("internal error: {:?}", self);
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
