use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub user_id: i64,
    pub email: String,
    /// Unique login name, 3-50 characters
    pub username: String,
    /// Bcrypt hash, never exposed over the API
    #[serde(skip)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
