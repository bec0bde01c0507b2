use sqlx::types::Json;
use sqlx::{PgPool, Result};
use uuid::Uuid;

use crate::models::{empty_board, Board, Game, GameStatus, PlayerSymbol, User};

// User queries

pub async fn create_user(
    pool: &PgPool,
    email: &str,
    username: &str,
    password_hash: &str,
) -> Result<User> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (email, username, password_hash)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(email)
    .bind(username)
    .bind(password_hash)
    .fetch_one(pool)
    .await
}

pub async fn get_user(pool: &PgPool, user_id: i64) -> Result<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

pub async fn get_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
}

pub async fn get_user_by_username(pool: &PgPool, username: &str) -> Result<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
        .bind(username)
        .fetch_optional(pool)
        .await
}

// Game queries

pub async fn create_game(pool: &PgPool, player_x_id: i64, player_o_id: i64) -> Result<Game> {
    sqlx::query_as::<_, Game>(
        r#"
        INSERT INTO games (game_id, player_x_id, player_o_id, current_player, board, status)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(player_x_id)
    .bind(player_o_id)
    .bind(PlayerSymbol::X)
    .bind(Json(empty_board()))
    .bind(GameStatus::InProgress)
    .fetch_one(pool)
    .await
}

pub async fn get_game(pool: &PgPool, game_id: Uuid) -> Result<Option<Game>> {
    sqlx::query_as::<_, Game>("SELECT * FROM games WHERE game_id = $1")
        .bind(game_id)
        .fetch_optional(pool)
        .await
}

/// All games a user participates in, either role, newest first
pub async fn list_games_for_user(pool: &PgPool, user_id: i64) -> Result<Vec<Game>> {
    sqlx::query_as::<_, Game>(
        r#"
        SELECT * FROM games
        WHERE player_x_id = $1 OR player_o_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Persist the result of an accepted move, guarded by the version read
/// alongside the board.
///
/// Returns `None` when the row moved on since that read (another move
/// won the race); the caller surfaces this as a conflict.
pub async fn update_game_after_move(
    pool: &PgPool,
    game_id: Uuid,
    board: &Board,
    status: GameStatus,
    current_player: PlayerSymbol,
    expected_version: i32,
) -> Result<Option<Game>> {
    sqlx::query_as::<_, Game>(
        r#"
        UPDATE games
        SET board = $2,
            status = $3,
            current_player = $4,
            version = version + 1,
            updated_at = NOW()
        WHERE game_id = $1 AND version = $5
        RETURNING *
        "#,
    )
    .bind(game_id)
    .bind(Json(*board))
    .bind(status)
    .bind(current_player)
    .bind(expected_version)
    .fetch_optional(pool)
    .await
}
