use crate::{
    auth::AuthenticatedUser,
    db,
    error::ApiError,
    game::rules,
    models::{Game, GameStatus},
    AppState,
};
use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateGameRequest {
    /// ID of the player who will play as O; the creator plays as X
    pub player_o_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    /// Board index 0-8, row-major
    pub position: i32,
}

/// Create a new game between the caller (X) and an opponent (O)
pub async fn create_game(
    State(state): State<Arc<AppState>>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateGameRequest>,
) -> Result<Json<Game>, ApiError> {
    let opponent = db::queries::get_user(&state.db, payload.player_o_id)
        .await?
        .ok_or(ApiError::UserNotFound)?;

    let game = db::queries::create_game(&state.db, user.user_id, opponent.user_id).await?;

    tracing::info!(
        "Created game {} between {} (X) and {} (O)",
        game.game_id,
        user.user_id,
        opponent.user_id
    );

    Ok(Json(game))
}

/// List all games the caller participates in
pub async fn list_games(
    State(state): State<Arc<AppState>>,
    user: AuthenticatedUser,
) -> Result<Json<Vec<Game>>, ApiError> {
    let games = db::queries::list_games_for_user(&state.db, user.user_id).await?;
    Ok(Json(games))
}

/// Fetch a single game; only its participants may view it
pub async fn get_game(
    State(state): State<Arc<AppState>>,
    user: AuthenticatedUser,
    Path(game_id): Path<Uuid>,
) -> Result<Json<Game>, ApiError> {
    let game = db::queries::get_game(&state.db, game_id)
        .await?
        .ok_or(ApiError::GameNotFound)?;

    if game.symbol_of(user.user_id).is_none() {
        return Err(ApiError::Forbidden);
    }

    Ok(Json(game))
}

/// Submit a move.
///
/// Ordering of the checks matters: existence, participation, terminal
/// status, turn, then cell validity. The engine is only consulted once
/// the game-level checks have passed. The final write is guarded by the
/// version read with the board, so two racing moves cannot both land.
pub async fn make_move(
    State(state): State<Arc<AppState>>,
    user: AuthenticatedUser,
    Path(game_id): Path<Uuid>,
    Json(payload): Json<MoveRequest>,
) -> Result<Json<Game>, ApiError> {
    let game = db::queries::get_game(&state.db, game_id)
        .await?
        .ok_or(ApiError::GameNotFound)?;

    let symbol = game.symbol_of(user.user_id).ok_or(ApiError::Forbidden)?;

    if game.status.is_terminal() {
        return Err(ApiError::InvalidMove);
    }
    if symbol != game.current_player {
        return Err(ApiError::InvalidTurn);
    }
    if !rules::validate_move(&game.board.0, payload.position, symbol) {
        return Err(ApiError::InvalidMove);
    }

    let board = rules::apply_move(&game.board.0, payload.position as usize, symbol);
    let status = rules::derive_status(&board);

    // The turn only advances while the game is still running; terminal
    // games keep their last turn value untouched
    let current_player = if status == GameStatus::InProgress {
        rules::next_player(symbol)
    } else {
        game.current_player
    };

    let updated = db::queries::update_game_after_move(
        &state.db,
        game_id,
        &board,
        status,
        current_player,
        game.version,
    )
    .await?
    .ok_or(ApiError::Conflict)?;

    tracing::info!(
        "Player {} played position {} in game {} (status: {:?})",
        user.user_id,
        payload.position,
        game_id,
        updated.status
    );

    Ok(Json(updated))
}
