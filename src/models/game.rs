use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Number of cells on the board (3x3, row-major)
pub const BOARD_SIZE: usize = 9;

/// The board is a fixed 9-cell grid. Indices 0-8 map row-major:
/// 0 1 2 / 3 4 5 / 6 7 8. `None` is an empty cell.
pub type Board = [Option<PlayerSymbol>; BOARD_SIZE];

/// A fresh board with no moves played
pub fn empty_board() -> Board {
    [None; BOARD_SIZE]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "VARCHAR")]
pub enum PlayerSymbol {
    X,
    O,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "VARCHAR", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

impl GameStatus {
    /// Terminal games accept no further moves
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Game {
    pub game_id: Uuid,
    pub player_x_id: i64,
    pub player_o_id: i64,
    /// Whose move is next; left untouched once the game is terminal
    pub current_player: PlayerSymbol,
    pub board: Json<Board>,
    pub status: GameStatus,
    /// Optimistic-lock counter, bumped on every accepted move
    #[serde(skip)]
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Game {
    /// Returns the symbol a user plays in this game, if they participate
    pub fn symbol_of(&self, user_id: i64) -> Option<PlayerSymbol> {
        if user_id == self.player_x_id {
            Some(PlayerSymbol::X)
        } else if user_id == self.player_o_id {
            Some(PlayerSymbol::O)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_symbol_serializes_as_single_letter() {
        assert_eq!(serde_json::to_string(&PlayerSymbol::X).unwrap(), "\"X\"");
        assert_eq!(serde_json::to_string(&PlayerSymbol::O).unwrap(), "\"O\"");
    }

    #[test]
    fn test_game_status_string_values() {
        // Wire values shared with the database columns
        assert_eq!(
            serde_json::to_string(&GameStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        assert_eq!(serde_json::to_string(&GameStatus::XWon).unwrap(), "\"x_won\"");
        assert_eq!(serde_json::to_string(&GameStatus::OWon).unwrap(), "\"o_won\"");
        assert_eq!(serde_json::to_string(&GameStatus::Draw).unwrap(), "\"draw\"");
    }

    #[test]
    fn test_only_in_progress_is_non_terminal() {
        assert!(!GameStatus::InProgress.is_terminal());
        assert!(GameStatus::XWon.is_terminal());
        assert!(GameStatus::OWon.is_terminal());
        assert!(GameStatus::Draw.is_terminal());
    }

    #[test]
    fn test_empty_board_serializes_as_nine_nulls() {
        let board = empty_board();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, "[null,null,null,null,null,null,null,null,null]");
    }

    #[test]
    fn test_board_round_trips_through_json() {
        let mut board = empty_board();
        board[0] = Some(PlayerSymbol::X);
        board[4] = Some(PlayerSymbol::O);

        let json = serde_json::to_string(&board).unwrap();
        let parsed: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, board);
    }

    #[test]
    fn test_symbol_of_maps_roles() {
        let game = Game {
            game_id: Uuid::new_v4(),
            player_x_id: 1,
            player_o_id: 2,
            current_player: PlayerSymbol::X,
            board: Json(empty_board()),
            status: GameStatus::InProgress,
            version: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        assert_eq!(game.symbol_of(1), Some(PlayerSymbol::X));
        assert_eq!(game.symbol_of(2), Some(PlayerSymbol::O));
        assert_eq!(game.symbol_of(3), None);
    }
}
