pub mod game;
pub mod user;

pub use game::{empty_board, Board, Game, GameStatus, PlayerSymbol, BOARD_SIZE};
pub use user::User;
