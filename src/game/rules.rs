use crate::models::{Board, GameStatus, PlayerSymbol};

/// The 8 winning triples: 3 rows, 3 columns, 2 diagonals.
/// Scanned in this fixed order so the result is deterministic.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // Rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // Columns
    [0, 4, 8],
    [2, 4, 6], // Diagonals
];

/// Returns the symbol holding a complete line, if any.
///
/// Under valid play at most one line can ever be completed, so the
/// first-match scan order carries no meaning beyond determinism.
pub fn check_winner(board: &Board) -> Option<PlayerSymbol> {
    for [a, b, c] in WINNING_LINES {
        if let Some(symbol) = board[a] {
            if board[b] == Some(symbol) && board[c] == Some(symbol) {
                return Some(symbol);
            }
        }
    }
    None
}

/// True iff no empty cell remains
pub fn is_board_full(board: &Board) -> bool {
    board.iter().all(|cell| cell.is_some())
}

/// Derive the status from the board alone.
///
/// A winning line takes precedence over a full board, so a win on the
/// ninth move reports the winner rather than a draw.
pub fn derive_status(board: &Board) -> GameStatus {
    match check_winner(board) {
        Some(PlayerSymbol::X) => GameStatus::XWon,
        Some(PlayerSymbol::O) => GameStatus::OWon,
        None if is_board_full(board) => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}

/// Check that a move targets an empty cell inside the board.
///
/// Turn order and game status are the caller's responsibility; this
/// function only sees the board, so the symbol does not affect the
/// outcome.
pub fn validate_move(board: &Board, position: i32, _symbol: PlayerSymbol) -> bool {
    if !(0..=8).contains(&position) {
        return false;
    }
    board[position as usize].is_none()
}

/// Returns a copy of the board with `symbol` placed at `position`.
/// The input board is left untouched.
pub fn apply_move(board: &Board, position: usize, symbol: PlayerSymbol) -> Board {
    let mut next = *board;
    next[position] = Some(symbol);
    next
}

/// Strict X/O alternation
pub fn next_player(current: PlayerSymbol) -> PlayerSymbol {
    match current {
        PlayerSymbol::X => PlayerSymbol::O,
        PlayerSymbol::O => PlayerSymbol::X,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::empty_board;
    use crate::models::PlayerSymbol::{O, X};

    /// Build a board from a compact layout string: 'X', 'O' or '.' per cell
    fn board_from(layout: &str) -> Board {
        let mut board = empty_board();
        for (i, c) in layout.chars().enumerate() {
            board[i] = match c {
                'X' => Some(X),
                'O' => Some(O),
                '.' => None,
                other => panic!("unexpected cell '{}'", other),
            };
        }
        board
    }

    #[test]
    fn test_check_winner_detects_every_line() {
        for line in WINNING_LINES {
            for symbol in [X, O] {
                let mut board = empty_board();
                for idx in line {
                    board[idx] = Some(symbol);
                }
                assert_eq!(
                    check_winner(&board),
                    Some(symbol),
                    "line {:?} filled with {:?} should win",
                    line,
                    symbol
                );
            }
        }
    }

    #[test]
    fn test_check_winner_none_on_empty_board() {
        assert_eq!(check_winner(&empty_board()), None);
    }

    #[test]
    fn test_check_winner_none_without_three_in_a_row() {
        // Mixed board, no complete line
        let board = board_from("XOX.O..X.");
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_is_board_full() {
        assert!(!is_board_full(&empty_board()));

        let mut board = board_from("XOXXOXOX.");
        assert!(!is_board_full(&board));

        board[8] = Some(O);
        assert!(is_board_full(&board));
    }

    #[test]
    fn test_derive_status_empty_board_in_progress() {
        assert_eq!(derive_status(&empty_board()), GameStatus::InProgress);
    }

    #[test]
    fn test_derive_status_win_beats_draw_on_full_board() {
        // Full board where X completed the left column on the last move
        let board = board_from("XOOXXOXXO");
        assert!(is_board_full(&board));
        assert_eq!(check_winner(&board), Some(X));
        assert_eq!(derive_status(&board), GameStatus::XWon);
    }

    #[test]
    fn test_derive_status_reports_o_win() {
        let board = board_from("OOOXX.X..");
        assert_eq!(derive_status(&board), GameStatus::OWon);
    }

    #[test]
    fn test_validate_move_rejects_out_of_range() {
        let board = empty_board();
        assert!(!validate_move(&board, -1, X));
        assert!(!validate_move(&board, 9, X));
    }

    #[test]
    fn test_validate_move_rejects_occupied_cell_for_either_symbol() {
        let mut board = empty_board();
        board[4] = Some(O);
        assert!(!validate_move(&board, 4, X));
        assert!(!validate_move(&board, 4, O));
    }

    #[test]
    fn test_validate_move_accepts_any_empty_cell() {
        let mut board = empty_board();
        board[4] = Some(X);
        for position in 0..9 {
            let accepted = validate_move(&board, position, O);
            assert_eq!(accepted, position != 4, "position {}", position);
        }
    }

    #[test]
    fn test_apply_move_only_touches_target_cell() {
        let board = board_from("X........");
        let next = apply_move(&board, 4, O);

        assert_eq!(next[4], Some(O));
        for i in 0..9 {
            if i != 4 {
                assert_eq!(next[i], board[i], "cell {} must be unchanged", i);
            }
        }
        // The input board is a copy-in, copy-out value; the original stays intact
        assert_eq!(board[4], None);
    }

    #[test]
    fn test_next_player_is_an_involution() {
        assert_eq!(next_player(X), O);
        assert_eq!(next_player(O), X);
        assert_eq!(next_player(next_player(X)), X);
        assert_eq!(next_player(next_player(O)), O);
    }

    #[test]
    fn test_full_game_x_wins_top_row() {
        let mut board = empty_board();
        let mut turn = X;
        for position in [0, 4, 1, 8, 2] {
            assert!(validate_move(&board, position, turn));
            board = apply_move(&board, position as usize, turn);
            turn = next_player(turn);
        }

        assert_eq!(check_winner(&board), Some(X));
        assert_eq!(derive_status(&board), GameStatus::XWon);
    }

    #[test]
    fn test_full_game_ends_in_draw() {
        let mut board = empty_board();
        let mut turn = X;
        for position in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            assert!(validate_move(&board, position, turn));
            board = apply_move(&board, position as usize, turn);
            turn = next_player(turn);
        }

        assert!(is_board_full(&board));
        assert_eq!(check_winner(&board), None);
        assert_eq!(derive_status(&board), GameStatus::Draw);
    }
}
