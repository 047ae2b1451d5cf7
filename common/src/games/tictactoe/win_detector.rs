use super::board::{BOARD_SIZE, Board};
use super::types::{GameStatus, Mark, Position};

/// The 8 winning triples: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[(usize, usize); BOARD_SIZE]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

pub fn has_win(board: &Board, mark: Mark) -> bool {
    winning_line(board, mark).is_some()
}

pub fn winning_line(board: &Board, mark: Mark) -> Option<[Position; BOARD_SIZE]> {
    if mark == Mark::Empty {
        return None;
    }

    LINES
        .into_iter()
        .find(|line| line.iter().all(|&(row, col)| board.get(row, col) == mark))
        .map(|line| line.map(|(row, col)| Position::new(row, col)))
}

/// True when no cell is empty, whether or not someone has won.
pub fn is_full(board: &Board) -> bool {
    board
        .rows()
        .iter()
        .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
}

pub fn is_terminal(board: &Board) -> bool {
    has_win(board, Mark::X) || has_win(board, Mark::O) || is_full(board)
}

pub fn game_status(board: &Board) -> GameStatus {
    if has_win(board, Mark::X) {
        GameStatus::XWon
    } else if has_win(board, Mark::O) {
        GameStatus::OWon
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
