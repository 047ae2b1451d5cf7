use super::board::{BOARD_SIZE, Board};
use super::types::{GameStatus, Mark, Position};
use super::win_detector::game_status;

/// One game: the board, whose turn it is, and the result once decided.
/// X always moves first.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<Position>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn reset(&mut self) {
        self.board.reset();
        self.current_mark = Mark::X;
        self.status = GameStatus::InProgress;
        self.last_move = None;
    }

    pub fn place_mark(&mut self, position: Position) -> Result<(), String> {
        if self.status.is_over() {
            return Err("Game is already over".to_string());
        }

        if position.row >= BOARD_SIZE || position.col >= BOARD_SIZE {
            return Err("Position out of bounds".to_string());
        }

        if self.board.is_occupied(position.row, position.col) {
            return Err("Cell is already marked".to_string());
        }

        self.board.place_at(position, self.current_mark);
        self.record_move(position);
        Ok(())
    }

    /// Accounts for a mark already written to `board` by a strategy: updates
    /// the status and hands the turn over.
    pub fn record_move(&mut self, position: Position) {
        self.last_move = Some(position);
        self.status = game_status(&self.board);

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == Mark::X {
            Mark::O
        } else {
            Mark::X
        };
    }
}
