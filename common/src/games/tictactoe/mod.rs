mod board;
mod bot_controller;
mod game_state;
mod minimax;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board};
pub use bot_controller::{
    calculate_heuristic_move, calculate_move, calculate_random_move, find_winning_move,
    make_bot_move, make_bot_move_by_label,
};
pub use game_state::TicTacToeGameState;
pub use minimax::{DRAW_SCORE, LOSS_SCORE, WIN_SCORE, calculate_minimax_move, hard_move, minimax};
pub use types::{Difficulty, GameStatus, Mark, Position};
pub use win_detector::{LINES, game_status, has_win, is_full, is_terminal, winning_line};
