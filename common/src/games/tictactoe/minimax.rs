use super::board::Board;
use super::bot_controller::find_winning_move;
use super::types::{Mark, Position};

pub const WIN_SCORE: i32 = 10;
pub const LOSS_SCORE: i32 = -10;
pub const DRAW_SCORE: i32 = 0;

/// Scores `board` for `ai_mark` by exhaustive search, with `is_maximizing`
/// telling whose turn it is (`true` means `ai_mark` moves next).
///
/// Terminal positions score [`WIN_SCORE`], [`LOSS_SCORE`] or [`DRAW_SCORE`]
/// regardless of how many plies it took to reach them, so a quick win and a
/// slow win are equal. `Mark::Empty` is not a player and always scores as a
/// draw.
pub fn minimax(board: &Board, is_maximizing: bool, ai_mark: Mark) -> i32 {
    match ai_mark.opponent() {
        Some(opponent_mark) => search(board, is_maximizing, ai_mark, opponent_mark),
        None => DRAW_SCORE,
    }
}

fn search(board: &Board, is_maximizing: bool, ai_mark: Mark, opponent_mark: Mark) -> i32 {
    if board.has_win(ai_mark) {
        return WIN_SCORE;
    }
    if board.has_win(opponent_mark) {
        return LOSS_SCORE;
    }

    let mover = if is_maximizing { ai_mark } else { opponent_mark };
    let scores = board
        .available_moves()
        .into_iter()
        .map(|position| {
            search(
                &board.with_mark(position, mover),
                !is_maximizing,
                ai_mark,
                opponent_mark,
            )
        });

    let best = if is_maximizing { scores.max() } else { scores.min() };
    best.unwrap_or(DRAW_SCORE)
}

/// Best cell for `mark` to move to. An immediate win is taken first, since a
/// block that still forces a win scores the same. Other ties keep the first
/// cell in row-major order, so the choice is deterministic.
pub fn calculate_minimax_move(board: &Board, mark: Mark) -> Option<Position> {
    mark.opponent()?;

    if let Some(position) = find_winning_move(board, mark) {
        return Some(position);
    }

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for position in board.available_moves() {
        let score = minimax(&board.with_mark(position, mark), false, mark);
        if score > best_score {
            best_score = score;
            best_move = Some(position);
        }
    }

    best_move
}

/// Picks the minimax move for `mark` and commits it to the board.
pub fn hard_move(board: &mut Board, mark: Mark) -> Option<Position> {
    let position = calculate_minimax_move(board, mark)?;
    board.place_at(position, mark);
    Some(position)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimax_scores_available_win_as_ten() {
        let board = Board::from_layout(["XX.", "...", "..."]);

        assert_eq!(minimax(&board, true, Mark::X), WIN_SCORE);
    }

    #[test]
    fn test_minimax_scores_opponent_win_as_minus_ten() {
        let board = Board::from_layout(["OO.", "...", "..."]);

        assert_eq!(minimax(&board, false, Mark::X), LOSS_SCORE);
    }

    #[test]
    fn test_minimax_scores_drawn_board_as_zero() {
        let board = Board::from_layout(["XOX", "XOO", "OXX"]);

        assert_eq!(minimax(&board, true, Mark::X), DRAW_SCORE);
        assert_eq!(minimax(&board, false, Mark::X), DRAW_SCORE);
    }

    #[test]
    fn test_minimax_scores_finished_win_without_searching() {
        let board = Board::from_layout(["XXX", "OO.", "..."]);

        assert_eq!(minimax(&board, false, Mark::X), WIN_SCORE);
        assert_eq!(minimax(&board, true, Mark::O), LOSS_SCORE);
    }

    #[test]
    fn test_minimax_empty_board_is_a_draw() {
        assert_eq!(minimax(&Board::new(), true, Mark::X), DRAW_SCORE);
    }

    #[test]
    fn test_minimax_does_not_touch_the_board() {
        let board = Board::from_layout(["X..", ".O.", "..."]);
        let before = board;

        minimax(&board, true, Mark::X);

        assert_eq!(board, before);
    }

    #[test]
    fn test_empty_mark_is_not_a_player() {
        let board = Board::from_layout(["XX.", "...", "..."]);

        assert_eq!(minimax(&board, true, Mark::Empty), DRAW_SCORE);
        assert_eq!(calculate_minimax_move(&board, Mark::Empty), None);
    }

    #[test]
    fn test_hard_move_takes_the_win() {
        let mut board = Board::from_layout(["XX.", "...", "..."]);

        assert_eq!(hard_move(&mut board, Mark::X), Some(Position::new(0, 2)));
        assert_eq!(board.get(0, 2), Mark::X);
    }

    #[test]
    fn test_hard_move_blocks_the_opponent() {
        let mut board = Board::from_layout(["OO.", ".X.", "..."]);

        hard_move(&mut board, Mark::X);

        assert_eq!(board.get(0, 2), Mark::X);
    }

    #[test]
    fn test_hard_move_prefers_winning_over_blocking() {
        // X can win on (1,2); O threatens (0,2), which comes first in scan order.
        let mut board = Board::from_layout(["OO.", "XX.", "OX."]);

        assert_eq!(hard_move(&mut board, Mark::X), Some(Position::new(1, 2)));
        assert!(board.has_win(Mark::X));
    }

    #[test]
    fn test_hard_move_wins_now_when_block_also_forces_a_win() {
        // Blocking at (1,1) comes first and still wins later; (2,2) wins now.
        let mut board = Board::from_layout(["XOX", "O.X", ".O."]);

        assert_eq!(hard_move(&mut board, Mark::X), Some(Position::new(2, 2)));
        assert!(board.has_win(Mark::X));
    }

    #[test]
    fn test_hard_move_ties_keep_first_cell() {
        // Every opening move draws with perfect play.
        let mut board = Board::new();

        assert_eq!(hard_move(&mut board, Mark::X), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_hard_move_on_full_board_places_nothing() {
        let mut board = Board::from_layout(["XOX", "XOO", "OXX"]);
        let before = board;

        assert_eq!(hard_move(&mut board, Mark::O), None);
        assert_eq!(board, before);
    }

    #[test]
    fn test_hard_against_hard_is_a_draw() {
        let mut board = Board::new();
        let mut mark = Mark::X;

        while !board.is_terminal() {
            hard_move(&mut board, mark).unwrap();
            mark = mark.opponent().unwrap();
        }

        assert!(!board.has_win(Mark::X));
        assert!(!board.has_win(Mark::O));
        assert!(board.is_full());
    }
}
