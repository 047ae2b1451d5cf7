use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::minimax::calculate_minimax_move;
use super::types::{Difficulty, Mark, Position};

pub fn calculate_move(
    difficulty: Difficulty,
    board: &Board,
    mark: Mark,
    rng: &mut SessionRng,
) -> Option<Position> {
    match difficulty {
        Difficulty::Easy => calculate_random_move(board, rng),
        Difficulty::Medium => calculate_heuristic_move(board, mark, rng),
        Difficulty::Hard => calculate_minimax_move(board, mark),
    }
}

/// Lets the bot of `difficulty` play `mark`. Returns the cell it took, or
/// `None` when the board had no empty cell.
pub fn make_bot_move(
    board: &mut Board,
    difficulty: Difficulty,
    mark: Mark,
    rng: &mut SessionRng,
) -> Option<Position> {
    let position = calculate_move(difficulty, board, mark, rng)?;
    board.place_at(position, mark);
    log!("{} bot placed {} at {:?}", difficulty, mark, position);
    Some(position)
}

/// Same as [`make_bot_move`] for a difficulty given as text. An unknown
/// label leaves the board untouched and is not an error.
pub fn make_bot_move_by_label(
    board: &mut Board,
    label: &str,
    mark: Mark,
    rng: &mut SessionRng,
) -> Option<Position> {
    match label.parse::<Difficulty>() {
        Ok(difficulty) => make_bot_move(board, difficulty, mark, rng),
        Err(_) => {
            log!("Ignoring bot move for unknown difficulty {:?}", label);
            None
        }
    }
}

pub fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<Position> {
    let available_moves = board.available_moves();
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}

/// Win now if possible, otherwise block the opponent's immediate win,
/// otherwise play randomly. Looks only one move ahead.
pub fn calculate_heuristic_move(
    board: &Board,
    mark: Mark,
    rng: &mut SessionRng,
) -> Option<Position> {
    if let Some(position) = find_winning_move(board, mark) {
        return Some(position);
    }

    if let Some(position) = mark
        .opponent()
        .and_then(|opponent_mark| find_winning_move(board, opponent_mark))
    {
        return Some(position);
    }

    calculate_random_move(board, rng)
}

/// First empty cell, scanning row by row, where placing `mark` completes a
/// line.
pub fn find_winning_move(board: &Board, mark: Mark) -> Option<Position> {
    board
        .available_moves()
        .into_iter()
        .find(|&position| board.with_mark(position, mark).has_win(mark))
}
