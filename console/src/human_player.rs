use std::io::{BufRead, Write};

use tictactoe_common::games::tictactoe::{BOARD_SIZE, Board, Mark, Position};
use tictactoe_common::log;

pub const COORDINATES_PROMPT: &str = "Enter the coordinates: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveInputError {
    NotNumbers,
    OutOfRange,
    Occupied,
}

impl MoveInputError {
    pub fn message(&self) -> &'static str {
        match self {
            MoveInputError::NotNumbers => "You should enter numbers!",
            MoveInputError::OutOfRange => "Coordinates should be from 1 to 3!",
            MoveInputError::Occupied => "This cell is occupied! Choose another one!",
        }
    }
}

/// Parses `"<row> <col>"`, both 1-indexed, into a zero-indexed position.
pub fn parse_coordinates(line: &str) -> Result<Position, MoveInputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [row, col] = tokens.as_slice() else {
        return Err(MoveInputError::NotNumbers);
    };

    let row: i64 = row.parse().map_err(|_| MoveInputError::NotNumbers)?;
    let col: i64 = col.parse().map_err(|_| MoveInputError::NotNumbers)?;

    let range = 1..=BOARD_SIZE as i64;
    if !range.contains(&row) || !range.contains(&col) {
        return Err(MoveInputError::OutOfRange);
    }

    Ok(Position::new(row as usize - 1, col as usize - 1))
}

/// Prompts until the player names an empty cell. Bad lines are reported
/// and discarded; only a closed input stream ends the loop early.
pub fn read_user_move<R: BufRead, W: Write>(
    board: &Board,
    input: &mut R,
    output: &mut W,
) -> Result<Position, String> {
    let mut line = String::new();
    loop {
        write!(output, "{}", COORDINATES_PROMPT)
            .map_err(|e| format!("Failed to write prompt: {}", e))?;
        output.flush().map_err(|e| format!("Failed to flush output: {}", e))?;

        line.clear();
        let bytes_read = input
            .read_line(&mut line)
            .map_err(|e| format!("Failed to read coordinates: {}", e))?;
        if bytes_read == 0 {
            return Err("Input closed while waiting for coordinates".to_string());
        }

        let checked = parse_coordinates(&line).and_then(|position| {
            if board.is_occupied(position.row, position.col) {
                Err(MoveInputError::Occupied)
            } else {
                Ok(position)
            }
        });

        match checked {
            Ok(position) => return Ok(position),
            Err(err) => {
                log!("Rejected coordinates {:?}: {:?}", line.trim_end(), err);
                writeln!(output, "{}", err.message())
                    .map_err(|e| format!("Failed to write output: {}", e))?;
            }
        }
    }
}

/// Reads a legal move and places `mark` there.
pub fn user_move<R: BufRead, W: Write>(
    board: &mut Board,
    mark: Mark,
    input: &mut R,
    output: &mut W,
) -> Result<Position, String> {
    let position = read_user_move(board, input, output)?;
    board.place_at(position, mark);
    Ok(position)
}
