use std::fmt;

use super::types::{Mark, Position};
use super::win_detector;

pub const BOARD_SIZE: usize = 3;

/// The 3x3 grid. Cheap to copy, so search code works on copies instead of
/// undoing moves.
///
/// Coordinates are zero-indexed and must be in `0..BOARD_SIZE`; indexing out
/// of range panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from three row strings of `X`, `O` and any other
    /// character for an empty cell.
    #[cfg(test)]
    pub(crate) fn from_layout(rows: [&str; BOARD_SIZE]) -> Self {
        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().take(BOARD_SIZE).enumerate() {
                match ch {
                    'X' => board.place(row, col, Mark::X),
                    'O' => board.place(row, col, Mark::O),
                    _ => {}
                }
            }
        }
        board
    }

    pub fn reset(&mut self) {
        self.cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
    }

    pub fn get(&self, row: usize, col: usize) -> Mark {
        self.cells[row][col]
    }

    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.cells[row][col] != Mark::Empty
    }

    pub fn is_cell_empty(&self, row: usize, col: usize) -> bool {
        !self.is_occupied(row, col)
    }

    /// Writes `mark` without checking the cell; callers check emptiness first.
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) {
        self.cells[row][col] = mark;
    }

    pub fn place_at(&mut self, position: Position, mark: Mark) {
        self.place(position.row, position.col, mark);
    }

    pub fn with_mark(&self, position: Position, mark: Mark) -> Self {
        let mut next = *self;
        next.place_at(position, mark);
        next
    }

    pub fn rows(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Empty cells in row-major order.
    pub fn available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    pub fn has_win(&self, mark: Mark) -> bool {
        win_detector::has_win(self, mark)
    }

    pub fn is_full(&self) -> bool {
        win_detector::is_full(self)
    }

    pub fn is_terminal(&self) -> bool {
        win_detector::is_terminal(self)
    }

    pub fn render(&self, empty_cell: char) -> String {
        let border = "-".repeat(BOARD_SIZE * 2 + 3);
        let mut out = String::with_capacity((border.len() + 1) * (BOARD_SIZE + 2));
        out.push_str(&border);
        out.push('\n');
        for row in &self.cells {
            out.push('|');
            for cell in row {
                out.push(' ');
                out.push(cell.to_char().unwrap_or(empty_cell));
            }
            out.push_str(" |\n");
        }
        out.push_str(&border);
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(' '))
    }
}
