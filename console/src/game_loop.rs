use std::io::{BufRead, Write};

use tictactoe_common::command::{MenuCommand, PlayerKind, parse_menu_command};
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{GameStatus, Mark, TicTacToeGameState, make_bot_move};
use tictactoe_common::log;

use crate::human_player::user_move;

pub const COMMAND_PROMPT: &str = "Input command: ";
pub const BAD_PARAMETERS: &str = "Bad parameters!";

/// Drives the menu and the games over any line-based input and output.
pub struct GameLoop<R, W> {
    input: R,
    output: W,
    rng: SessionRng,
    empty_cell: char,
}

impl<R: BufRead, W: Write> GameLoop<R, W> {
    pub fn new(input: R, output: W, rng: SessionRng, empty_cell: char) -> Self {
        Self {
            input,
            output,
            rng,
            empty_cell,
        }
    }

    /// Reads commands until `exit` or end of input.
    pub fn run_menu(&mut self) -> Result<(), String> {
        let mut line = String::new();
        loop {
            self.write(COMMAND_PROMPT)?;

            line.clear();
            let bytes_read = self
                .input
                .read_line(&mut line)
                .map_err(|e| format!("Failed to read command: {}", e))?;
            if bytes_read == 0 {
                log!("Input closed, leaving menu");
                return Ok(());
            }

            match parse_menu_command(&line) {
                Some(MenuCommand::Exit) => return Ok(()),
                Some(MenuCommand::Start { player_x, player_o }) => {
                    self.play_game(player_x, player_o)?;
                }
                None => self.write_line(BAD_PARAMETERS)?,
            }
        }
    }

    /// Plays one game to the end; `player_x` moves first.
    pub fn play_game(
        &mut self,
        player_x: PlayerKind,
        player_o: PlayerKind,
    ) -> Result<GameStatus, String> {
        log!("Starting game: X={} O={} (seed {})", player_x, player_o, self.rng.seed());

        let mut state = TicTacToeGameState::new();
        self.print_board(&state)?;

        while !state.is_over() {
            let player = if state.current_mark == Mark::X {
                player_x
            } else {
                player_o
            };

            match player {
                PlayerKind::User => {
                    let mark = state.current_mark;
                    let position =
                        user_move(&mut state.board, mark, &mut self.input, &mut self.output)?;
                    state.record_move(position);
                }
                PlayerKind::Bot(difficulty) => {
                    self.write_line(&format!("Making move level \"{}\"", difficulty))?;
                    let mark = state.current_mark;
                    let position = make_bot_move(&mut state.board, difficulty, mark, &mut self.rng)
                        .ok_or_else(|| format!("{} bot found no empty cell", difficulty))?;
                    state.record_move(position);
                }
            }

            self.print_board(&state)?;
        }

        log!("Game finished: {}", state.status);
        self.write_line(&state.status.to_string())?;
        Ok(state.status)
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    fn print_board(&mut self, state: &TicTacToeGameState) -> Result<(), String> {
        let rendered = state.board.render(self.empty_cell);
        self.write_line(&rendered)
    }

    fn write(&mut self, text: &str) -> Result<(), String> {
        write!(self.output, "{}", text).map_err(|e| format!("Failed to write output: {}", e))?;
        self.output
            .flush()
            .map_err(|e| format!("Failed to flush output: {}", e))
    }

    fn write_line(&mut self, text: &str) -> Result<(), String> {
        writeln!(self.output, "{}", text).map_err(|e| format!("Failed to write output: {}", e))
    }
}
