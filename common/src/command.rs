use std::fmt;
use std::str::FromStr;

use crate::games::tictactoe::Difficulty;

pub const START_KEYWORD: &str = "start";
pub const EXIT_KEYWORD: &str = "exit";
pub const USER_LABEL: &str = "user";

/// Raised when a validator is called without its argument. This is a caller
/// bug, not bad user input, so it is never folded into `Ok(false)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    MissingInput,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::MissingInput => write!(f, "missing input"),
        }
    }
}

impl std::error::Error for CommandError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    User,
    Bot(Difficulty),
}

impl FromStr for PlayerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == USER_LABEL {
            return Ok(PlayerKind::User);
        }
        s.parse::<Difficulty>()
            .map(PlayerKind::Bot)
            .map_err(|_| format!("Unknown player: {:?}", s))
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerKind::User => f.write_str(USER_LABEL),
            PlayerKind::Bot(difficulty) => f.write_str(difficulty.label()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Start {
        player_x: PlayerKind,
        player_o: PlayerKind,
    },
    Exit,
}

/// Accepts exactly `user`, `easy`, `medium` and `hard`, case-sensitive.
pub fn is_valid_player_label(label: Option<&str>) -> Result<bool, CommandError> {
    let label = label.ok_or(CommandError::MissingInput)?;
    Ok(label.parse::<PlayerKind>().is_ok())
}

/// Accepts `start <player> <player>` and nothing else.
pub fn is_valid_game_command<S: AsRef<str>>(tokens: Option<&[S]>) -> Result<bool, CommandError> {
    let tokens = tokens.ok_or(CommandError::MissingInput)?;
    if tokens.len() != 3 || tokens[0].as_ref() != START_KEYWORD {
        return Ok(false);
    }
    Ok(is_valid_player_label(Some(tokens[1].as_ref()))?
        && is_valid_player_label(Some(tokens[2].as_ref()))?)
}

/// Parses one line typed at the menu prompt. `None` means bad parameters.
pub fn parse_menu_command(line: &str) -> Option<MenuCommand> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    parse_menu_tokens(&tokens)
}

pub fn parse_menu_tokens<S: AsRef<str>>(tokens: &[S]) -> Option<MenuCommand> {
    if let [only] = tokens
        && only.as_ref() == EXIT_KEYWORD
    {
        return Some(MenuCommand::Exit);
    }

    if !is_valid_game_command(Some(tokens)).ok()? {
        return None;
    }

    Some(MenuCommand::Start {
        player_x: tokens[1].as_ref().parse().ok()?,
        player_o: tokens[2].as_ref().parse().ok()?,
    })
}
