mod config;
mod game_loop;
mod human_player;

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use tictactoe_common::command::{MenuCommand, parse_menu_tokens};
use tictactoe_common::games::SessionRng;
use tictactoe_common::{log, logger};

use config::{CONFIG_FILE, Config, get_config_manager};
use game_loop::{BAD_PARAMETERS, GameLoop};

#[derive(Parser)]
#[command(
    name = "tictactoe",
    about = "Tic-tac-toe against easy, medium and hard bots"
)]
struct Args {
    /// YAML config file; defaults apply when it does not exist.
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    /// Seed for the bots' random moves. Overrides the config file.
    #[arg(long)]
    seed: Option<u64>,

    /// Write diagnostic log lines to stderr.
    #[arg(long)]
    verbose: bool,

    /// Play a single game instead of the menu, e.g. `start user hard`.
    #[arg(trailing_var_arg = true)]
    command: Vec<String>,
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    let args = Args::parse();
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(args, stdin.lock(), stdout.lock())
}

/// Command-line seed first, then the config file's.
fn session_seed(args: &Args, config: &Config) -> Option<u64> {
    args.seed.or(config.bot.seed)
}

fn logging_enabled(args: &Args, config: &Config) -> bool {
    args.verbose || config.log.enabled
}

/// Exit code 2 means the trailing command did not parse; `Bad parameters!`
/// goes to `output` like it does in the menu.
fn run<R: BufRead, W: Write>(
    args: Args,
    input: R,
    mut output: W,
) -> Result<ExitCode, Box<dyn Error>> {
    let config = get_config_manager(&args.config).get_config()?;

    if logging_enabled(&args, &config) {
        logger::init_logger(config.log.prefix.clone());
    }
    log!("Loaded config from {}", args.config);

    if !args.command.is_empty() && parse_menu_tokens(&args.command).is_none() {
        writeln!(output, "{}", BAD_PARAMETERS)?;
        return Ok(ExitCode::from(2));
    }

    let rng = SessionRng::from_optional_seed(session_seed(&args, &config));
    let mut game_loop = GameLoop::new(input, output, rng, config.display.empty_cell);

    match parse_menu_tokens(&args.command) {
        Some(MenuCommand::Start { player_x, player_o }) => {
            game_loop.play_game(player_x, player_o)?;
        }
        Some(MenuCommand::Exit) => {}
        None => game_loop.run_menu()?,
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use crate::config::{BotConfig, LogConfig};

    const MISSING_CONFIG: &str = "tictactoe_console_test_missing_config.yaml";

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["tictactoe", "--config", MISSING_CONFIG];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    fn run_with(extra: &[&str], input: &str) -> (ExitCode, String) {
        let mut output = Vec::new();
        let code = run(args(extra), Cursor::new(input.as_bytes()), &mut output).unwrap();
        (code, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_bad_trailing_command_exits_with_code_two() {
        for command in [&["start", "user"][..], &["start", "easy", "expert"], &["play"]] {
            let (code, output) = run_with(command, "");

            assert_eq!(code, ExitCode::from(2), "command {:?}", command);
            assert_eq!(output.trim_end(), BAD_PARAMETERS);
        }
    }

    #[test]
    fn test_trailing_bot_game_plays_to_the_end() {
        let (code, output) = run_with(&["--seed", "5", "start", "easy", "hard"], "");

        assert_eq!(code, ExitCode::SUCCESS);
        let last_line = output.lines().last().unwrap();
        assert!(
            ["X wins", "O wins", "Draw"].contains(&last_line),
            "unexpected result line {:?}",
            last_line
        );
        assert!(!output.contains(BAD_PARAMETERS));
    }

    #[test]
    fn test_same_seed_replays_the_same_game() {
        let first = run_with(&["--seed", "17", "start", "easy", "easy"], "");
        let second = run_with(&["--seed", "17", "start", "easy", "easy"], "");

        assert_eq!(first, second);
    }

    #[test]
    fn test_trailing_exit_plays_nothing() {
        let (code, output) = run_with(&["exit"], "");

        assert_eq!(code, ExitCode::SUCCESS);
        assert!(output.is_empty());
    }

    #[test]
    fn test_without_command_runs_the_menu() {
        let (code, output) = run_with(&[], "start\nexit\n");

        assert_eq!(code, ExitCode::SUCCESS);
        assert!(output.contains(BAD_PARAMETERS));
        assert_eq!(output.matches("Input command: ").count(), 2);
    }

    #[test]
    fn test_session_seed_prefers_command_line() {
        let config = Config {
            bot: BotConfig { seed: Some(3) },
            ..Config::default()
        };

        assert_eq!(session_seed(&args(&["--seed", "9"]), &config), Some(9));
        assert_eq!(session_seed(&args(&[]), &config), Some(3));
        assert_eq!(session_seed(&args(&[]), &Config::default()), None);
    }

    #[test]
    fn test_logging_enabled_by_flag_or_config() {
        let logging_config = Config {
            log: LogConfig {
                enabled: true,
                prefix: None,
            },
            ..Config::default()
        };

        assert!(!logging_enabled(&args(&[]), &Config::default()));
        assert!(logging_enabled(&args(&["--verbose"]), &Config::default()));
        assert!(logging_enabled(&args(&[]), &logging_config));
    }
}
