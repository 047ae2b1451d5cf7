pub mod command;
pub mod config;
pub mod games;
pub mod logger;

pub use command::{CommandError, MenuCommand, PlayerKind};
