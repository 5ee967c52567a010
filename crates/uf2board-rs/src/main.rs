use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::*;
use uf2board_core::registry::BoardRegistry;

use std::io::Write;

use crate::{check::check, list::list, show::show};

mod check;
mod list;
mod show;

#[derive(Parser, Debug)]
enum Command {
    /// List every registered board
    List,
    /// Print one board's full descriptor
    #[command(arg_required_else_help = true)]
    Show {
        /// Board name (libra_mini, cyber60_d, etc.)
        #[clap(value_parser = board_parser)]
        board: String,
    },
    /// Validate every registered descriptor
    Check,
}

fn board_parser(s: &str) -> Result<String, String> {
    let registry = BoardRegistry::builtin().map_err(|err| err.to_string())?;
    match registry.resolve(s) {
        Ok(board) => Ok(board.name.to_string()),
        Err(err) => Err(err.to_string()),
    }
}

#[derive(Parser, Debug, Default)]
#[clap(version, about, long_about = None)]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Set the logging verbosity
    #[clap(short, long, value_enum, global = true, default_value_t = LogLevel::Info)]
    verbose: LogLevel,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Off => LevelFilter::Off,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(Env::default())
        .filter_level(cli.verbose.into())
        .target(env_logger::Target::Stdout)
        .format(|buf, record| {
            let level = record.level();
            if level == Level::Info {
                writeln!(buf, "{}", record.args())
            } else {
                writeln!(buf, "{}: {}", record.level(), record.args())
            }
        })
        .init();

    let command = match cli.command {
        Some(command) => command,
        None => return Ok(()),
    };

    // Fails fast with the offending board name if any built-in descriptor
    // is malformed; no subcommand runs over a bad registry.
    let registry = BoardRegistry::builtin()?;

    match command {
        Command::List => list(registry),
        Command::Show { board } => {
            let board = registry
                .resolve(&board)
                .expect("This already has been verified by board_parser");

            show(board)
        }
        Command::Check => check(registry),
    }
}
