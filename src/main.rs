#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

use std::{io::Write, process::ExitCode};

use clap::Parser;
use dragonchess::{
    repl::{Settings, repl},
    side::Side,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Seed for the `random` command
    #[arg(long)]
    seed: Option<u64>,

    /// Side shown at the bottom of the board (gold or scarlet)
    #[arg(long, default_value_t = Side::Gold)]
    view: Side,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
    .target(env_logger::Target::Stderr)
    .init();

    let settings = Settings {
        view: args.view,
        seed: args.seed,
    };
    if let Err(err) = repl(settings) {
        log::error!("Fatal error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
