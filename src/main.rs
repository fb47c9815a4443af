use anyhow::Result;

use staty::cli::Command;
use staty::{handle_matches, handle_serve, handle_stats, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Stats {
            player,
            date_from,
            date_to,
        } => handle_stats(player, date_from.as_deref(), date_to.as_deref()),
        Command::Matches { player, limit } => handle_matches(player, *limit),
    }
}
