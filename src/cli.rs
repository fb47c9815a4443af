use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "staty darts statistics backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the backend server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Print aggregated statistics for a player
    Stats {
        /// Player name, exact match against the upstream listing
        player: String,
        /// Window start, YYYY-MM-DD (defaults to the lookback window)
        #[arg(long)]
        date_from: Option<String>,
        /// Window end, YYYY-MM-DD
        #[arg(long)]
        date_to: Option<String>,
    },
    /// Print a player's most recent matches
    Matches {
        /// Player name, exact match against the upstream listing
        player: String,
        /// Maximum number of matches to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
}
