//! Command line configuration.

use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Shown after a configuration error
pub const USAGE_EXAMPLE: &str = "Example: fair-rps rock paper scissors lizard spock";

/// Log level used when `RUST_LOG` is unset
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::WARN;

#[derive(Parser, Debug)]
#[command(
    name = "fair-rps",
    version,
    about = "Rock-paper-scissors with any odd number of moves against a computer that commits first"
)]
pub struct Args {
    /// Moves in cyclic order. Each move beats the half of the list before it
    /// and loses to the half after it. Give an odd number (at least 3) of
    /// distinct names.
    #[arg(value_name = "MOVE")]
    pub moves: Vec<String>,
}

/// Install the global subscriber. Logs go to stderr so they never mix with
/// the game on stdout.
pub fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(DEFAULT_LOG_LEVEL.into())
        .from_env_lossy();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_moves() {
        let args = Args::try_parse_from(["fair-rps", "rock", "paper", "scissors"]).unwrap();
        assert_eq!(args.moves, vec!["rock", "paper", "scissors"]);
    }

    #[test]
    fn test_parse_no_moves() {
        let args = Args::try_parse_from(["fair-rps"]).unwrap();
        assert!(args.moves.is_empty());
    }

    #[test]
    fn test_command_is_well_formed() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
