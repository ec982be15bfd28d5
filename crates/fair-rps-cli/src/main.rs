//! Fair RPS terminal game
//!
//! Usage: `fair-rps <MOVE> <MOVE> <MOVE> [MOVE...]`
//!
//! Exit codes: 0 after a finished or abandoned round, 1 on an invalid move
//! list or a runtime failure.

use clap::Parser;
use fair_rps_cli::config::{init_tracing, USAGE_EXAMPLE};
use fair_rps_cli::{play_round, Args};
use fair_rps_core::MoveRelation;
use std::io;
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let rules = match MoveRelation::build(args.moves) {
        Ok(rules) => rules,
        Err(e) => {
            error!("Rejected move list: {}", e);
            eprintln!("Error: {}", e);
            eprintln!("{}", USAGE_EXAMPLE);
            return ExitCode::FAILURE;
        }
    };
    info!("Playing with {} moves", rules.len());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    match play_round(&rules, &mut rand::thread_rng(), stdin.lock(), &mut stdout) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Round failed: {:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
