//! One round against the computer.

use crate::help::render_table;
use crate::menu::{parse_choice, write_menu, Choice};
use anyhow::{Context, Result};
use fair_rps_core::{MoveRelation, Outcome, RoundSecret};
use rand::seq::SliceRandom;
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// What happened in a finished round
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundReport {
    pub player_move: String,
    pub computer_move: String,
    /// Result for the player
    pub outcome: Outcome,
    /// Whether the revealed key and move matched the published HMAC
    pub verified: bool,
}

/// Play one round.
///
/// Returns `Ok(None)` if the player exits (or input ends) before choosing.
/// The key is only revealed once a move has been chosen.
pub fn play_round<G, R, W>(
    rules: &MoveRelation,
    rng: &mut G,
    mut input: R,
    out: &mut W,
) -> Result<Option<RoundReport>>
where
    G: Rng + ?Sized,
    R: BufRead,
    W: Write,
{
    let computer_move = rules
        .moves()
        .choose(rng)
        .context("move list is empty")?
        .clone();
    let secret =
        RoundSecret::new(computer_move).context("could not generate a secret key for the round")?;
    let commit_msg = secret.commit_message();
    info!(round_id = %commit_msg.round_id, "Computer committed to its move");

    writeln!(out, "HMAC: {}", commit_msg.commitment)?;

    let player_index = loop {
        write_menu(out, rules)?;

        let mut line = String::new();
        if input.read_line(&mut line).context("failed to read player input")? == 0 {
            writeln!(out)?;
            debug!("Input closed before a move was chosen");
            return Ok(None);
        }

        match parse_choice(&line, rules.len()) {
            Some(Choice::Move(i)) => break i,
            Some(Choice::Exit) => {
                debug!("Player exited");
                return Ok(None);
            }
            Some(Choice::Help) => write!(out, "{}", render_table(rules))?,
            None => writeln!(out, "Invalid input: {:?}", line.trim())?,
        }
    };

    let player_move = rules.moves()[player_index].clone();
    let reveal = secret.reveal();
    let verified = reveal.verify(&commit_msg);
    let outcome = rules.resolve(&player_move, &reveal.chosen_move)?;

    writeln!(out, "Your move: {}", player_move)?;
    writeln!(out, "Computer move: {}", reveal.chosen_move)?;
    writeln!(
        out,
        "{}",
        match outcome {
            Outcome::Win => "You win!",
            Outcome::Lose => "You lose!",
            Outcome::Draw => "Draw!",
        }
    )?;
    writeln!(out, "HMAC key: {}", reveal.key.to_hex())?;
    if verified {
        writeln!(out, "Commitment verified: HMAC matches the computer move.")?;
    } else {
        warn!(round_id = %reveal.round_id, "Revealed key does not match the published HMAC");
        writeln!(out, "WARNING: revealed key does not match the published HMAC!")?;
    }
    out.flush()?;

    info!(%outcome, "Round finished");
    Ok(Some(RoundReport {
        player_move,
        computer_move: reveal.chosen_move,
        outcome,
        verified,
    }))
}
