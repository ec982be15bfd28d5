//! Move selection menu.

use fair_rps_core::MoveRelation;
use std::io::{self, Write};

/// One line of player input, interpreted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    /// Index into the configured move list
    Move(usize),
    Exit,
    Help,
}

/// Interpret a menu entry. Moves are numbered from 1; `0` exits and `?`
/// shows help. Surrounding whitespace is ignored.
pub fn parse_choice(input: &str, move_count: usize) -> Option<Choice> {
    match input.trim() {
        "0" => Some(Choice::Exit),
        "?" => Some(Choice::Help),
        other => match other.parse::<usize>() {
            Ok(n) if (1..=move_count).contains(&n) => Some(Choice::Move(n - 1)),
            _ => None,
        },
    }
}

/// Print the menu and the prompt
pub fn write_menu<W: Write>(out: &mut W, rules: &MoveRelation) -> io::Result<()> {
    writeln!(out, "Available moves:")?;
    for (i, mv) in rules.moves().iter().enumerate() {
        writeln!(out, "{} - {}", i + 1, mv)?;
    }
    writeln!(out, "0 - exit")?;
    writeln!(out, "? - help")?;
    write!(out, "Enter your move: ")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("1", 3), Some(Choice::Move(0)));
        assert_eq!(parse_choice(" 3\n", 3), Some(Choice::Move(2)));
        assert_eq!(parse_choice("0", 3), Some(Choice::Exit));
        assert_eq!(parse_choice("?\r\n", 3), Some(Choice::Help));
    }

    #[test]
    fn test_parse_choice_rejects() {
        assert_eq!(parse_choice("4", 3), None);
        assert_eq!(parse_choice("-1", 3), None);
        assert_eq!(parse_choice("rock", 3), None);
        assert_eq!(parse_choice("", 3), None);
    }

    #[test]
    fn test_menu_lists_moves() {
        let rules = MoveRelation::build(["rock", "paper", "scissors"]).unwrap();
        let mut out = Vec::new();
        write_menu(&mut out, &rules).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Available moves:\n1 - rock\n2 - paper\n3 - scissors\n0 - exit\n? - help\nEnter your move: "
        );
    }
}
