//! Help table.
//!
//! Rows are the computer's move, columns the player's move, and each cell
//! is the result for the player.

use fair_rps_core::MoveRelation;

const CORNER: &str = "v PC \\ User >";

/// Render the full outcome table as an ASCII grid
pub fn render_table(rules: &MoveRelation) -> String {
    let moves = rules.moves();
    let cell_width = |text: &str| text.chars().count();

    let first_width = moves
        .iter()
        .map(|m| cell_width(m))
        .chain(std::iter::once(cell_width(CORNER)))
        .max()
        .unwrap_or(0);
    let widths: Vec<usize> = moves
        .iter()
        .map(|m| cell_width(m).max("Lose".len()))
        .collect();

    let separator = {
        let mut line = format!("+{}+", "-".repeat(first_width + 2));
        for w in &widths {
            line.push_str(&"-".repeat(w + 2));
            line.push('+');
        }
        line
    };

    let row = |label: &str, cells: Vec<&str>| {
        let mut line = format!("| {:<width$} |", label, width = first_width);
        for (cell, w) in cells.iter().zip(&widths) {
            line.push_str(&format!(" {:<width$} |", cell, width = w));
        }
        line
    };

    let mut lines = vec![separator.clone()];
    lines.push(row(CORNER, moves.iter().map(String::as_str).collect()));
    lines.push(separator.clone());
    for (pc, pc_move) in moves.iter().enumerate() {
        let cells = (0..moves.len())
            .map(|user| rules.rows()[user][pc].as_str())
            .collect();
        lines.push(row(pc_move, cells));
    }
    lines.push(separator);

    let mut table = lines.join("\n");
    table.push('\n');
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_table() {
        let rules = MoveRelation::build(["rock", "paper", "scissors"]).unwrap();
        let expected = "\
+---------------+------+-------+----------+
| v PC \\ User > | rock | paper | scissors |
+---------------+------+-------+----------+
| rock          | Draw | Win   | Lose     |
| paper         | Lose | Draw  | Win      |
| scissors      | Win  | Lose  | Draw     |
+---------------+------+-------+----------+
";
        assert_eq!(render_table(&rules), expected);
    }

    #[test]
    fn test_long_names_widen_columns() {
        let rules = MoveRelation::build(["a", "b", "a-very-long-move-name"]).unwrap();
        let table = render_table(&rules);

        let widths: Vec<usize> = table.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
        assert!(table.contains("| a-very-long-move-name |"));
    }

    #[test]
    fn test_each_row_follows_cycle() {
        let rules = MoveRelation::build(["1", "2", "3", "4", "5"]).unwrap();
        let table = render_table(&rules);
        let first_row = table.lines().nth(3).unwrap();

        // Against computer "1", the next two moves win for the player
        let cells: Vec<&str> = first_row
            .split('|')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .collect();
        assert_eq!(cells, vec!["1", "Draw", "Win", "Win", "Lose", "Lose"]);
    }
}
