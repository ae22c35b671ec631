//! Report table rendering for terminal output
//!
//! Hand-formatted column-aligned tables: widths come from the widest cell
//! per column, a separator rule precedes the totals row, and tone-tagged
//! cells pick up ANSI color.

use crate::reports::{ReportRow, Tone};

/// Apply ANSI color for a tone tag
fn colorize(text: &str, tone: Tone) -> String {
    match tone {
        Tone::Negative => format!("\x1b[31m{}\x1b[0m", text), // Red
        Tone::Positive => format!("\x1b[32m{}\x1b[0m", text), // Green
        Tone::Neutral => text.to_string(),
    }
}

/// Character width of a cell's visible text
fn cell_width(text: &str) -> usize {
    text.chars().count()
}

/// Render a table with header labels and a trailing totals row
///
/// The last row of `rows` is treated as the totals row and separated from
/// the record rows by a rule. Callers handle the empty case themselves;
/// an empty `rows` renders only the header.
pub fn render_table(labels: &[&str], rows: &[ReportRow]) -> String {
    // Column widths: max of label and every cell in that column
    let mut widths: Vec<usize> = labels.iter().map(|l| cell_width(l)).collect();
    for row in rows {
        for (i, cell) in row.cells().iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell_width(&cell.text));
            }
        }
    }

    let mut output = String::new();

    // Header
    for (i, label) in labels.iter().enumerate() {
        output.push_str(&pad(label, widths[i]));
        output.push_str("  ");
    }
    output.push('\n');
    push_rule(&mut output, &widths);

    for (index, row) in rows.iter().enumerate() {
        // Rule before the totals row
        if index + 1 == rows.len() && rows.len() > 1 {
            push_rule(&mut output, &widths);
        }

        for (i, cell) in row.cells().iter().enumerate() {
            let padded = pad(&cell.text, widths[i]);
            output.push_str(&colorize(&padded, cell.tone));
            output.push_str("  ");
        }
        output.push('\n');
    }

    output
}

fn pad(text: &str, width: usize) -> String {
    let len = cell_width(text);
    if len >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - len))
    }
}

fn push_rule(output: &mut String, widths: &[usize]) {
    for width in widths {
        output.push_str(&"-".repeat(*width));
        output.push_str("  ");
    }
    output.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::Cell;

    #[test]
    fn test_render_table_with_totals() {
        let rows = vec![
            ReportRow(vec![Cell::text("Maria"), Cell::text("R$ 100,00")]),
            ReportRow(vec![Cell::text("João"), Cell::text("R$ 200,00")]),
            ReportRow(vec![Cell::text("TOTAL"), Cell::text("R$ 300,00")]),
        ];

        let output = render_table(&["Locatário", "Valor"], &rows);
        assert!(output.contains("Locatário"));
        assert!(output.contains("Maria"));
        assert!(output.contains("TOTAL"));
        assert!(output.contains("R$ 300,00"));
    }

    #[test]
    fn test_tone_coloring() {
        let rows = vec![ReportRow(vec![
            Cell::text("A"),
            Cell::signed_money(crate::models::Money::from_centavos(-500)),
        ])];

        let output = render_table(&["Locatário", "Oscilação"], &rows);
        assert!(output.contains("\x1b[31m"));
    }

    #[test]
    fn test_accented_width_alignment() {
        // "João" is 4 visible chars, not 5 bytes; alignment must not drift
        let rows = vec![
            ReportRow(vec![Cell::text("João"), Cell::text("x")]),
            ReportRow(vec![Cell::text("Anna"), Cell::text("y")]),
        ];

        let output = render_table(&["Nome", "V"], &rows);
        let lines: Vec<&str> = output.lines().collect();
        // header, rule, first row, rule, last row
        let col = |line: &str| line.chars().position(|c| c == 'x' || c == 'y');
        assert_eq!(col(lines[2]), col(lines[4]));
    }
}
