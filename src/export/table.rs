//! Terminal table rendering.
//!
//! Renders record strings as a two-column, left-aligned table with a
//! separator line after every row. Colors come from `colored` and follow its
//! global override (see `initialization::init_color_output`).

use colored::*;

use super::row::record_rows;
use crate::config::CSV_HEADER;

fn separator(widths: [usize; 2]) -> String {
    format!(
        "+{}+{}+\n",
        "-".repeat(widths[0] + 2),
        "-".repeat(widths[1] + 2)
    )
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{text}{}", " ".repeat(width.saturating_sub(len)))
}

/// Renders record strings as a table.
///
/// Strings without a space are left out.
pub fn render_table<S: AsRef<str>>(records: &[S]) -> String {
    let rows = record_rows(records);

    let mut widths = [CSV_HEADER[0].chars().count(), CSV_HEADER[1].chars().count()];
    for (record_type, value) in &rows {
        widths[0] = widths[0].max(record_type.chars().count());
        widths[1] = widths[1].max(value.chars().count());
    }

    let line = separator(widths);
    let mut out = String::new();
    out.push_str(&line);
    out.push_str(&format!(
        "| {} | {} |\n",
        pad(CSV_HEADER[0], widths[0]).bold().bright_cyan(),
        pad(CSV_HEADER[1], widths[1]).bold().bright_cyan()
    ));
    out.push_str(&line);
    for (record_type, value) in &rows {
        out.push_str(&format!(
            "| {} | {} |\n",
            pad(record_type, widths[0]).bold().bright_yellow(),
            pad(value, widths[1]).bright_white()
        ));
        out.push_str(&line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_table_layout() {
        colored::control::set_override(false);
        let table = render_table(&["A 93.184.216.34", "NODATA", "TXT \"hello world\""]);
        let expected = "\
+-------------+---------------+
| Record Type | Value         |
+-------------+---------------+
| A           | 93.184.216.34 |
+-------------+---------------+
| TXT         | \"hello world\" |
+-------------+---------------+
";
        assert_eq!(table, expected);
    }

    #[test]
    fn test_render_table_empty() {
        colored::control::set_override(false);
        let table = render_table::<&str>(&[]);
        assert_eq!(table.lines().count(), 3);
        assert!(table.contains("Record Type"));
    }
}
