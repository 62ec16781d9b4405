use crate::models::DerivedTable;

/// Render the first `limit` rows as a read-only aligned text table.
pub fn render_preview(table: &DerivedTable, limit: usize) -> String {
    let header = table.header();
    let rows: Vec<Vec<String>> = table
        .rows()
        .iter()
        .take(limit)
        .map(|row| row.to_record())
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let mut output = String::new();
    output.push_str(&format!(
        "=== Processed data (first {} of {} rows) ===\n",
        rows.len(),
        table.len()
    ));

    for (i, name) in header.iter().enumerate() {
        output.push_str(&format!("{:<width$}  ", name, width = widths[i]));
    }
    output.push('\n');

    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            output.push_str(&format!("{:<width$}  ", cell, width = widths[i]));
        }
        output.push('\n');
    }

    if table.len() > limit {
        output.push_str(&format!("... {} more rows\n", table.len() - limit));
    }

    output
}
