//! Table flattening
//!
//! Merged cells appear once per grid position they cover, so every row is
//! first deduplicated by [`CellId`](crate::document::CellId), keeping the
//! first occurrence. What happens next depends on the [`FlattenPolicy`].

use std::collections::HashSet;

use super::options::{ExtractionOptions, FlattenPolicy};
use crate::document::{Cell, Row};

/// Convert one table into zero or more text units
pub fn flatten_table(rows: &[Row], options: &ExtractionOptions) -> Vec<String> {
    let cell_join = options.cell_join();

    match options.flatten_policy {
        FlattenPolicy::VerticalStack => stack_vertically(rows, cell_join).into_iter().collect(),
        FlattenPolicy::RowPerLine => rows
            .iter()
            .filter_map(|row| row_line(row, cell_join, &options.column_separator))
            .collect(),
    }
}

fn unique_cells(row: &[Cell]) -> impl Iterator<Item = &Cell> {
    let mut seen = HashSet::new();
    row.iter().filter(move |cell| seen.insert(cell.id))
}

/// Non-empty trimmed paragraphs of the cell joined with `join`
pub(crate) fn cell_text(cell: &Cell, join: &str) -> String {
    cell.paragraphs
        .iter()
        .map(|para| para.trim())
        .filter(|para| !para.is_empty())
        .collect::<Vec<_>>()
        .join(join)
        .trim()
        .to_string()
}

fn stack_vertically(rows: &[Row], cell_join: &str) -> Option<String> {
    let row_blocks: Vec<String> = rows
        .iter()
        .filter_map(|row| {
            let parts: Vec<String> = unique_cells(row)
                .map(|cell| cell_text(cell, cell_join))
                .filter(|text| !text.is_empty())
                .collect();
            (!parts.is_empty()).then(|| parts.join("\n"))
        })
        .collect();

    let text = row_blocks.join("\n");
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn row_line(row: &[Cell], cell_join: &str, separator: &str) -> Option<String> {
    let mut texts: Vec<String> = unique_cells(row)
        .map(|cell| cell_text(cell, cell_join))
        .collect();

    while texts.last().is_some_and(|text| text.is_empty()) {
        texts.pop();
    }
    if texts.iter().all(|text| text.is_empty()) {
        return None;
    }

    let line = texts.join(separator).trim().to_string();
    (!is_artifact_line(&line, separator)).then_some(line)
}

/// A line made only of pipes, separator punctuation and whitespace
pub(crate) fn is_artifact_line(line: &str, separator: &str) -> bool {
    line.chars().all(|c| {
        c == '|' || c.is_whitespace() || (!c.is_alphanumeric() && separator.contains(c))
    })
}
