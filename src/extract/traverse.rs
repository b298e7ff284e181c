//! Body traversal
//!
//! Walks blocks once in document order and dispatches paragraphs and tables
//! to their handlers.

use super::options::ExtractionOptions;
use super::table::flatten_table;
use crate::document::{Block, Row};

/// A block the pipeline knows how to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockView<'a> {
    Paragraph(&'a str),
    Table(&'a [Row]),
}

/// Lazily classify blocks, in order. Unknown block kinds are skipped.
pub fn traverse(blocks: &[Block]) -> impl Iterator<Item = BlockView<'_>> {
    blocks.iter().filter_map(|block| match block {
        Block::Paragraph { text } => Some(BlockView::Paragraph(text)),
        Block::Table { rows } => Some(BlockView::Table(rows)),
        Block::Unsupported { .. } => None,
    })
}

/// Trimmed, non-empty text units in body order.
///
/// A paragraph yields at most one unit. A table yields whatever the active
/// flatten policy produces, or nothing when tables are excluded.
pub fn collect_text_units(blocks: &[Block], options: &ExtractionOptions) -> Vec<String> {
    let mut units = Vec::new();

    for view in traverse(blocks) {
        match view {
            BlockView::Paragraph(text) => {
                let text = text.trim();
                if !text.is_empty() {
                    units.push(text.to_string());
                }
            }
            BlockView::Table(rows) if options.include_tables => {
                units.extend(flatten_table(rows, options));
            }
            BlockView::Table(_) => {}
        }
    }

    units
}
