//! Text extraction pipeline
//!
//! Blocks go through the traverser and table flattener, the resulting text
//! units are normalized, and the record builder shapes the output:
//!
//! - [`extract_value`]: one normalized blob.
//! - [`extract_line_records`]: the blob split into numbered lines.
//! - [`extract_row_records`]: tables read one line per row; paragraphs and
//!   row lines are numbered as they are, without blank-run collapsing.
//!
//! Everything here is a pure function of its inputs.

pub mod normalize;
pub mod options;
pub mod records;
pub mod table;
pub mod traverse;

pub use normalize::{canonicalize_newlines, normalize};
pub use options::{BlankRunCollapse, ExtractionOptions, FlattenPolicy};
pub use records::{number_records, split_lines, ExtractionResult, Record};
pub use table::flatten_table;
pub use traverse::{collect_text_units, traverse, BlockView};

use crate::document::Block;
use crate::OutputMode;

/// Single normalized text blob
pub fn extract_value(blocks: &[Block], options: &ExtractionOptions) -> String {
    let units = collect_text_units(blocks, options);
    normalize(&units.join("\n"), options.collapse_blank_runs)
}

/// Normalized text split into numbered, non-blank lines
pub fn extract_line_records(blocks: &[Block], options: &ExtractionOptions) -> Vec<Record> {
    split_lines(&extract_value(blocks, options))
}

/// Paragraph units and table row lines, numbered in body order.
///
/// Tables are always flattened one line per row here, whatever the policy in
/// `options`. Line breaks inside a unit stay inside that unit.
pub fn extract_row_records(blocks: &[Block], options: &ExtractionOptions) -> Vec<Record> {
    let options = options
        .clone()
        .with_flatten_policy(FlattenPolicy::RowPerLine);
    let units = collect_text_units(blocks, &options);
    number_records(units.iter().map(|unit| canonicalize_newlines(unit)))
}

/// Run the pipeline in the requested output mode
pub fn extract(blocks: &[Block], mode: OutputMode, options: &ExtractionOptions) -> ExtractionResult {
    match mode {
        OutputMode::Value => ExtractionResult::Value(extract_value(blocks, options)),
        OutputMode::Paras => ExtractionResult::Records(extract_line_records(blocks, options)),
        OutputMode::Rows => ExtractionResult::Records(extract_row_records(blocks, options)),
    }
}
