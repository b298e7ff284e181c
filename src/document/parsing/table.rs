//! Table extraction with merged-cell identity
//!
//! docx stores a horizontally merged cell once with a `gridSpan`, and a
//! vertically merged cell as a `vMerge="restart"` cell followed by
//! `vMerge` continuation cells in the rows below. Rows are expanded here to
//! one [`Cell`] per grid position, with every position of a merged region
//! sharing the id (and content) of the cell that starts it.

use log::debug;
use serde_json::Value;

use super::super::models::*;
use super::text::paragraph_text;

/// Hands out a fresh [`CellId`] per physical cell within one document
#[derive(Debug, Default)]
pub(crate) struct CellIdAllocator {
    next: u64,
}

impl CellIdAllocator {
    pub(crate) fn allocate(&mut self) -> CellId {
        let id = CellId::new(self.next);
        self.next += 1;
        id
    }
}

/// Merge attributes of one `w:tc`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CellMerge {
    grid_span: usize,
    continues_above: bool,
}

impl CellMerge {
    // TableCellProperty keeps its fields private; its serde form is the only
    // public view of gridSpan/vMerge.
    fn of(cell: &docx_rs::TableCell) -> Self {
        match serde_json::to_value(&cell.property) {
            Ok(property) => Self::from_property(&property),
            Err(e) => {
                debug!("cannot inspect table cell properties, treating cell as unmerged: {e}");
                Self::from_property(&Value::Null)
            }
        }
    }

    fn from_property(property: &Value) -> Self {
        let grid_span = property
            .get("gridSpan")
            .and_then(scalar)
            .and_then(Value::as_u64)
            .map(|span| usize::try_from(span).unwrap_or(usize::MAX).max(1))
            .unwrap_or(1);

        let continues_above = property
            .get("verticalMerge")
            .and_then(scalar)
            .and_then(Value::as_str)
            .is_some_and(|val| val.eq_ignore_ascii_case("continue"));

        Self {
            grid_span,
            continues_above,
        }
    }
}

// docx-rs serializes some primitives bare and some as `{ "val": .. }`
fn scalar(value: &Value) -> Option<&Value> {
    match value {
        Value::Null => None,
        Value::Object(map) => map.get("val"),
        other => Some(other),
    }
}

/// Text of each paragraph directly inside the cell. Nested tables are skipped.
fn cell_paragraphs(cell: &docx_rs::TableCell) -> Vec<String> {
    cell.children
        .iter()
        .filter_map(|content| match content {
            docx_rs::TableCellContent::Paragraph(para) => Some(paragraph_text(para)),
            _ => None,
        })
        .collect()
}

/// Number of grid columns a row may occupy.
///
/// The declared `tblGrid` width, widened to the longest physical row. A
/// `gridSpan` never reaches past it, so a document cannot ask for more grid
/// positions than it actually describes.
fn grid_width(table: &docx_rs::Table) -> usize {
    let widest_row = table
        .rows
        .iter()
        .map(|table_child| {
            let docx_rs::TableChild::TableRow(row) = table_child;
            row.cells.len()
        })
        .max()
        .unwrap_or(0);
    table.grid.len().max(widest_row)
}

/// Expand a docx-rs table into grid rows
pub(crate) fn extract_table_rows(
    table: &docx_rs::Table,
    ids: &mut CellIdAllocator,
) -> Vec<Row> {
    let width = grid_width(table);
    let mut rows = Vec::with_capacity(table.rows.len());
    // Cell currently occupying each grid column, used to resolve vMerge continuations
    let mut column_owner: Vec<Option<Cell>> = vec![None; width];

    for table_child in &table.rows {
        let docx_rs::TableChild::TableRow(row) = table_child;
        let mut cells = Vec::new();
        let mut grid_col = 0usize;

        for row_child in &row.cells {
            let docx_rs::TableRowChild::TableCell(cell) = row_child;
            let merge = CellMerge::of(cell);

            let owner = if merge.continues_above {
                column_owner.get(grid_col).cloned().flatten()
            } else {
                None
            };
            let resolved =
                owner.unwrap_or_else(|| Cell::new(ids.allocate(), cell_paragraphs(cell)));

            // Past the grid edge every cell still gets its own position
            let span = merge.grid_span.min(width.saturating_sub(grid_col)).max(1);
            for col in grid_col..grid_col + span {
                if let Some(slot) = column_owner.get_mut(col) {
                    *slot = Some(resolved.clone());
                }
                cells.push(resolved.clone());
            }
            grid_col += span;
        }

        rows.push(cells);
    }

    rows
}
