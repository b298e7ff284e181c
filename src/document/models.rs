//! Core data structures for document representation
//!
//! A document body is an ordered list of [`Block`]s. Tables are kept as raw
//! grid rows so that merged cells still show up once per grid position; the
//! [`CellId`] on each cell is what tells those repeats apart from real
//! neighbours with equal text.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub type Row = Vec<Cell>;

/// Identity of the underlying table cell element.
///
/// Two grid positions covered by the same merged cell carry the same id.
/// Equal text never implies equal ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellId(u64);

impl CellId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub id: CellId,
    /// Shared between every grid position of a merged cell.
    pub paragraphs: Arc<[String]>,
}

impl Cell {
    pub fn new<S: Into<String>>(id: CellId, paragraphs: impl IntoIterator<Item = S>) -> Self {
        Self {
            id,
            paragraphs: paragraphs.into_iter().map(Into::<String>::into).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    Paragraph {
        text: String,
    },
    Table {
        rows: Vec<Row>,
    },
    /// A body child that is neither a paragraph nor a table (bookmarks,
    /// content controls, tables of contents). Carried so providers can report
    /// it; extraction ignores it.
    Unsupported {
        kind: String,
    },
}

impl Block {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph { text: text.into() }
    }

    pub fn table(rows: Vec<Row>) -> Self {
        Block::Table { rows }
    }
}
