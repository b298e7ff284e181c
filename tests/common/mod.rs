#![allow(dead_code)]

use docx2json::{Block, Cell, CellId, Row};
use docx_rs::{Docx, Paragraph, Run, TableCell};
use std::io::Cursor;

/// Table whose cells all have distinct identities
pub fn table(rows: &[&[&str]]) -> Block {
    let mut next = 0;
    let rows: Vec<Row> = rows
        .iter()
        .map(|cells| {
            cells
                .iter()
                .map(|text| {
                    next += 1;
                    Cell::new(CellId::new(next), [*text])
                })
                .collect()
        })
        .collect();
    Block::table(rows)
}

/// Row built from explicit `(id, text)` pairs, for merged-cell cases
pub fn row(cells: &[(u64, &str)]) -> Row {
    cells
        .iter()
        .map(|&(id, text)| Cell::new(CellId::new(id), [text]))
        .collect()
}

pub fn para(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text))
}

pub fn cell(text: &str) -> TableCell {
    TableCell::new().add_paragraph(para(text))
}

/// Pack a docx-rs document into .docx bytes
pub fn docx_bytes(docx: Docx) -> Vec<u8> {
    let mut cursor = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut cursor)
        .expect("failed to pack test document");
    cursor.into_inner()
}
