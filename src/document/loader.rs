//! Document loading
//!
//! Turns raw .docx bytes into the ordered [`Block`] sequence the extraction
//! pipeline consumes. The pipeline only ever sees blocks, so anything that can
//! produce them (another container format, a test fixture) can stand in for
//! [`DocxProvider`] through [`DocumentTreeProvider`].

use log::debug;
use std::path::Path;

use super::io::{validate_docx_bytes, validate_docx_path};
use super::models::*;
use super::parsing::table::{extract_table_rows, CellIdAllocator};
use super::parsing::text::paragraph_text;
use crate::error::{ExtractError, Result};

/// Source of document body blocks
pub trait DocumentTreeProvider {
    /// Parse `data` into body blocks in document order.
    fn read_blocks(&self, data: &[u8]) -> Result<Vec<Block>>;
}

/// Word .docx provider backed by docx-rs
#[derive(Debug, Default, Clone, Copy)]
pub struct DocxProvider;

impl DocumentTreeProvider for DocxProvider {
    fn read_blocks(&self, data: &[u8]) -> Result<Vec<Block>> {
        validate_docx_bytes(data)?;

        let docx =
            docx_rs::read_docx(data).map_err(|e| ExtractError::unreadable(e.to_string()))?;

        let mut ids = CellIdAllocator::default();
        let blocks: Vec<Block> = docx
            .document
            .children
            .iter()
            .map(|child| match child {
                docx_rs::DocumentChild::Paragraph(para) => Block::Paragraph {
                    text: paragraph_text(para),
                },
                docx_rs::DocumentChild::Table(table) => Block::Table {
                    rows: extract_table_rows(table, &mut ids),
                },
                docx_rs::DocumentChild::StructuredDataTag(_) => Block::Unsupported {
                    kind: "content-control".to_string(),
                },
                docx_rs::DocumentChild::TableOfContents(_) => Block::Unsupported {
                    kind: "table-of-contents".to_string(),
                },
                _ => Block::Unsupported {
                    kind: "marker".to_string(),
                },
            })
            .collect();

        debug!(
            "parsed {} body blocks ({} tables)",
            blocks.len(),
            blocks
                .iter()
                .filter(|block| matches!(block, Block::Table { .. }))
                .count()
        );

        Ok(blocks)
    }
}

/// Read the raw bytes of a .docx file after checking its extension
pub async fn read_docx_file(file_path: &Path) -> Result<Vec<u8>> {
    validate_docx_path(file_path)?;

    let data = tokio::fs::read(file_path)
        .await
        .map_err(|source| ExtractError::Io {
            path: file_path.to_path_buf(),
            source,
        })?;

    debug!("read {} bytes from {}", data.len(), file_path.display());
    Ok(data)
}

/// Read a .docx file from disk and parse its body blocks
pub async fn load_blocks(file_path: &Path) -> Result<Vec<Block>> {
    let data = read_docx_file(file_path).await?;
    DocxProvider.read_blocks(&data)
}
