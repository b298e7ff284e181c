//! docx2json: plain text and line records from .docx files
//!
//! This library reads Microsoft Word documents into an ordered block tree,
//! flattens paragraphs and tables into text, and normalizes the result into
//! either one text blob or a list of numbered records.

pub mod batch;
pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod extract;

use serde::{Deserialize, Serialize};
use std::path::Path;

use document::{DocumentTreeProvider, DocxProvider};

/// Shape of the extraction result
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// One normalized text blob
    Value,
    /// One record per non-blank line of the normalized text
    #[default]
    Paras,
    /// One record per paragraph and per table row
    Rows,
}

/// Batch export format
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// A single `json` column, one row per file
    #[default]
    Csv,
    /// One JSON object per line, tagged with the source file
    Jsonl,
}

/// Extract from in-memory .docx bytes
pub fn extract_bytes(
    data: &[u8],
    mode: OutputMode,
    options: &ExtractionOptions,
) -> error::Result<ExtractionResult> {
    let blocks = DocxProvider.read_blocks(data)?;
    Ok(extract::extract(&blocks, mode, options))
}

/// Extract from a .docx file on disk
///
/// The file is read asynchronously; parsing and extraction then run on
/// tokio's blocking pool so large documents never stall the async workers.
pub async fn extract_file(
    file_path: &Path,
    mode: OutputMode,
    options: &ExtractionOptions,
) -> error::Result<ExtractionResult> {
    let data = document::read_docx_file(file_path).await?;
    let options = options.clone();

    match tokio::task::spawn_blocking(move || extract_bytes(&data, mode, &options)).await {
        Ok(outcome) => outcome,
        Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
        Err(_) => Err(ExtractError::Cancelled {
            path: file_path.to_path_buf(),
        }),
    }
}

// Re-export commonly used types
pub use document::{Block, Cell, CellId, Row};
pub use error::ExtractError;
pub use extract::{BlankRunCollapse, ExtractionOptions, ExtractionResult, FlattenPolicy, Record};
