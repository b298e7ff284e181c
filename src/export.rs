//! Batch output serialization
//!
//! Each file becomes one payload string (`{"value": ..}` or `{"paras": [..]}`).
//! CSV puts the payloads in a single `json` column so every cell holds valid
//! JSON; JSON Lines writes one object per file.

use anyhow::Result;
use serde::Serialize;
use std::borrow::Cow;
use std::io::Write;

use crate::batch::BatchRow;
use crate::extract::ExtractionResult;

/// Serialize one extraction result as its payload string
pub fn payload_json(result: &ExtractionResult) -> serde_json::Result<String> {
    serde_json::to_string(result)
}

/// Quote a CSV field when it contains a delimiter, a quote or a line break
pub fn csv_escape(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Write a header row and one row per file
pub fn write_csv<W: Write>(out: &mut W, rows: &[BatchRow], with_path: bool) -> Result<()> {
    if with_path {
        writeln!(out, "file,json")?;
    } else {
        writeln!(out, "json")?;
    }

    for row in rows {
        let payload = payload_json(&row.result)?;
        if with_path {
            let path = row.path.display().to_string();
            writeln!(out, "{},{}", csv_escape(&path), csv_escape(&payload))?;
        } else {
            writeln!(out, "{}", csv_escape(&payload))?;
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct JsonLine<'a> {
    file: String,
    #[serde(flatten)]
    result: &'a ExtractionResult,
}

/// Write one `{"file": .., "paras"|"value": ..}` object per line
pub fn write_jsonl<W: Write>(out: &mut W, rows: &[BatchRow]) -> Result<()> {
    for row in rows {
        let line = JsonLine {
            file: row.path.display().to_string(),
            result: &row.result,
        };
        serde_json::to_writer(&mut *out, &line)?;
        writeln!(out)?;
    }
    Ok(())
}
