//! Container validation
//!
//! Cheap checks run before handing bytes to docx-rs, so that the common
//! mistakes (wrong extension, a spreadsheet, a random zip) get a readable
//! message instead of an XML reader error.

use std::io::Cursor;
use std::path::Path;
use zip::ZipArchive;

use crate::error::{ExtractError, Result};

/// Validates that the path names a .docx file
pub(crate) fn validate_docx_path(file_path: &Path) -> Result<()> {
    let extension = file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    if !extension.eq_ignore_ascii_case("docx") {
        return Err(ExtractError::unreadable(format!(
            "expected a .docx file, got .{extension} \
            (only Word .docx files are supported, not .doc, .xlsx, .zip, etc.)"
        )));
    }

    Ok(())
}

/// Validates that the bytes are a zip package containing a Word main part
pub(crate) fn validate_docx_bytes(data: &[u8]) -> Result<()> {
    let mut archive = ZipArchive::new(Cursor::new(data))
        .map_err(|e| ExtractError::unreadable(format!("not a zip container: {e}")))?;

    if archive.by_name("word/document.xml").is_err() {
        if archive.by_name("xl/workbook.xml").is_ok() {
            return Err(ExtractError::unreadable(
                "this appears to be an Excel file (.xlsx), not a Word document",
            ));
        }

        return Err(ExtractError::unreadable(
            "missing word/document.xml; the file may be corrupted or is not a Word document",
        ));
    }

    Ok(())
}
