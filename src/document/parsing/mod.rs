//! docx-rs tree walking
//!
//! Helpers that read plain text and table grids out of docx-rs elements.

pub(crate) mod table;
pub(crate) mod text;
