//! Document model and loading
//!
//! This module turns Microsoft Word (.docx) packages into the ordered block
//! tree that the extraction pipeline works on.

pub(crate) mod io;
pub mod loader;
pub mod models;
pub(crate) mod parsing;

pub use loader::{load_blocks, read_docx_file, DocumentTreeProvider, DocxProvider};
pub use models::*;
