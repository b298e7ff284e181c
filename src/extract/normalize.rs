//! Whitespace and newline canonicalization
//!
//! The pipeline runs in a fixed order: newline styles, trailing horizontal
//! whitespace, blank-run collapsing, outer trim. The result is idempotent for
//! every [`BlankRunCollapse`] mode.

use once_cell::sync::Lazy;
use regex::Regex;

use super::options::BlankRunCollapse;

static TRAILING_HORIZONTAL_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+\n").unwrap());

/// Normalize extracted text for stable, comparable output
pub fn normalize(text: &str, collapse: BlankRunCollapse) -> String {
    let text = canonicalize_newlines(text);
    let text = TRAILING_HORIZONTAL_SPACE.replace_all(&text, "\n");
    let text = collapse_blank_runs(&text, collapse);
    text.trim().to_string()
}

/// Replace `\r\n` and bare `\r` with `\n`
pub fn canonicalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

fn collapse_blank_runs(text: &str, collapse: BlankRunCollapse) -> String {
    // Longest newline run allowed: n blank lines need n + 1 newlines
    let max_run = match collapse {
        BlankRunCollapse::Off => return text.to_string(),
        BlankRunCollapse::CollapseToOne => 1,
        BlankRunCollapse::CollapseToMax(blank_lines) => blank_lines.saturating_add(1),
    };

    let mut out = String::with_capacity(text.len());
    let mut run = 0usize;
    for c in text.chars() {
        if c == '\n' {
            run += 1;
            if run > max_run {
                continue;
            }
        } else {
            run = 0;
        }
        out.push(c);
    }
    out
}
