//! Per-call extraction settings

use serde::{Deserialize, Serialize};

/// How a table is read into text units
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlattenPolicy {
    /// Every non-empty cell on its own line, rows one after another, the
    /// whole table as one unit.
    #[default]
    VerticalStack,
    /// One delimited line per row, one unit per row.
    RowPerLine,
}

/// Treatment of consecutive blank lines in normalized text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlankRunCollapse {
    Off,
    /// Remove blank lines entirely.
    #[default]
    CollapseToOne,
    /// Keep at most this many blank lines in a row.
    CollapseToMax(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionOptions {
    pub include_tables: bool,
    pub flatten_policy: FlattenPolicy,
    /// Joins cells of a row under [`FlattenPolicy::RowPerLine`].
    ///
    /// A row line made only of `|`, whitespace and the separator's own
    /// punctuation is dropped as a border artifact. With `" - "` a row whose
    /// only text is `-` disappears; with the default `" | "` it is kept.
    pub column_separator: String,
    /// Joins paragraphs inside one cell. Unset means `"\n"` for
    /// [`FlattenPolicy::VerticalStack`] and `" "` for [`FlattenPolicy::RowPerLine`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell_join: Option<String>,
    pub collapse_blank_runs: BlankRunCollapse,
}

impl Default for ExtractionOptions {
    fn default() -> Self {
        Self {
            include_tables: true,
            flatten_policy: FlattenPolicy::default(),
            column_separator: " | ".to_string(),
            cell_join: None,
            collapse_blank_runs: BlankRunCollapse::default(),
        }
    }
}

impl ExtractionOptions {
    pub fn cell_join(&self) -> &str {
        match (&self.cell_join, self.flatten_policy) {
            (Some(join), _) => join.as_str(),
            (None, FlattenPolicy::VerticalStack) => "\n",
            (None, FlattenPolicy::RowPerLine) => " ",
        }
    }

    pub fn with_flatten_policy(mut self, flatten_policy: FlattenPolicy) -> Self {
        self.flatten_policy = flatten_policy;
        self
    }

    pub fn with_collapse(mut self, collapse_blank_runs: BlankRunCollapse) -> Self {
        self.collapse_blank_runs = collapse_blank_runs;
        self
    }

    pub fn with_tables(mut self, include_tables: bool) -> Self {
        self.include_tables = include_tables;
        self
    }

    pub fn with_column_separator(mut self, separator: impl Into<String>) -> Self {
        self.column_separator = separator.into();
        self
    }

    pub fn with_cell_join(mut self, join: impl Into<String>) -> Self {
        self.cell_join = Some(join.into());
        self
    }
}
