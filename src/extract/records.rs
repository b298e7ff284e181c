//! Output shapes

use serde::{Deserialize, Serialize};

/// One numbered unit of output text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: usize,
    pub text: String,
}

/// The result of one extraction call.
///
/// Serializes as `{"value": ".."}` or `{"paras": [{"id": 0, "text": ".."}, ..]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtractionResult {
    #[serde(rename = "value")]
    Value(String),
    #[serde(rename = "paras")]
    Records(Vec<Record>),
}

impl ExtractionResult {
    pub fn is_empty(&self) -> bool {
        match self {
            ExtractionResult::Value(text) => text.is_empty(),
            ExtractionResult::Records(records) => records.is_empty(),
        }
    }
}

/// Trim every unit, drop the empty ones, and number the rest from 0
pub fn number_records<I, S>(units: I) -> Vec<Record>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    units
        .into_iter()
        .filter_map(|unit| {
            let text = unit.as_ref().trim();
            (!text.is_empty()).then(|| text.to_string())
        })
        .enumerate()
        .map(|(id, text)| Record { id, text })
        .collect()
}

/// One record per non-blank line of already normalized text
pub fn split_lines(text: &str) -> Vec<Record> {
    number_records(text.split('\n'))
}
