//! Multi-file extraction
//!
//! Each file is read on its own task and parsed on the blocking pool; results
//! come back in the order the paths were given. Aborting on a failure cancels
//! every extraction still pending.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::PathBuf;
use tokio::task::JoinHandle;

use crate::extract::{ExtractionOptions, ExtractionResult};
use crate::{extract_file, OutputMode};

/// What to do when one file cannot be extracted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnError {
    /// Stop at the first failure.
    #[default]
    Abort,
    /// Log it, remember it, and carry on with the next file.
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRow {
    pub path: PathBuf,
    pub result: ExtractionResult,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchFailure {
    pub path: PathBuf,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutput {
    pub rows: Vec<BatchRow>,
    pub failures: Vec<BatchFailure>,
}

/// Extract every file in `paths`
pub async fn run_batch(
    paths: &[PathBuf],
    mode: OutputMode,
    options: &ExtractionOptions,
    on_error: OnError,
) -> Result<BatchOutput> {
    let handles: Vec<_> = paths
        .iter()
        .cloned()
        .map(|path| {
            let options = options.clone();
            tokio::spawn(async move {
                let outcome = extract_file(&path, mode, &options).await;
                (path, outcome)
            })
        })
        .collect();

    let mut output = BatchOutput::default();
    let mut pending = handles.into_iter();
    while let Some(handle) = pending.next() {
        let (path, outcome) = match handle.await {
            Ok(joined) => joined,
            Err(err) => {
                abort_all(pending);
                return Err(err).context("extraction task panicked");
            }
        };
        match outcome {
            Ok(result) => output.rows.push(BatchRow { path, result }),
            Err(err) => match on_error {
                OnError::Abort => {
                    abort_all(pending);
                    return Err(err).with_context(|| format!("failed on {}", path.display()));
                }
                OnError::Skip => {
                    warn!("skipping {}: {err}", path.display());
                    output.failures.push(BatchFailure {
                        path,
                        message: err.to_string(),
                    });
                }
            },
        }
    }

    info!(
        "extracted {} of {} files ({} failed)",
        output.rows.len(),
        paths.len(),
        output.failures.len()
    );

    Ok(output)
}

// A task already inside the blocking pool runs to completion; its result is dropped.
fn abort_all<T>(handles: impl Iterator<Item = JoinHandle<T>>) {
    let mut aborted = 0usize;
    for handle in handles {
        handle.abort();
        aborted += 1;
    }
    if aborted > 0 {
        debug!("aborted {aborted} pending extractions");
    }
}
