use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use docx2json::batch::{run_batch, OnError};
use docx2json::config::Config;
use docx2json::export::{write_csv, write_jsonl};
use docx2json::{BlankRunCollapse, ExportFormat, ExtractionOptions, FlattenPolicy, OutputMode};

/// Convert .docx files into JSON text payloads, one per file.
#[derive(Debug, Parser)]
#[command(name = "docx2json", about, version)]
struct Cli {
    /// .docx files to convert
    #[arg(value_name = "FILE", required_unless_present = "init_config")]
    files: Vec<PathBuf>,

    /// Output shape for each file
    #[arg(long, value_enum)]
    mode: Option<OutputMode>,

    /// Export format
    #[arg(long, value_enum)]
    format: Option<ExportFormat>,

    /// Write output here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Leave tables out of the extracted text
    #[arg(long)]
    no_tables: bool,

    /// How tables are read in value and paras modes
    #[arg(long, value_enum)]
    flatten: Option<FlattenPolicy>,

    /// Column separator for one-line-per-row tables
    #[arg(long, value_name = "SEP")]
    separator: Option<String>,

    /// Joins paragraphs inside a table cell
    #[arg(long, value_name = "SEP")]
    cell_join: Option<String>,

    /// Blank-line collapsing
    #[arg(long, value_enum)]
    collapse: Option<CollapseArg>,

    /// Keep at most N blank lines in a row (implies `--collapse max`)
    #[arg(long, value_name = "N")]
    max_blank_lines: Option<usize>,

    /// Skip unreadable files instead of stopping at the first one
    #[arg(long)]
    keep_going: bool,

    /// Add a leading `file` column to CSV output
    #[arg(long)]
    path_column: bool,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the default config file and exit
    #[arg(long)]
    init_config: bool,

    /// More logging (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

const DEFAULT_MAX_BLANK_LINES: usize = 2;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CollapseArg {
    /// Keep blank lines as they are
    Off,
    /// Remove blank lines
    One,
    /// Keep at most --max-blank-lines blank lines (default 2)
    Max,
}

impl Cli {
    fn extraction_options(&self, base: ExtractionOptions) -> Result<ExtractionOptions> {
        let mut options = base;
        if self.no_tables {
            options.include_tables = false;
        }
        if let Some(policy) = self.flatten {
            options.flatten_policy = policy;
        }
        if let Some(separator) = &self.separator {
            options.column_separator = separator.clone();
        }
        if let Some(join) = &self.cell_join {
            options.cell_join = Some(join.clone());
        }
        options.collapse_blank_runs = match (self.collapse, self.max_blank_lines) {
            (None, None) => options.collapse_blank_runs,
            (None, Some(max)) => BlankRunCollapse::CollapseToMax(max),
            (Some(CollapseArg::Max), max) => {
                BlankRunCollapse::CollapseToMax(max.unwrap_or(DEFAULT_MAX_BLANK_LINES))
            }
            (Some(collapse), Some(_)) => {
                bail!("--max-blank-lines only applies to --collapse max, not {collapse:?}")
            }
            (Some(CollapseArg::Off), None) => BlankRunCollapse::Off,
            (Some(CollapseArg::One), None) => BlankRunCollapse::CollapseToOne,
        };
        Ok(options)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

async fn run(cli: Cli) -> Result<ExitCode> {
    if cli.init_config {
        let path = Config::init_default()?;
        println!("Wrote default config to {}", path.display());
        return Ok(ExitCode::SUCCESS);
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let options = cli.extraction_options(config.extraction.clone())?;
    let mode = cli.mode.unwrap_or(config.output.mode);
    let format = cli.format.unwrap_or(config.output.format);
    let on_error = if cli.keep_going {
        OnError::Skip
    } else {
        OnError::Abort
    };

    info!("converting {} files in {mode:?} mode", cli.files.len());
    let output = run_batch(&cli.files, mode, &options, on_error).await?;

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    match format {
        ExportFormat::Csv => write_csv(&mut out, &output.rows, cli.path_column)?,
        ExportFormat::Jsonl => write_jsonl(&mut out, &output.rows)?,
    }
    out.flush()?;

    for failure in &output.failures {
        eprintln!("Error: {}: {}", failure.path.display(), failure.message);
    }

    Ok(if output.failures.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
