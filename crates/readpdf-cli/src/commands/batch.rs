//! Batch command - find TOC-like pages in multiple files.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use serde::Serialize;
use tracing::{debug, error, warn};

use readpdf_core::toc::TocPageSelector;

use super::Context;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Maximum number of TOC-like pages per file (default from config)
    #[arg(long)]
    toc_max_pages: Option<usize>,

    /// Also write a summary CSV to this path
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
#[derive(Serialize)]
struct BatchRecord {
    path: String,
    pages: Vec<u32>,
    error: Option<String>,
    #[serde(skip)]
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, ctx: &Context) -> anyhow::Result<()> {
    let start = Instant::now();

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    debug!("Found {} files to process", files.len());

    let selector = ctx.toc_selector();
    let toc_max_pages = args.toc_max_pages.unwrap_or(ctx.config.toc.max_pages);
    let mut results = Vec::with_capacity(files.len());

    for path in files {
        let file_start = Instant::now();
        let result = toc_pages_for_file(ctx, &selector, &path, toc_max_pages);
        let processing_time_ms = file_start.elapsed().as_millis() as u64;

        match result {
            Ok(pages) => results.push(BatchRecord {
                path: path.display().to_string(),
                pages,
                error: None,
                processing_time_ms,
            }),
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to process {}: {}", path.display(), error_msg);
                    results.push(BatchRecord {
                        path: path.display().to_string(),
                        pages: Vec::new(),
                        error: Some(error_msg),
                        processing_time_ms,
                    });
                } else {
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    anyhow::bail!("Processing failed for {}: {}", path.display(), error_msg);
                }
            }
        }
    }

    let mut out = String::new();
    for record in &results {
        out.push_str(&serde_json::to_string(record)?);
        out.push('\n');
    }
    ctx.emit(&out)?;

    if let Some(summary_path) = &args.summary {
        write_summary(summary_path, &results)?;
        debug!("Summary written to {}", summary_path.display());
    }

    let failed = results.iter().filter(|r| r.error.is_some()).count();
    eprintln!(
        "{} Processed {} files in {:?} ({} successful, {} failed)",
        style("✓").green(),
        results.len(),
        start.elapsed(),
        style(results.len() - failed).green(),
        style(failed).red()
    );

    Ok(())
}

fn toc_pages_for_file(
    ctx: &Context,
    selector: &TocPageSelector,
    path: &Path,
    toc_max_pages: usize,
) -> anyhow::Result<Vec<u32>> {
    let doc = ctx.open(path, None)?;
    Ok(selector.select(&doc.pages, toc_max_pages))
}

fn write_summary(path: &Path, results: &[BatchRecord]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["filename", "status", "pages", "processing_time_ms", "error"])?;

    for result in results {
        let filename = Path::new(&result.path)
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");
        let pages = result
            .pages
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(";");
        let status = if result.error.is_some() { "error" } else { "success" };

        wtr.write_record([
            filename,
            status,
            &pages,
            &result.processing_time_ms.to_string(),
            result.error.as_deref().unwrap_or(""),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
