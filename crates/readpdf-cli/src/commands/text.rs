//! Text command - print page text with `<!-- PAGE n -->` markers.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use tracing::{debug, info, warn};

use readpdf_core::render::{render_with_page_markers, PageFilter};

use super::{Context, EXIT_EMPTY_RESULT};

/// Arguments for the text command.
#[derive(Args)]
pub struct TextArgs {
    /// Input file (PDF or form-feed separated text)
    #[arg(required = true)]
    input: PathBuf,

    /// Which pages to print
    #[arg(long, value_enum, default_value = "all")]
    filter: FilterArg,

    /// Only print TOC-like pages (same as --filter toc)
    #[arg(long)]
    toc: bool,

    /// Maximum number of TOC-like pages (default from config)
    #[arg(long)]
    toc_max_pages: Option<usize>,

    /// Write extraction metadata as JSON to this file
    #[arg(long)]
    meta_json_out: Option<PathBuf>,

    /// Expected page count; a mismatch is reported as a warning
    #[arg(long, alias = "pdf-pages")]
    expected_pages: Option<u32>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum FilterArg {
    /// Every page
    All,
    /// TOC-like pages only
    Toc,
}

impl From<FilterArg> for PageFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => PageFilter::All,
            FilterArg::Toc => PageFilter::Toc,
        }
    }
}

pub async fn run(args: TextArgs, ctx: &Context) -> anyhow::Result<ExitCode> {
    let doc = ctx.open(&args.input, args.expected_pages)?;

    let filter = if args.toc {
        PageFilter::Toc
    } else {
        args.filter.into()
    };
    let toc_max_pages = args.toc_max_pages.unwrap_or(ctx.config.toc.max_pages);

    let rendered = render_with_page_markers(
        &doc.pages,
        filter,
        &ctx.toc_selector(),
        toc_max_pages,
        doc.engine,
    );

    if let Some(path) = &args.meta_json_out {
        fs::write(path, serde_json::to_string_pretty(&rendered.meta)?)?;
        debug!("Wrote metadata to {}", path.display());
    }

    if rendered.is_empty_selection() {
        warn!("No TOC-like pages found in {}", args.input.display());
        return Ok(ExitCode::from(EXIT_EMPTY_RESULT));
    }

    info!(
        "Selected {} of {} pages ({} of {} chars)",
        rendered.meta.selected_pages.len(),
        doc.pages.len(),
        rendered.meta.selected_char_count,
        rendered.meta.full_char_count
    );

    ctx.emit(&rendered.text)?;

    Ok(ExitCode::SUCCESS)
}
