//! Pages command - list candidate pages of a given kind as one JSON record.

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use readpdf_core::candidates::{candidate_pages, CandidateKind};
use readpdf_core::models::record::{CandidateRecord, BEST_EFFORT_NOTE};

use super::Context;

/// Arguments for the pages command.
#[derive(Args)]
pub struct PagesArgs {
    /// Input file (PDF or form-feed separated text)
    #[arg(required = true)]
    input: PathBuf,

    /// Kind of candidate page to look for
    #[arg(short, long, value_enum, default_value = "toc")]
    kind: KindArg,

    /// Maximum number of TOC-like pages (default from config)
    #[arg(long)]
    toc_max_pages: Option<usize>,

    /// Expected page count; a mismatch is reported as a warning
    #[arg(long, alias = "pdf-pages")]
    expected_pages: Option<u32>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum KindArg {
    /// Tables of contents, indexes, glossaries and lists of figures
    Toc,
    /// Pages with table captions
    Table,
    /// Pages with figure or chart captions
    Chart,
}

impl From<KindArg> for CandidateKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Toc => CandidateKind::Toc,
            KindArg::Table => CandidateKind::Table,
            KindArg::Chart => CandidateKind::Chart,
        }
    }
}

pub async fn run(args: PagesArgs, ctx: &Context) -> anyhow::Result<()> {
    let doc = ctx.open(&args.input, args.expected_pages)?;
    let kind = CandidateKind::from(args.kind);
    let toc_max_pages = args.toc_max_pages.unwrap_or(ctx.config.toc.max_pages);

    let pages = candidate_pages(&doc.pages, kind, &ctx.toc_selector(), toc_max_pages);
    info!("Found {} {} candidates", pages.len(), kind.mode());

    let record = CandidateRecord {
        tool: ctx.tool.clone(),
        mode: kind.mode().to_string(),
        best_effort: true,
        note: BEST_EFFORT_NOTE.to_string(),
        pdf_path: args.input.display().to_string(),
        pdf_page_count: doc.page_count,
        pages,
    };

    ctx.emit(&format!("{}\n", serde_json::to_string(&record)?))
}
