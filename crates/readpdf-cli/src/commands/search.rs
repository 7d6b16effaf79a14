//! Search command - regex matches with word context, one JSON line each.

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use readpdf_core::search::PageSearcher;

use super::Context;

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Input file (PDF or form-feed separated text)
    #[arg(required = true)]
    input: PathBuf,

    /// Regular expression to search for
    #[arg(short, long)]
    regex: String,

    /// Words of context on each side of a match (default from config)
    #[arg(long)]
    context_words: Option<usize>,

    /// Expected page count; a mismatch is reported as a warning
    #[arg(long, alias = "pdf-pages")]
    expected_pages: Option<u32>,
}

pub async fn run(args: SearchArgs, ctx: &Context) -> anyhow::Result<()> {
    let context_words = args.context_words.unwrap_or(ctx.config.search.context_words);
    let searcher = PageSearcher::new(&args.regex, context_words)?;

    let doc = ctx.open(&args.input, args.expected_pages)?;
    let pdf_path = args.input.display().to_string();

    let matches = searcher.search(&doc.pages);
    info!("{} matches for /{}/", matches.len(), args.regex);

    let mut out = String::new();
    for m in matches {
        let record = m.into_record(&ctx.tool, &pdf_path, context_words);
        out.push_str(&serde_json::to_string(&record)?);
        out.push('\n');
    }

    ctx.emit(&out)
}
