//! Truncate command - cut a text file down to a token budget.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use readpdf_core::tokens::{parse_budget, truncate_to_token_budget, TokenCounter};

use super::Context;

/// Arguments for the truncate command.
#[derive(Args)]
pub struct TruncateArgs {
    /// Text file to truncate
    #[arg(short, long)]
    input: PathBuf,

    /// Token budget (0 disables truncation)
    #[arg(short, long, allow_negative_numbers = true)]
    max_tokens: i64,
}

pub async fn run(args: TruncateArgs, ctx: &Context) -> anyhow::Result<()> {
    if !args.input.is_file() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let budget = parse_budget(args.max_tokens)?;
    let bytes = fs::read(&args.input)?;
    let text = String::from_utf8_lossy(&bytes);

    debug!(
        "Input has {} tokens ({}), budget {}",
        ctx.counter().count(&text),
        ctx.counter().method(),
        budget
    );

    let out = truncate_to_token_budget(&text, budget, ctx.counter());
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(out.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
