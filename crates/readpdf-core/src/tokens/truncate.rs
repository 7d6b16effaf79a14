//! Token-budget truncation with a trailing notice.

use tracing::debug;

use super::counter::TokenCounter;
use crate::error::TruncationError;

/// Marker line that starts every truncation notice.
pub const TRUNCATION_MARKER: &str = "[read-pdf output truncated]";

/// Validate a user-supplied budget. Zero disables truncation.
pub fn parse_budget(max_tokens: i64) -> Result<usize, TruncationError> {
    usize::try_from(max_tokens).map_err(|_| TruncationError::NegativeBudget(max_tokens))
}

/// Longest prefix of `text` (on a character boundary) whose token count is
/// within `limit`.
///
/// Binary search over byte offsets; every probe is snapped down to a char
/// boundary, so `lo` and `hi` are always valid split points.
pub fn longest_prefix_within<'a>(text: &'a str, limit: usize, counter: &dyn TokenCounter) -> &'a str {
    if counter.count(text) <= limit {
        return text;
    }

    // `lo` fits (or is 0), everything past `hi` does not.
    let mut lo = 0usize;
    let mut hi = text.len();
    let mut probes = 0u32;

    while lo < hi {
        let mut mid = floor_char_boundary(text, lo + (hi - lo).div_ceil(2));
        if mid <= lo {
            mid = lo + text[lo..].chars().next().map_or(0, char::len_utf8);
        }

        probes += 1;
        if counter.count(&text[..mid]) <= limit {
            lo = mid;
        } else {
            hi = floor_char_boundary(text, mid - 1);
        }
    }

    debug!("Prefix search for limit {} took {} probes", limit, probes);
    &text[..lo]
}

fn floor_char_boundary(text: &str, mut index: usize) -> usize {
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Notice appended to truncated output.
pub fn truncation_notice(total_tokens: usize, method: &str, max_tokens: usize) -> String {
    format!(
        "\n\n{TRUNCATION_MARKER}\n\
         Estimated total tokens for this response: {total_tokens} ({method}).\n\
         Configured max output tokens: {max_tokens}. \
         Override with --max-output-tokens <N> (0 disables truncation).\n"
    )
}

/// Fit `text` into `max_tokens`, appending a notice when anything was cut.
///
/// A budget of 0 disables truncation. Text already within budget is returned
/// unchanged. The notice is counted once and the body is fit around it, so
/// the combined output can in rare cases exceed the budget by a token or two
/// with BPE counters.
pub fn truncate_to_token_budget(text: &str, max_tokens: usize, counter: &dyn TokenCounter) -> String {
    if max_tokens == 0 {
        return text.to_string();
    }

    let total_tokens = counter.count(text);
    if total_tokens <= max_tokens {
        return text.to_string();
    }

    let notice = truncation_notice(total_tokens, counter.method(), max_tokens);
    let available_for_body = max_tokens.saturating_sub(counter.count(&notice)).max(1);

    let body = longest_prefix_within(text, available_for_body, counter).trim_end();
    debug!(
        "Truncated output from {} to ~{} tokens ({} chars kept)",
        total_tokens,
        max_tokens,
        body.chars().count()
    );

    format!("{body}{notice}")
}
