//! Token counting and token-budget truncation.

mod counter;
mod truncate;

#[cfg(feature = "tiktoken")]
pub use counter::TiktokenCounter;
pub use counter::{load_counter, ApproxCounter, TokenCounter};
pub use truncate::{
    longest_prefix_within, parse_budget, truncate_to_token_budget, truncation_notice,
    TRUNCATION_MARKER,
};
