//! Token counting backends.

use tracing::debug;

/// Counts language-model tokens in a piece of text.
///
/// Implementations must be monotonic: a prefix never counts more tokens than
/// the text it was taken from. Truncation relies on this for its binary search.
pub trait TokenCounter {
    /// Number of tokens in `text`.
    fn count(&self, text: &str) -> usize;

    /// Identifier reported in truncation notices.
    fn method(&self) -> &'static str;
}

/// Character-based estimate: one token per four characters, at least one.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproxCounter;

impl ApproxCounter {
    pub const METHOD: &'static str = "approx_chars_div4";
}

impl TokenCounter for ApproxCounter {
    fn count(&self, text: &str) -> usize {
        text.chars().count().div_ceil(4).max(1)
    }

    fn method(&self) -> &'static str {
        Self::METHOD
    }
}

/// BPE counter using the `o200k_base` encoding.
#[cfg(feature = "tiktoken")]
pub struct TiktokenCounter {
    bpe: tiktoken_rs::CoreBPE,
}

#[cfg(feature = "tiktoken")]
impl TiktokenCounter {
    pub const METHOD: &'static str = "tiktoken:o200k_base";

    /// Load the encoding; returns `None` if it cannot be built.
    pub fn new() -> Option<Self> {
        match tiktoken_rs::o200k_base() {
            Ok(bpe) => Some(Self { bpe }),
            Err(e) => {
                debug!("o200k_base encoding unavailable: {}", e);
                None
            }
        }
    }
}

#[cfg(feature = "tiktoken")]
impl TokenCounter for TiktokenCounter {
    fn count(&self, text: &str) -> usize {
        self.bpe.encode_ordinary(text).len()
    }

    fn method(&self) -> &'static str {
        Self::METHOD
    }
}

/// Best available counter: BPE when compiled in and loadable, otherwise the
/// character estimate.
pub fn load_counter() -> Box<dyn TokenCounter> {
    #[cfg(feature = "tiktoken")]
    if let Some(counter) = TiktokenCounter::new() {
        return Box::new(counter);
    }

    debug!("Using approximate token counter ({})", ApproxCounter::METHOD);
    Box::new(ApproxCounter)
}
