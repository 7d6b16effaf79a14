//! Text normalization helpers shared by the heuristics.

mod normalize;

pub use normalize::{collapse_whitespace, normalize_for_matching, strip_accents};
