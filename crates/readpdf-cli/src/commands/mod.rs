//! Subcommand implementations.

pub mod batch;
pub mod config;
mod context;
pub mod pages;
pub mod search;
pub mod text;
pub mod truncate;

pub use context::{Context, LoadedDocument};

/// Exit status when a TOC filter selects no pages.
pub const EXIT_EMPTY_RESULT: u8 = 4;
