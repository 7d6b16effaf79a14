//! Configuration and output record models.

pub mod config;
pub mod record;
