//! Subcommand implementations

pub mod batch;
pub mod config;
pub mod generate;
mod report;

/// Exit status when at least one token was rejected
pub const EXIT_REJECTED: i32 = 2;
