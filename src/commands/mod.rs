//! Subcommand handlers

pub mod at;
pub mod completions;
pub mod config;
pub mod info;
pub mod play;
