//! CLI command implementations

pub mod author;
pub mod completions;
pub mod config;
pub mod io;
pub mod magazine;
