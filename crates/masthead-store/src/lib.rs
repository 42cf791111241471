//! Masthead Store - Registry backends for articles
//!
//! This crate provides implementations of
//! [`ArticleRegistry`](masthead_core::ArticleRegistry).

pub mod memory;

pub use memory::MemoryRegistry;
