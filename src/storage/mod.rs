//! Index Storage Module
//!
//! Holds the term-frequency index in memory and persists it as JSON.
//!
//! ## Core Concepts
//! - **Sharded access**: `IndexStore` keeps one `DashMap` entry per document, so the
//!   search handlers and the indexer can share it without a global lock.
//! - **Persistence**: The whole index is dumped to and loaded from a single JSON file
//!   (`{ "<path>": { "<TERM>": count } }`).

pub mod index;

pub use index::IndexStore;
