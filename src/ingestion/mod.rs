//! Ingestion Service Module
//!
//! Turns a directory of documents into term-frequency entries of the `IndexStore`.
//!
//! ## Workflow
//! 1. **Walk**: Recursively lists the directory, keeping files with a supported extension.
//! 2. **Extract**: XML documents go through an XML event reader, HTML through an HTML5
//!    parser, plain text is read as-is.
//! 3. **Count**: The lexer turns the text into per-document term counts.

pub mod indexer;
pub mod reader;
pub mod types;

#[cfg(test)]
mod tests;
