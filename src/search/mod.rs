//! Search Service Module
//!
//! Executes queries against the local term-frequency index.
//!
//! ## Responsibilities
//! - **Tokenization**: Splitting document text and queries into upper-cased terms.
//! - **Ranking**: Scoring documents with TF-IDF over the query terms.
//! - **API**: Answering `POST /api/search` with newline-separated document paths.
//!
//! ## Submodules
//! - **`engine`**: Ranking and the plain-text wire format.
//! - **`handlers`**: HTTP request handler for the Axum web server.
//! - **`lexer`**: Tokenizer shared by indexing and querying.
//! - **`model`**: Term-frequency types and the TF / IDF formulas.
//! - **`types`**: Result types.

pub mod engine;
pub mod handlers;
pub mod lexer;
pub mod model;
pub mod types;
