//! Local Document Search Engine Library
//!
//! This library crate defines the modules behind the `docsearch` binary and the
//! `docsearch-ui` terminal front-end.
//!
//! ## Architecture Modules
//! - **`cli`**: Argument parsing and dispatch of the `index`, `search` and `serve` subcommands.
//! - **`config`**: Environment-driven settings and logging setup.
//! - **`frontend`**: The search form controller. Posts the query typed by the user to
//!   `/api/search` and renders the response lines.
//! - **`ingestion`**: Walks a directory of documents, extracts their text and counts terms.
//! - **`search`**: The lexer, TF-IDF scoring and the `/api/search` handler.
//! - **`server`**: The Axum router serving the search page and the API.
//! - **`storage`**: The concurrent in-memory index and its JSON persistence.

pub mod cli;
pub mod config;
pub mod frontend;
pub mod ingestion;
pub mod search;
pub mod server;
pub mod storage;
