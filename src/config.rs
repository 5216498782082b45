//! Environment-driven settings shared by the binaries.
//!
//! Values are kept as read and parsed by the accessor of the subcommand that
//! needs them, so a bad `DOCSEARCH_BIND` only fails `serve`.

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
pub const DEFAULT_INDEX_PATH: &str = "assets/index.json";
pub const DEFAULT_RESULT_LIMIT: usize = 20;
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080";

#[derive(Debug, Clone)]
pub struct Config {
    /// `DOCSEARCH_BIND`: address the HTTP server listens on.
    bind: String,
    /// `DOCSEARCH_RESULT_LIMIT`: maximum number of hits per query.
    result_limit: Option<String>,
    /// `DOCSEARCH_INDEX`: JSON index written by `index` and read by `search`/`serve`.
    pub index_path: PathBuf,
    /// `DOCSEARCH_URL`: server the terminal front-end talks to.
    pub server_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            result_limit: None,
            index_path: PathBuf::from(DEFAULT_INDEX_PATH),
            server_url: DEFAULT_SERVER_URL.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            bind: lookup("DOCSEARCH_BIND").unwrap_or(defaults.bind),
            result_limit: lookup("DOCSEARCH_RESULT_LIMIT"),
            index_path: lookup("DOCSEARCH_INDEX")
                .map(PathBuf::from)
                .unwrap_or(defaults.index_path),
            server_url: lookup("DOCSEARCH_URL").unwrap_or(defaults.server_url),
        }
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.bind
            .parse()
            .with_context(|| format!("invalid DOCSEARCH_BIND: {:?}", self.bind))
    }

    pub fn result_limit(&self) -> Result<usize> {
        match &self.result_limit {
            Some(limit) => limit
                .parse()
                .with_context(|| format!("invalid DOCSEARCH_RESULT_LIMIT: {limit:?}")),
            None => Ok(DEFAULT_RESULT_LIMIT),
        }
    }
}

/// Installs the `tracing` subscriber used by every binary.
///
/// Honors `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
