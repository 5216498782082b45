use crate::search::model::{TermFreq, TermFreqIndex};

use anyhow::{Context, Result};
use dashmap::DashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Concurrent in-memory term-frequency index.
///
/// Shared behind an `Arc` between the HTTP handlers; each document entry is
/// locked independently so readers never block the whole index.
#[derive(Default)]
pub struct IndexStore {
    docs: DashMap<PathBuf, TermFreq>,
}

impl IndexStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_index(index: TermFreqIndex) -> Self {
        Self {
            docs: index.into_iter().collect(),
        }
    }

    /// Stores the term counts of `path`, replacing any previous entry.
    pub fn insert(&self, path: PathBuf, tf: TermFreq) -> Option<TermFreq> {
        self.docs.insert(path, tf)
    }

    pub fn get(&self, path: &Path) -> Option<TermFreq> {
        self.docs.get(path).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Copies the current content into a plain map.
    pub fn snapshot(&self) -> TermFreqIndex {
        self.docs
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    /// Reads an index previously written by [`IndexStore::save`].
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open index file {}", path.display()))?;
        let index: TermFreqIndex = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to parse index file {}", path.display()))?;

        tracing::info!("Loaded {} documents from {}", index.len(), path.display());
        Ok(Self::from_index(index))
    }

    /// Dumps the index as JSON, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let file = File::create(path)
            .with_context(|| format!("failed to create index file {}", path.display()))?;
        serde_json::to_writer(BufWriter::new(file), &self.snapshot())?;

        tracing::info!("Saved {} documents to {}", self.len(), path.display());
        Ok(())
    }
}
