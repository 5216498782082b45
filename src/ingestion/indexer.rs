use super::reader::read_document;
use super::types::{DocumentKind, IndexReport};
use crate::search::lexer::index_terms;
use crate::storage::IndexStore;

use anyhow::{bail, Result};
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Indexes every supported document below `dir` into `store`.
///
/// Files that fail to read or parse are logged and counted as skipped; only
/// an unreadable root directory aborts the run.
pub fn index_directory(dir: &Path, store: &IndexStore) -> Result<IndexReport> {
    if !dir.is_dir() {
        bail!("{} is not a directory", dir.display());
    }

    let started = Instant::now();
    let mut report = IndexReport::default();
    walk(dir, store, &mut report)?;
    report.elapsed = started.elapsed();

    tracing::info!(
        "Indexed {} documents under {} in {:?} ({} skipped)",
        report.indexed,
        dir.display(),
        report.elapsed,
        report.skipped
    );
    Ok(report)
}

fn walk(dir: &Path, store: &IndexStore, report: &mut IndexReport) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            if let Err(err) = walk(&path, store, report) {
                tracing::warn!("Skipping directory {}: {:#}", path.display(), err);
            }
            continue;
        }

        let Some(kind) = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(DocumentKind::from_extension)
        else {
            continue;
        };

        match read_document(&path, kind) {
            Ok(content) => {
                tracing::debug!("Indexing {}", path.display());
                store.insert(path, index_terms(&content));
                report.indexed += 1;
            }
            Err(err) => {
                tracing::warn!("Skipping {}: {:#}", path.display(), err);
                report.skipped += 1;
            }
        }
    }

    Ok(())
}
