//! TF-IDF scoring primitives.

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

/// Term counts of a single document. Keys stay sorted in the JSON dump.
pub type TermFreq = BTreeMap<String, usize>;

/// Term counts of every indexed document, keyed by document path.
pub type TermFreqIndex = HashMap<PathBuf, TermFreq>;

/// Share of `doc`'s terms that are `term`. An empty document scores 0.
pub fn calc_tf(term: &str, doc: &TermFreq) -> f32 {
    let total: usize = doc.values().sum();
    if total == 0 {
        return 0.0;
    }

    let count = doc.get(term).copied().unwrap_or(0);
    count as f32 / total as f32
}

/// `log10(N / m)` where `m` is the number of documents holding `term`,
/// clamped to at least 1 so the result is never negative or infinite.
pub fn calc_idf<'a, I>(term: &str, docs: I) -> f32
where
    I: IntoIterator<Item = &'a TermFreq>,
{
    let mut total_docs = 0usize;
    let mut docs_with_term = 0usize;

    for doc in docs {
        total_docs += 1;
        if doc.contains_key(term) {
            docs_with_term += 1;
        }
    }

    if total_docs == 0 {
        return 0.0;
    }

    (total_docs as f32 / docs_with_term.max(1) as f32).log10()
}
