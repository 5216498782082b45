use super::lexer::tokenize;
use super::model::{calc_idf, calc_tf, TermFreqIndex};
use super::types::SearchHit;
use crate::storage::IndexStore;

/// Ranks the documents of `store` against `query` by summed TF-IDF.
///
/// Documents scoring zero are dropped. Ties are broken by path so the order
/// is stable across runs.
pub fn search(query: &str, store: &IndexStore, limit: usize) -> Vec<SearchHit> {
    rank(query, &store.snapshot(), limit)
}

pub fn rank(query: &str, index: &TermFreqIndex, limit: usize) -> Vec<SearchHit> {
    let terms = tokenize(query);
    if terms.is_empty() {
        return Vec::new();
    }

    let idf: Vec<(&str, f32)> = terms
        .iter()
        .map(|term| (term.as_str(), calc_idf(term, index.values())))
        .collect();

    let mut hits: Vec<SearchHit> = index
        .iter()
        .filter_map(|(path, doc)| {
            let score: f32 = idf
                .iter()
                .map(|(term, idf)| calc_tf(term, doc) * idf)
                .sum();

            (score > 0.0).then(|| SearchHit {
                path: path.clone(),
                score,
            })
        })
        .collect();

    hits.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.path.cmp(&b.path))
    });
    hits.truncate(limit);
    hits
}

/// Wire format of `/api/search`: one document path per line.
pub fn render_hits(hits: &[SearchHit]) -> String {
    hits.iter()
        .map(|hit| hit.path.display().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
