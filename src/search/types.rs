use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A ranked document returned by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub path: PathBuf,
    pub score: f32,
}
