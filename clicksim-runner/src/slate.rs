//! Slates — one query's ranked documents — and their JSON I/O.

use serde::{Deserialize, Serialize};
use std::path::Path;

use clicksim_core::{ClickMask, ClickModelError, Documents};

use crate::simulate::RunError;

/// A query's ranked list of documents.
///
/// `features` may be omitted; click models only read relevance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Slate {
    pub query_id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<Vec<f64>>,
    pub relevance: Vec<f64>,
}

impl Slate {
    pub fn new(query_id: impl Into<String>, relevance: Vec<f64>) -> Self {
        Self {
            query_id: query_id.into(),
            features: Vec::new(),
            relevance,
        }
    }

    /// Borrow the slate as click-model input, checking lengths when features are present.
    pub fn documents(&self) -> Result<Documents<'_>, ClickModelError> {
        if self.features.is_empty() {
            Ok(Documents::from_relevance(&self.relevance))
        } else {
            Documents::new(&self.features, &self.relevance)
        }
    }

    pub fn len(&self) -> usize {
        self.relevance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relevance.is_empty()
    }
}

/// A slate together with the clicks simulated on it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClickedSlate {
    #[serde(flatten)]
    pub slate: Slate,
    pub clicks: ClickMask,
}

impl ClickedSlate {
    pub fn click_count(&self) -> usize {
        self.clicks.click_count()
    }
}

/// Read a JSON array of slates.
pub fn load_slates(path: &Path) -> Result<Vec<Slate>, RunError> {
    let content = std::fs::read_to_string(path).map_err(|source| RunError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}

/// Write clicked slates as a pretty-printed JSON array.
pub fn save_clicked(path: &Path, clicked: &[ClickedSlate]) -> Result<(), RunError> {
    let json = serde_json::to_string_pretty(clicked)?;
    std::fs::write(path, json).map_err(|source| RunError::Io {
        path: path.display().to_string(),
        source,
    })
}
