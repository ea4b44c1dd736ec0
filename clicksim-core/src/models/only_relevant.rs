//! Relevance-threshold click model.

use rand::RngCore;

use crate::documents::{ClickLabel, ClickMask, Documents};
use crate::error::ClickModelError;

use super::ClickModel;

/// Clicks every document whose relevance is at least `relevancy_threshold`.
///
/// The comparison is inclusive, and no randomness is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct OnlyRelevantClickModel {
    relevancy_threshold: f64,
}

impl OnlyRelevantClickModel {
    pub fn new(relevancy_threshold: f64) -> Self {
        Self {
            relevancy_threshold,
        }
    }

    pub fn relevancy_threshold(&self) -> f64 {
        self.relevancy_threshold
    }
}

impl ClickModel for OnlyRelevantClickModel {
    fn name(&self) -> &str {
        "only_relevant"
    }

    fn click(
        &self,
        documents: &Documents<'_>,
        _rng: &mut dyn RngCore,
    ) -> Result<ClickMask, ClickModelError> {
        Ok(documents
            .relevance()
            .iter()
            .map(|&r| ClickLabel::from_clicked(r >= self.relevancy_threshold))
            .collect())
    }
}
