//! Fixed click model — clicks documents at configured positions.

use rand::RngCore;

use crate::documents::{ClickLabel, ClickMask, Documents};
use crate::error::ClickModelError;

use super::ClickModel;

/// Clicks every 0-based position in `click_positions`. Deterministic.
///
/// Duplicate positions collapse into a single click. Positions are checked
/// against the document count on every call, since it can vary between slates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedClickModel {
    click_positions: Vec<usize>,
}

impl FixedClickModel {
    pub fn new(click_positions: Vec<usize>) -> Self {
        Self { click_positions }
    }

    pub fn click_positions(&self) -> &[usize] {
        &self.click_positions
    }
}

impl ClickModel for FixedClickModel {
    fn name(&self) -> &str {
        "fixed"
    }

    fn click(
        &self,
        documents: &Documents<'_>,
        _rng: &mut dyn RngCore,
    ) -> Result<ClickMask, ClickModelError> {
        let n_documents = documents.len();
        let mut mask = ClickMask::not_clicked(n_documents);
        for &position in &self.click_positions {
            if position >= n_documents {
                return Err(ClickModelError::PositionOutOfBounds {
                    position,
                    n_documents,
                });
            }
            mask.set(position, ClickLabel::Clicked);
        }
        Ok(mask)
    }
}
