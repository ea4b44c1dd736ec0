//! Padding-aware wrapper — padded list positions stay masked.
//!
//! Batched slates are padded to a common length with a sentinel relevance.
//! Those positions were never shown to anyone, so they must come out as
//! masked (-1) rather than as a click or a skip.

use rand::RngCore;

use crate::documents::{ClickLabel, ClickMask, Documents};
use crate::error::ClickModelError;

use super::{click_child, ClickModel};

/// Relevance value marking a padded document.
pub const DEFAULT_PADDING_VALUE: f64 = -1.0;

/// Runs a nested model, then masks every document whose relevance equals `padding_value`.
pub struct MaskPaddedClickModel {
    click_model: Box<dyn ClickModel>,
    padding_value: f64,
}

impl MaskPaddedClickModel {
    pub fn new(click_model: Box<dyn ClickModel>) -> Self {
        Self::with_padding_value(click_model, DEFAULT_PADDING_VALUE)
    }

    pub fn with_padding_value(click_model: Box<dyn ClickModel>, padding_value: f64) -> Self {
        Self {
            click_model,
            padding_value,
        }
    }

    pub fn padding_value(&self) -> f64 {
        self.padding_value
    }
}

impl ClickModel for MaskPaddedClickModel {
    fn name(&self) -> &str {
        "mask_padded"
    }

    fn click(
        &self,
        documents: &Documents<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<ClickMask, ClickModelError> {
        let mut mask = click_child(self.click_model.as_ref(), documents, rng)?;
        for (i, &relevance) in documents.relevance().iter().enumerate() {
            if relevance == self.padding_value {
                mask.set(i, ClickLabel::Masked);
            }
        }
        Ok(mask)
    }
}
