//! Click models — primitives and the combinators that nest them.
//!
//! Primitives compute a mask from the documents and their own configuration:
//! - `RandomClickModel`: a fixed number of uniformly random clicks
//! - `FixedClickModel`: clicks at configured positions
//! - `OnlyRelevantClickModel`: clicks on documents at or above a relevance threshold
//!
//! Combinators wrap other click models and are click models themselves:
//! - `MultipleClickModel`: delegates each call to one child picked by probability
//! - `ConditionedClickModel`: reduces all children's masks pointwise
//! - `MaxClicksModel`: keeps only the first N clicks in document order
//! - `MaskPaddedClickModel`: masks documents that are list padding

pub mod conditioned;
pub mod fixed;
pub mod mask_padded;
pub mod max_clicks;
pub mod multiple;
pub mod only_relevant;
pub mod random;

use rand::RngCore;

use crate::documents::{ClickMask, Documents};
use crate::error::ClickModelError;

/// Trait for click models.
///
/// A click model turns a ranked list of documents into a click mask of the
/// same length. Models are immutable once built: the only thing a call
/// consumes is randomness from `rng`, which the caller owns so simulations
/// can be seeded and replayed.
///
/// Callers never need to know whether they hold a primitive or a combinator.
pub trait ClickModel: Send + Sync {
    /// Short identifier (e.g., "random", "max_clicks").
    fn name(&self) -> &str;

    /// Simulate one user's clicks on `documents`.
    fn click(
        &self,
        documents: &Documents<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<ClickMask, ClickModelError>;
}

impl<M: ClickModel + ?Sized> ClickModel for Box<M> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn click(
        &self,
        documents: &Documents<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<ClickMask, ClickModelError> {
        (**self).click(documents, rng)
    }
}

/// Run a nested model and check it honoured the mask-length contract.
pub(crate) fn click_child(
    child: &dyn ClickModel,
    documents: &Documents<'_>,
    rng: &mut dyn RngCore,
) -> Result<ClickMask, ClickModelError> {
    let mask = child.click(documents, rng)?;
    if mask.len() != documents.len() {
        return Err(ClickModelError::MaskLengthMismatch {
            model: child.name().to_string(),
            expected: documents.len(),
            actual: mask.len(),
        });
    }
    Ok(mask)
}

// Re-export concrete model types.
pub use conditioned::{Combiner, ConditionedClickModel};
pub use fixed::FixedClickModel;
pub use mask_padded::{MaskPaddedClickModel, DEFAULT_PADDING_VALUE};
pub use max_clicks::MaxClicksModel;
pub use multiple::{MultipleClickModel, PROBABILITY_SUM_TOLERANCE};
pub use only_relevant::OnlyRelevantClickModel;
pub use random::RandomClickModel;


#[cfg(test)]
mod tests {
    use super::test_models::StaticMask;
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn boxed_models_are_click_models() {
        let model: Box<dyn ClickModel> = Box::new(FixedClickModel::new(vec![1]));
        let relevance = [0.0, 1.0];
        let docs = Documents::from_relevance(&relevance);
        let mut rng = StdRng::seed_from_u64(0);
        let mask = model.click(&docs, &mut rng).unwrap();
        assert_eq!(mask.values(), vec![0, 1]);
        assert_eq!(model.name(), "fixed");
    }

    #[test]
    fn child_mask_length_is_checked() {
        let child = StaticMask {
            values: vec![1, 0],
        };
        let relevance = [0.0, 1.0, 2.0];
        let docs = Documents::from_relevance(&relevance);
        let mut rng = StdRng::seed_from_u64(0);
        let err = click_child(&child, &docs, &mut rng).unwrap_err();
        assert_eq!(
            err,
            ClickModelError::MaskLengthMismatch {
                model: "static_mask".into(),
                expected: 3,
                actual: 2
            }
        );
    }
}
