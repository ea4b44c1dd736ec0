//! Logical combination — every child clicks, a combiner reduces the masks pointwise.

use std::fmt;
use std::sync::Arc;

use rand::RngCore;

use crate::documents::{ClickLabel, ClickMask, Documents};
use crate::error::ClickModelError;

use super::{click_child, ClickModel};

/// Pointwise reduction: one label per child for a single document in, one label out.
pub type CombineFn = dyn Fn(&[ClickLabel]) -> ClickLabel + Send + Sync;

/// How a `ConditionedClickModel` merges its children's labels for one document.
///
/// `All` and `Any` look at clicks only. If any child reports the document as
/// masked, the combined label is masked too. `Custom` sees the raw labels in
/// child order and decides everything itself.
#[derive(Clone)]
pub enum Combiner {
    /// Clicked only if every child clicked.
    All,
    /// Clicked if at least one child clicked.
    Any,
    Custom(Arc<CombineFn>),
}

impl Combiner {
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&[ClickLabel]) -> ClickLabel + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }

    pub fn combine(&self, labels: &[ClickLabel]) -> ClickLabel {
        match self {
            Self::All | Self::Any if labels.contains(&ClickLabel::Masked) => ClickLabel::Masked,
            Self::All => ClickLabel::from_clicked(labels.iter().all(|l| l.is_clicked())),
            Self::Any => ClickLabel::from_clicked(labels.iter().any(|l| l.is_clicked())),
            Self::Custom(f) => f(labels),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Any => "any",
            Self::Custom(_) => "custom",
        }
    }
}

impl fmt::Debug for Combiner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Combiner::{}", self.name())
    }
}

/// Runs every child on the same documents and combines the masks with a `Combiner`.
pub struct ConditionedClickModel {
    click_models: Vec<Box<dyn ClickModel>>,
    combiner: Combiner,
}

impl ConditionedClickModel {
    pub fn new(
        click_models: Vec<Box<dyn ClickModel>>,
        combiner: Combiner,
    ) -> Result<Self, ClickModelError> {
        if click_models.is_empty() {
            return Err(ClickModelError::EmptyModelList {
                model: "conditioned",
            });
        }
        Ok(Self {
            click_models,
            combiner,
        })
    }

    pub fn combiner(&self) -> &Combiner {
        &self.combiner
    }

    pub fn len(&self) -> usize {
        self.click_models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.click_models.is_empty()
    }
}

impl ClickModel for ConditionedClickModel {
    fn name(&self) -> &str {
        "conditioned"
    }

    fn click(
        &self,
        documents: &Documents<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<ClickMask, ClickModelError> {
        let masks = self
            .click_models
            .iter()
            .map(|model| click_child(model.as_ref(), documents, &mut *rng))
            .collect::<Result<Vec<_>, _>>()?;

        let mut column = Vec::with_capacity(masks.len());
        let combined = (0..documents.len())
            .map(|i| {
                column.clear();
                column.extend(masks.iter().map(|m| m[i]));
                self.combiner.combine(&column)
            })
            .collect();

        tracing::debug!(
            children = masks.len(),
            combiner = self.combiner.name(),
            "combined child clicks"
        );
        Ok(combined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_models::StaticMask;
    use crate::models::{FixedClickModel, OnlyRelevantClickModel};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn run(model: &ConditionedClickModel, relevance: &[f64]) -> Vec<i8> {
        let docs = Documents::from_relevance(relevance);
        model
            .click(&docs, &mut StdRng::seed_from_u64(0))
            .unwrap()
            .values()
    }

    fn pair(combiner: Combiner) -> ConditionedClickModel {
        ConditionedClickModel::new(
            vec![StaticMask::boxed(&[1, 0, 1]), StaticMask::boxed(&[1, 1, 1])],
            combiner,
        )
        .unwrap()
    }

    #[test]
    fn all_requires_every_child() {
        assert_eq!(run(&pair(Combiner::All), &[0.0; 3]), vec![1, 0, 1]);
    }

    #[test]
    fn any_accepts_one_child() {
        assert_eq!(run(&pair(Combiner::Any), &[0.0; 3]), vec![1, 1, 1]);
    }

    #[test]
    fn custom_combiner_sees_labels_in_child_order() {
        let first_only = Combiner::custom(|labels| labels[0]);
        assert_eq!(run(&pair(first_only), &[0.0; 3]), vec![1, 0, 1]);

        let majority = Combiner::custom(|labels| {
            let clicks = labels.iter().filter(|l| l.is_clicked()).count();
            ClickLabel::from_clicked(clicks * 2 > labels.len())
        });
        let model = ConditionedClickModel::new(
            vec![
                StaticMask::boxed(&[1, 0, 0]),
                StaticMask::boxed(&[1, 1, 0]),
                StaticMask::boxed(&[0, 1, 1]),
            ],
            majority,
        )
        .unwrap();
        assert_eq!(run(&model, &[0.0; 3]), vec![1, 1, 0]);
    }

    #[test]
    fn masked_label_propagates_through_standard_combiners() {
        let model = ConditionedClickModel::new(
            vec![StaticMask::boxed(&[-1, 1]), StaticMask::boxed(&[1, 1])],
            Combiner::Any,
        )
        .unwrap();
        assert_eq!(run(&model, &[0.0; 2]), vec![-1, 1]);
    }

    #[test]
    fn relevant_and_positioned() {
        let model = ConditionedClickModel::new(
            vec![
                Box::new(OnlyRelevantClickModel::new(1.0)),
                Box::new(FixedClickModel::new(vec![0, 1, 2])),
            ],
            Combiner::All,
        )
        .unwrap();
        assert_eq!(run(&model, &[2.0, 0.0, 1.0, 3.0]), vec![1, 0, 1, 0]);
    }

    #[test]
    fn child_errors_propagate() {
        let model = ConditionedClickModel::new(
            vec![
                Box::new(OnlyRelevantClickModel::new(1.0)),
                Box::new(FixedClickModel::new(vec![9])),
            ],
            Combiner::Any,
        )
        .unwrap();
        let relevance = [1.0, 0.0];
        let docs = Documents::from_relevance(&relevance);
        let err = model
            .click(&docs, &mut StdRng::seed_from_u64(0))
            .unwrap_err();
        assert!(matches!(err, ClickModelError::PositionOutOfBounds { position: 9, .. }));
    }

    #[test]
    fn no_children_is_rejected() {
        let err = ConditionedClickModel::new(Vec::new(), Combiner::All)
            .err()
            .unwrap();
        assert_eq!(
            err,
            ClickModelError::EmptyModelList {
                model: "conditioned"
            }
        );
    }
}
