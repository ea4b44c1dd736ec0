//! Click limiting — keeps the first N clicks of a nested model in document order.

use rand::RngCore;

use crate::documents::{ClickLabel, ClickMask, Documents};
use crate::error::ClickModelError;

use super::{click_child, ClickModel};

/// Caps the number of clicks produced by a nested model.
///
/// Scanning from the top of the list, clicks are kept until `max_clicks` have
/// been seen; every later click becomes a non-click. This is truncation by
/// position, not a selection of the most relevant clicks. Masked documents
/// pass through untouched and do not count. `None` disables the limit.
pub struct MaxClicksModel {
    click_model: Box<dyn ClickModel>,
    max_clicks: Option<usize>,
}

impl MaxClicksModel {
    pub fn new(click_model: Box<dyn ClickModel>, max_clicks: Option<usize>) -> Self {
        Self {
            click_model,
            max_clicks,
        }
    }

    pub fn unlimited(click_model: Box<dyn ClickModel>) -> Self {
        Self::new(click_model, None)
    }

    pub fn max_clicks(&self) -> Option<usize> {
        self.max_clicks
    }
}

impl ClickModel for MaxClicksModel {
    fn name(&self) -> &str {
        "max_clicks"
    }

    fn click(
        &self,
        documents: &Documents<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<ClickMask, ClickModelError> {
        let underlying = click_child(self.click_model.as_ref(), documents, rng)?;
        let Some(max_clicks) = self.max_clicks else {
            return Ok(underlying);
        };

        let mut running = 0usize;
        let mut suppressed = 0usize;
        let limited: ClickMask = underlying
            .iter()
            .map(|label| {
                if !label.is_clicked() {
                    return label;
                }
                running += 1;
                if running > max_clicks {
                    suppressed += 1;
                    ClickLabel::NotClicked
                } else {
                    label
                }
            })
            .collect();

        if suppressed > 0 {
            tracing::debug!(max_clicks, suppressed, "suppressed clicks over limit");
        }
        Ok(limited)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_models::StaticMask;
    use crate::models::OnlyRelevantClickModel;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn run(model: &MaxClicksModel, n_documents: usize) -> Vec<i8> {
        let relevance = vec![0.0; n_documents];
        let docs = Documents::from_relevance(&relevance);
        model
            .click(&docs, &mut StdRng::seed_from_u64(0))
            .unwrap()
            .values()
    }

    #[test]
    fn keeps_first_clicks_in_document_order() {
        let model = MaxClicksModel::new(StaticMask::boxed(&[1, 1, 1, 0, 1]), Some(2));
        assert_eq!(run(&model, 5), vec![1, 1, 0, 0, 0]);
    }

    #[test]
    fn gaps_do_not_reset_the_count() {
        let model = MaxClicksModel::new(StaticMask::boxed(&[0, 1, 0, 0, 1, 1]), Some(2));
        assert_eq!(run(&model, 6), vec![0, 1, 0, 0, 1, 0]);
    }

    #[test]
    fn zero_limit_clears_all_clicks() {
        let model = MaxClicksModel::new(StaticMask::boxed(&[1, 0, 1]), Some(0));
        assert_eq!(run(&model, 3), vec![0, 0, 0]);
    }

    #[test]
    fn limit_above_click_count_is_a_no_op() {
        let model = MaxClicksModel::new(StaticMask::boxed(&[1, 0, 1]), Some(10));
        assert_eq!(run(&model, 3), vec![1, 0, 1]);
    }

    #[test]
    fn no_limit_returns_child_mask_unchanged() {
        let model = MaxClicksModel::unlimited(StaticMask::boxed(&[1, -1, 1, 1]));
        assert_eq!(run(&model, 4), vec![1, -1, 1, 1]);
    }

    #[test]
    fn masked_entries_are_not_counted() {
        let model = MaxClicksModel::new(StaticMask::boxed(&[-1, 1, -1, 1, 1]), Some(2));
        assert_eq!(run(&model, 5), vec![-1, 1, -1, 1, 0]);
    }

    #[test]
    fn truncates_by_position_not_relevance() {
        let relevance = [1.0, 1.0, 5.0];
        let docs = Documents::from_relevance(&relevance);
        let model = MaxClicksModel::new(Box::new(OnlyRelevantClickModel::new(1.0)), Some(1));
        let mask = model.click(&docs, &mut StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(mask.values(), vec![1, 0, 0]);
    }
}
