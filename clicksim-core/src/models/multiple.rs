//! Probabilistic delegation — each call is handed to one child picked at random.

use rand::{Rng, RngCore};

use crate::documents::{ClickMask, Documents};
use crate::error::ClickModelError;

use super::{click_child, ClickModel};

/// Absolute tolerance when checking that probabilities sum to one.
pub const PROBABILITY_SUM_TOLERANCE: f64 = 1e-5;

/// Delegates each call to exactly one child, chosen with the configured probability.
///
/// Selection draws `u` uniformly from `[0, 1)` and picks the first child whose
/// cumulative probability is strictly greater than `u`. A draw landing exactly
/// on a cumulative boundary therefore goes to the next child. Children with
/// probability zero are legal and never selected.
pub struct MultipleClickModel {
    click_models: Vec<Box<dyn ClickModel>>,
    probabilities: Vec<f64>,
    cumulative: Vec<f64>,
}

impl MultipleClickModel {
    pub fn new(
        click_models: Vec<Box<dyn ClickModel>>,
        probabilities: Vec<f64>,
    ) -> Result<Self, ClickModelError> {
        if click_models.len() != probabilities.len() {
            return Err(ClickModelError::ProbabilityCountMismatch {
                models: click_models.len(),
                probabilities: probabilities.len(),
            });
        }
        if click_models.is_empty() {
            return Err(ClickModelError::EmptyModelList { model: "multiple" });
        }
        if let Some((index, &value)) = probabilities
            .iter()
            .enumerate()
            .find(|(_, p)| !p.is_finite() || **p < 0.0)
        {
            return Err(ClickModelError::InvalidProbability { index, value });
        }

        let cumulative: Vec<f64> = probabilities
            .iter()
            .scan(0.0, |acc, &p| {
                *acc += p;
                Some(*acc)
            })
            .collect();
        let sum = cumulative.last().copied().unwrap_or(0.0);
        if (sum - 1.0).abs() > PROBABILITY_SUM_TOLERANCE {
            return Err(ClickModelError::ProbabilitiesDoNotSumToOne { probabilities, sum });
        }

        Ok(Self {
            click_models,
            probabilities,
            cumulative,
        })
    }

    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    pub fn len(&self) -> usize {
        self.click_models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.click_models.is_empty()
    }

    /// Index of the child that handles draw `u`.
    ///
    /// Probabilities may sum to slightly less than one; a draw past the last
    /// cumulative value goes to the last child that can be selected at all.
    fn select(&self, u: f64) -> usize {
        self.cumulative
            .iter()
            .position(|&c| u < c)
            .or_else(|| self.probabilities.iter().rposition(|&p| p > 0.0))
            .unwrap_or(0)
    }
}

impl ClickModel for MultipleClickModel {
    fn name(&self) -> &str {
        "multiple"
    }

    fn click(
        &self,
        documents: &Documents<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<ClickMask, ClickModelError> {
        let u: f64 = rng.gen();
        let index = self.select(u);
        let child = &self.click_models[index];
        tracing::debug!(draw = u, index, model = child.name(), "delegating click");
        click_child(child.as_ref(), documents, rng)
    }
}
