//! Random click model — clicks a fixed number of uniformly chosen documents.

use rand::seq::index;
use rand::RngCore;

use crate::documents::{ClickLabel, ClickMask, Documents};
use crate::error::ClickModelError;

use super::ClickModel;

/// Clicks `n_clicks` distinct documents drawn uniformly without replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomClickModel {
    n_clicks: usize,
}

impl RandomClickModel {
    pub fn new(n_clicks: usize) -> Self {
        Self { n_clicks }
    }

    pub fn n_clicks(&self) -> usize {
        self.n_clicks
    }
}

impl ClickModel for RandomClickModel {
    fn name(&self) -> &str {
        "random"
    }

    fn click(
        &self,
        documents: &Documents<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<ClickMask, ClickModelError> {
        let n_documents = documents.len();
        if self.n_clicks > n_documents {
            return Err(ClickModelError::TooManyClicks {
                n_clicks: self.n_clicks,
                n_documents,
            });
        }

        let mut mask = ClickMask::not_clicked(n_documents);
        for position in index::sample(rng, n_documents, self.n_clicks).iter() {
            mask.set(position, ClickLabel::Clicked);
        }
        Ok(mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const RELEVANCE: [f64; 6] = [0.0, 1.0, 2.0, 0.0, 4.0, 1.0];

    #[test]
    fn clicks_exactly_n_documents() {
        let model = RandomClickModel::new(3);
        let docs = Documents::from_relevance(&RELEVANCE);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let mask = model.click(&docs, &mut rng).unwrap();
            assert_eq!(mask.len(), RELEVANCE.len());
            assert_eq!(mask.click_count(), 3);
            assert!(mask.iter().all(|l| l != ClickLabel::Masked));
        }
    }

    #[test]
    fn same_seed_same_clicks() {
        let model = RandomClickModel::new(2);
        let docs = Documents::from_relevance(&RELEVANCE);
        let a = model.click(&docs, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = model.click(&docs, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_draws_vary_positions() {
        let model = RandomClickModel::new(1);
        let docs = Documents::from_relevance(&RELEVANCE);
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let mask = model.click(&docs, &mut rng).unwrap();
            seen.insert(mask.clicked_positions()[0]);
        }
        assert_eq!(seen.len(), RELEVANCE.len());
    }

    #[test]
    fn zero_clicks_and_all_clicks() {
        let docs = Documents::from_relevance(&RELEVANCE);
        let mut rng = StdRng::seed_from_u64(3);
        let none = RandomClickModel::new(0).click(&docs, &mut rng).unwrap();
        assert_eq!(none.click_count(), 0);
        let all = RandomClickModel::new(6).click(&docs, &mut rng).unwrap();
        assert_eq!(all.values(), vec![1; 6]);
    }

    #[test]
    fn more_clicks_than_documents_is_an_error() {
        let docs = Documents::from_relevance(&RELEVANCE);
        let err = RandomClickModel::new(7)
            .click(&docs, &mut StdRng::seed_from_u64(0))
            .unwrap_err();
        assert_eq!(
            err,
            ClickModelError::TooManyClicks {
                n_clicks: 7,
                n_documents: 6
            }
        );
    }
}
