//! Click statistics over a simulated batch.

use serde::{Deserialize, Serialize};

use clicksim_core::ClickLabel;

use crate::slate::ClickedSlate;

/// Aggregate click behaviour of a batch.
///
/// Rates are computed over observed documents only; masked positions count
/// neither as impressions nor as clicks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClickStatistics {
    pub slates: usize,
    pub total_clicks: usize,
    pub mean_clicks_per_slate: f64,
    /// Share of slates with no click at all.
    pub empty_slate_fraction: f64,
    /// Click-through rate by rank position (index 0 = top result).
    pub ctr_by_position: Vec<f64>,
    /// Observed (unmasked) documents by rank position.
    pub impressions_by_position: Vec<usize>,
}

impl ClickStatistics {
    pub fn from_clicked(clicked: &[ClickedSlate]) -> Self {
        let slates = clicked.len();
        let max_len = clicked.iter().map(|c| c.clicks.len()).max().unwrap_or(0);

        let mut impressions = vec![0usize; max_len];
        let mut clicks = vec![0usize; max_len];
        let mut empty = 0usize;

        for slate in clicked {
            if slate.click_count() == 0 {
                empty += 1;
            }
            for (i, label) in slate.clicks.iter().enumerate() {
                match label {
                    ClickLabel::Masked => {}
                    ClickLabel::NotClicked => impressions[i] += 1,
                    ClickLabel::Clicked => {
                        impressions[i] += 1;
                        clicks[i] += 1;
                    }
                }
            }
        }

        let total_clicks: usize = clicks.iter().sum();
        let ctr_by_position = clicks
            .iter()
            .zip(&impressions)
            .map(|(&c, &n)| if n == 0 { 0.0 } else { c as f64 / n as f64 })
            .collect();

        let (mean_clicks_per_slate, empty_slate_fraction) = if slates == 0 {
            (0.0, 0.0)
        } else {
            (
                total_clicks as f64 / slates as f64,
                empty as f64 / slates as f64,
            )
        };

        Self {
            slates,
            total_clicks,
            mean_clicks_per_slate,
            empty_slate_fraction,
            ctr_by_position,
            impressions_by_position: impressions,
        }
    }
}
