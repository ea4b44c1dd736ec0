//! Batch simulation — applies one click model to many slates.
//!
//! Every slate draws from its own RNG, derived from the master seed, the
//! slate's `query_id` and its position in the batch. Results do not depend on
//! thread count, and repeated slates of one query get independent clicks.

use rayon::prelude::*;

use clicksim_core::{ClickModel, ClickModelError, RngHierarchy};

use crate::slate::{ClickedSlate, Slate};

/// Errors from batch simulation and slate I/O.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("click simulation failed for query {query_id}: {source}")]
    Click {
        query_id: String,
        #[source]
        source: ClickModelError,
    },
    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid slate JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Settings for one batch simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Master seed for the RNG hierarchy.
    pub seed: u64,
    /// Separates repeated simulations over the same slates (e.g. per epoch).
    pub iteration: u64,
    /// Keep slates that received no clicks.
    pub include_empty: bool,
    pub parallel: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            iteration: 0,
            include_empty: false,
            parallel: true,
        }
    }
}

impl SimulationConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_iteration(mut self, iteration: u64) -> Self {
        self.iteration = iteration;
        self
    }

    pub fn with_include_empty(mut self, include_empty: bool) -> Self {
        self.include_empty = include_empty;
        self
    }

    /// Enables or disables parallel execution.
    pub fn with_parallelism(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Simulate clicks on every slate, in input order.
///
/// Slates without any click are dropped unless `include_empty` is set. The
/// first failing slate aborts the batch.
pub fn simulate_clicks(
    model: &dyn ClickModel,
    slates: &[Slate],
    config: &SimulationConfig,
) -> Result<Vec<ClickedSlate>, RunError> {
    let hierarchy = RngHierarchy::new(config.seed);

    let clicked: Vec<ClickedSlate> = if config.parallel {
        slates
            .par_iter()
            .enumerate()
            .map(|(index, slate)| click_slate(model, slate, index, &hierarchy, config.iteration))
            .collect::<Result<Vec<_>, _>>()?
    } else {
        slates
            .iter()
            .enumerate()
            .map(|(index, slate)| click_slate(model, slate, index, &hierarchy, config.iteration))
            .collect::<Result<Vec<_>, _>>()?
    };

    let total = clicked.len();
    let kept: Vec<ClickedSlate> = clicked
        .into_iter()
        .filter(|c| config.include_empty || c.click_count() > 0)
        .collect();

    tracing::info!(
        model = model.name(),
        slates = total,
        kept = kept.len(),
        seed = config.seed,
        iteration = config.iteration,
        "simulated clicks"
    );
    Ok(kept)
}

fn click_slate(
    model: &dyn ClickModel,
    slate: &Slate,
    index: usize,
    hierarchy: &RngHierarchy,
    iteration: u64,
) -> Result<ClickedSlate, RunError> {
    let wrap = |source| RunError::Click {
        query_id: slate.query_id.clone(),
        source,
    };
    let documents = slate.documents().map_err(wrap)?;
    let mut rng = hierarchy.rng_for(&slate.query_id, index as u64, iteration);
    let clicks = model.click(&documents, &mut rng).map_err(wrap)?;
    Ok(ClickedSlate {
        slate: slate.clone(),
        clicks,
    })
}
