//! Error taxonomy for click models.
//!
//! Every failure a click model can report is an invalid-argument condition:
//! either a malformed configuration caught at construction time, or input
//! that does not fit the configuration caught on a `click` call.

/// Errors raised while constructing or invoking a click model.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClickModelError {
    #[error("invalid argument: cannot sample {n_clicks} clicks from {n_documents} documents")]
    TooManyClicks { n_clicks: usize, n_documents: usize },

    #[error("invalid argument: click position {position} out of bounds for {n_documents} documents")]
    PositionOutOfBounds { position: usize, n_documents: usize },

    #[error("invalid argument: {model} requires at least one nested click model")]
    EmptyModelList { model: &'static str },

    #[error("invalid argument: {models} click models but {probabilities} probabilities")]
    ProbabilityCountMismatch { models: usize, probabilities: usize },

    #[error("invalid argument: probability at index {index} is {value}, expected a finite value >= 0")]
    InvalidProbability { index: usize, value: f64 },

    #[error("invalid argument: probabilities should sum to one, but got {probabilities:?} which sums to {sum}")]
    ProbabilitiesDoNotSumToOne { probabilities: Vec<f64>, sum: f64 },

    #[error("invalid argument: {features} feature vectors but {relevance} relevance labels")]
    LengthMismatch { features: usize, relevance: usize },

    #[error("invalid argument: nested model `{model}` returned {actual} clicks for {expected} documents")]
    MaskLengthMismatch {
        model: String,
        expected: usize,
        actual: usize,
    },
}

impl ClickModelError {
    /// All click-model errors belong to the invalid-argument class; none are
    /// transient and none should be retried.
    pub fn is_invalid_argument(&self) -> bool {
        true
    }
}
