//! clicksim core — composable click models for learning-to-rank simulation.
//!
//! This crate contains:
//! - Domain types (documents, click labels, click masks)
//! - The `ClickModel` trait and its primitive variants
//! - Combinators that nest click models (probabilistic, logical, limiting, padding)
//! - Declarative configuration and the factory that builds model trees
//! - A deterministic RNG hierarchy for reproducible simulation

pub mod config;
pub mod documents;
pub mod error;
pub mod factory;
pub mod models;
pub mod rng;

pub use config::{ClickModelConfig, CombinerKind, ConfigError};
pub use documents::{ClickLabel, ClickMask, Documents, InvalidClickValue};
pub use error::ClickModelError;
pub use factory::create_click_model;
pub use models::{
    ClickModel, Combiner, ConditionedClickModel, FixedClickModel, MaskPaddedClickModel,
    MaxClicksModel, MultipleClickModel, OnlyRelevantClickModel, RandomClickModel,
};
pub use rng::RngHierarchy;
