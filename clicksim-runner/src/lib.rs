//! clicksim runner — batch click simulation on top of `clicksim-core`.
//!
//! This crate provides:
//! - Slates (one query's ranked documents) and JSON slate I/O
//! - Deterministic, optionally parallel batch simulation
//! - Click statistics (per-position CTR, clicks per slate, empty slates)

pub mod simulate;
pub mod slate;
pub mod stats;

pub use simulate::{simulate_clicks, RunError, SimulationConfig};
pub use slate::{load_slates, save_clicked, ClickedSlate, Slate};
pub use stats::ClickStatistics;
