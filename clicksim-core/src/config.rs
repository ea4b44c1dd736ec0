//! Declarative click-model configuration.
//!
//! A `ClickModelConfig` is a serializable tree mirroring the runtime model
//! tree. It is loaded from TOML or JSON and turned into trait objects by
//! `factory::create_click_model`.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::models::DEFAULT_PADDING_VALUE;

/// Click-model configuration (serializable enum, tagged by `type`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClickModelConfig {
    /// `n_clicks` uniformly random clicks.
    Random { n_clicks: usize },

    /// Clicks at fixed 0-based positions.
    Fixed { click_positions: Vec<usize> },

    /// Clicks documents with relevance >= threshold.
    OnlyRelevant { relevancy_threshold: f64 },

    /// Delegates to one child per call, picked with the given probabilities.
    Multiple {
        click_models: Vec<ClickModelConfig>,
        probabilities: Vec<f64>,
    },

    /// Combines all children's clicks pointwise.
    Conditioned {
        click_models: Vec<ClickModelConfig>,
        combiner: CombinerKind,
    },

    /// Keeps the first `max_clicks` clicks; omitted means no limit.
    MaxClicks {
        click_model: Box<ClickModelConfig>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_clicks: Option<usize>,
    },

    /// Masks documents whose relevance equals the padding value.
    MaskPadded {
        click_model: Box<ClickModelConfig>,
        #[serde(default = "default_padding_value")]
        padding_value: f64,
    },
}

fn default_padding_value() -> f64 {
    DEFAULT_PADDING_VALUE
}

/// Standard combiners available from configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CombinerKind {
    All,
    Any,
}

/// Errors raised while loading a click-model configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported config extension for {0} (expected .toml or .json)")]
    UnsupportedFormat(String),
}

impl ClickModelConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a config file, choosing the parser from the file extension.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: display.clone(),
            source,
        })?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&content),
            Some("json") => Self::from_json_str(&content),
            _ => Err(ConfigError::UnsupportedFormat(display)),
        }
    }

    /// Type tag of this node, matching the runtime model's `name()`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Random { .. } => "random",
            Self::Fixed { .. } => "fixed",
            Self::OnlyRelevant { .. } => "only_relevant",
            Self::Multiple { .. } => "multiple",
            Self::Conditioned { .. } => "conditioned",
            Self::MaxClicks { .. } => "max_clicks",
            Self::MaskPadded { .. } => "mask_padded",
        }
    }

    /// Nesting depth; primitives have depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Self::Random { .. } | Self::Fixed { .. } | Self::OnlyRelevant { .. } => 1,
            Self::Multiple { click_models, .. } | Self::Conditioned { click_models, .. } => {
                1 + click_models.iter().map(Self::depth).max().unwrap_or(0)
            }
            Self::MaxClicks { click_model, .. } | Self::MaskPadded { click_model, .. } => {
                1 + click_model.depth()
            }
        }
    }
}
