//! Factory — converts a `ClickModelConfig` tree into runtime click models.
//!
//! Every constructor's validation runs here, so a config that builds is
//! free of construction-time errors; call-time checks still apply.

use crate::config::{ClickModelConfig, CombinerKind};
use crate::error::ClickModelError;
use crate::models::{
    ClickModel, Combiner, ConditionedClickModel, FixedClickModel, MaskPaddedClickModel,
    MaxClicksModel, MultipleClickModel, OnlyRelevantClickModel, RandomClickModel,
};

impl From<CombinerKind> for Combiner {
    fn from(kind: CombinerKind) -> Self {
        match kind {
            CombinerKind::All => Combiner::All,
            CombinerKind::Any => Combiner::Any,
        }
    }
}

/// Create a click model (and, recursively, its children) from config.
pub fn create_click_model(
    config: &ClickModelConfig,
) -> Result<Box<dyn ClickModel>, ClickModelError> {
    match config {
        ClickModelConfig::Random { n_clicks } => Ok(Box::new(RandomClickModel::new(*n_clicks))),
        ClickModelConfig::Fixed { click_positions } => {
            Ok(Box::new(FixedClickModel::new(click_positions.clone())))
        }
        ClickModelConfig::OnlyRelevant {
            relevancy_threshold,
        } => Ok(Box::new(OnlyRelevantClickModel::new(*relevancy_threshold))),
        ClickModelConfig::Multiple {
            click_models,
            probabilities,
        } => {
            let children = create_children(click_models)?;
            Ok(Box::new(MultipleClickModel::new(
                children,
                probabilities.clone(),
            )?))
        }
        ClickModelConfig::Conditioned {
            click_models,
            combiner,
        } => {
            let children = create_children(click_models)?;
            Ok(Box::new(ConditionedClickModel::new(
                children,
                (*combiner).into(),
            )?))
        }
        ClickModelConfig::MaxClicks {
            click_model,
            max_clicks,
        } => {
            let child = create_click_model(click_model)?;
            Ok(Box::new(MaxClicksModel::new(child, *max_clicks)))
        }
        ClickModelConfig::MaskPadded {
            click_model,
            padding_value,
        } => {
            let child = create_click_model(click_model)?;
            Ok(Box::new(MaskPaddedClickModel::with_padding_value(
                child,
                *padding_value,
            )))
        }
    }
}

fn create_children(
    configs: &[ClickModelConfig],
) -> Result<Vec<Box<dyn ClickModel>>, ClickModelError> {
    configs.iter().map(create_click_model).collect()
}
