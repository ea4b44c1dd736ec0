//! Domain types — documents handed to click models and the masks they return.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

use crate::error::ClickModelError;

// ─── Documents ───────────────────────────────────────────────────────

/// A ranked list of documents: one feature vector and one relevance label each.
///
/// Borrowed view, so slates owned elsewhere can be clicked without copying.
/// Order is rank order; index 0 is the top result. The document count is the
/// length of `relevance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Documents<'a> {
    features: &'a [Vec<f64>],
    relevance: &'a [f64],
}

impl<'a> Documents<'a> {
    /// Pair features with relevance labels, rejecting mismatched lengths.
    pub fn new(features: &'a [Vec<f64>], relevance: &'a [f64]) -> Result<Self, ClickModelError> {
        if features.len() != relevance.len() {
            return Err(ClickModelError::LengthMismatch {
                features: features.len(),
                relevance: relevance.len(),
            });
        }
        Ok(Self {
            features,
            relevance,
        })
    }

    /// Documents carrying relevance labels only. No variant reads features,
    /// so this is enough to drive any click model. `features()` is then empty
    /// while `len()` counts the relevance labels.
    pub fn from_relevance(relevance: &'a [f64]) -> Self {
        Self {
            features: &[],
            relevance,
        }
    }

    /// Feature vectors, one per document, or an empty slice for documents
    /// built with `from_relevance`. Only in the latter case may this be
    /// shorter than `len()`.
    pub fn features(&self) -> &'a [Vec<f64>] {
        self.features
    }

    pub fn relevance(&self) -> &'a [f64] {
        self.relevance
    }

    pub fn len(&self) -> usize {
        self.relevance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relevance.is_empty()
    }
}

// ─── ClickLabel ──────────────────────────────────────────────────────

/// Observation recorded for one document.
///
/// Serialized as its integer value: `1`, `0` or `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum ClickLabel {
    /// No observation was made for this document (e.g. list padding).
    Masked,
    NotClicked,
    Clicked,
}

impl ClickLabel {
    pub fn value(self) -> i8 {
        match self {
            Self::Masked => -1,
            Self::NotClicked => 0,
            Self::Clicked => 1,
        }
    }

    pub fn is_clicked(self) -> bool {
        self == Self::Clicked
    }

    pub fn from_clicked(clicked: bool) -> Self {
        if clicked {
            Self::Clicked
        } else {
            Self::NotClicked
        }
    }
}

impl From<ClickLabel> for i8 {
    fn from(label: ClickLabel) -> Self {
        label.value()
    }
}

impl TryFrom<i8> for ClickLabel {
    type Error = InvalidClickValue;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Self::Masked),
            0 => Ok(Self::NotClicked),
            1 => Ok(Self::Clicked),
            other => Err(InvalidClickValue(other)),
        }
    }
}

/// An integer outside `{-1, 0, 1}` was offered as a click label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("click value must be -1, 0 or 1, got {0}")]
pub struct InvalidClickValue(pub i8);

// ─── ClickMask ───────────────────────────────────────────────────────

/// Per-document click labels, same length and order as the documents clicked.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClickMask(Vec<ClickLabel>);

impl ClickMask {
    /// All documents observed and none clicked.
    pub fn not_clicked(len: usize) -> Self {
        Self(vec![ClickLabel::NotClicked; len])
    }

    pub fn from_labels(labels: Vec<ClickLabel>) -> Self {
        Self(labels)
    }

    /// Build a mask from integer values, failing on anything outside `{-1, 0, 1}`.
    pub fn from_values(values: &[i8]) -> Result<Self, InvalidClickValue> {
        values
            .iter()
            .map(|&v| ClickLabel::try_from(v))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    pub fn labels(&self) -> &[ClickLabel] {
        &self.0
    }

    pub fn into_labels(self) -> Vec<ClickLabel> {
        self.0
    }

    /// Integer view: `1` clicked, `0` not clicked, `-1` masked.
    pub fn values(&self) -> Vec<i8> {
        self.0.iter().map(|l| l.value()).collect()
    }

    pub fn set(&mut self, index: usize, label: ClickLabel) {
        self.0[index] = label;
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn click_count(&self) -> usize {
        self.0.iter().filter(|l| l.is_clicked()).count()
    }

    /// Indices of clicked documents, in document order.
    pub fn clicked_positions(&self) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, l)| l.is_clicked())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = ClickLabel> + '_ {
        self.0.iter().copied()
    }
}

impl Index<usize> for ClickMask {
    type Output = ClickLabel;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl FromIterator<ClickLabel> for ClickMask {
    fn from_iter<I: IntoIterator<Item = ClickLabel>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for ClickMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, label) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", label.value())?;
        }
        write!(f, "]")
    }
}
