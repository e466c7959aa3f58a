//! Error types for the positioning engine

use std::fmt;

use thiserror::Error;

/// Axis of an anchor lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => f.write_str("horizontal"),
            Axis::Vertical => f.write_str("vertical"),
        }
    }
}

/// Errors that can occur while computing a placement
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayoutError {
    /// Anchor pair with no entry in the placement tables
    #[error("anchor points '{points}' use unsupported {axis} combination '{key}' (supported: {supported})")]
    UndefinedCombination {
        points: String,
        axis: Axis,
        key: String,
        supported: String,
    },
}

impl LayoutError {
    /// Create an undefined combination error
    pub fn undefined_combination(
        points: impl Into<String>,
        axis: Axis,
        key: impl Into<String>,
        supported: &[&str],
    ) -> Self {
        Self::UndefinedCombination {
            points: points.into(),
            axis,
            key: key.into(),
            supported: supported.join(", "),
        }
    }
}
