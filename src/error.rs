//! Error types for anchor and offset spec strings

use std::fmt;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use thiserror::Error;

pub use crate::spec::lexer::Span;

/// Which request field a spec string came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecField {
    /// The anchor points, e.g. `"lt lb"`
    Points,
    /// The pixel offset pair, e.g. `"0 5"`
    Offset,
}

impl fmt::Display for SpecField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecField::Points => f.write_str("points"),
            SpecField::Offset => f.write_str("offset"),
        }
    }
}

/// A malformed positioning spec string
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpecError {
    /// An anchor point that is not exactly two characters long
    #[error("anchor point '{token}' must be exactly two characters")]
    AnchorTokenLength { token: String, span: Span },

    /// Wrong number of space-separated values
    #[error("{field} expects two space-separated values, found {found}")]
    TokenCount {
        field: SpecField,
        found: usize,
        span: Span,
    },

    /// An offset component that is not an integer
    #[error("offset value '{token}' is not an integer")]
    NotNumeric { token: String, span: Span },
}

impl SpecError {
    pub fn anchor_length(token: impl Into<String>, span: Span) -> Self {
        Self::AnchorTokenLength {
            token: token.into(),
            span,
        }
    }

    pub fn token_count(field: SpecField, found: usize, span: Span) -> Self {
        Self::TokenCount { field, found, span }
    }

    pub fn not_numeric(token: impl Into<String>, span: Span) -> Self {
        Self::NotNumeric {
            token: token.into(),
            span,
        }
    }

    /// The request field the malformed string belongs to
    pub fn field(&self) -> SpecField {
        match self {
            Self::AnchorTokenLength { .. } => SpecField::Points,
            Self::TokenCount { field, .. } => *field,
            Self::NotNumeric { .. } => SpecField::Offset,
        }
    }

    pub fn span(&self) -> &Span {
        match self {
            Self::AnchorTokenLength { span, .. }
            | Self::TokenCount { span, .. }
            | Self::NotNumeric { span, .. } => span,
        }
    }

    /// Format the error with source context using ariadne
    ///
    /// `source` must be the spec string named by [`SpecError::field`].
    pub fn format(&self, source: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        let message = self.to_string();
        let hint = match self.field() {
            SpecField::Points => "expected two anchors such as \"lt lb\"",
            SpecField::Offset => "expected two integers such as \"0 5\"",
        };
        let span = self.span().clone();

        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_config(Config::default().with_color(false))
            .with_message(&message)
            .with_label(
                Label::new((filename, span))
                    .with_message(hint)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => message,
        }
    }
}
