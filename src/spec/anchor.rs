//! Anchor point specs such as `"lt lb"`
//!
//! The first token is the point on the floating element, the second the
//! point on the context. Each token is a horizontal character (`l`, `r`,
//! `c`) followed by a vertical one (`t`, `b`, `m`). Only the token length is
//! checked here; unsupported character pairs surface later as
//! [`LayoutError::UndefinedCombination`](crate::layout::LayoutError).

use std::fmt;

use crate::error::{SpecError, SpecField};
use crate::layout::types::{Direction, Side};

use super::lexer::lex;

/// Anchor points used when a request names none
pub const DEFAULT_POINTS: &str = "cm cm";

/// A single anchor point: horizontal and vertical characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnchorPoint {
    pub x: char,
    pub y: char,
}

impl AnchorPoint {
    pub const fn new(x: char, y: char) -> Self {
        Self { x, y }
    }

    pub const fn with_x(self, x: char) -> Self {
        Self { x, y: self.y }
    }

    pub const fn with_y(self, y: char) -> Self {
        Self { x: self.x, y }
    }
}

impl fmt::Display for AnchorPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.x, self.y)
    }
}

/// Element anchor paired with context anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnchorSpec {
    pub element: AnchorPoint,
    pub context: AnchorPoint,
}

/// Requested anchor specs with a presentation label
const LABELS: &[(&str, Side)] = &[
    ("lt lb", Side::Bottom),
    ("lb lt", Side::Top),
    ("rt rb", Side::Bottom),
    ("rb rt", Side::Top),
    ("lt rt", Side::Right),
    ("cm cm", Side::Center),
];

impl AnchorSpec {
    pub const fn new(element: AnchorPoint, context: AnchorPoint) -> Self {
        Self { element, context }
    }

    /// Parse an anchor spec string
    pub fn parse(input: &str) -> Result<Self, SpecError> {
        let spans: Vec<_> = lex(input).map(|(_, span)| span).collect();

        if spans.len() != 2 {
            let span = match spans.get(2) {
                Some(extra) => extra.start..input.len(),
                None => 0..input.len(),
            };
            return Err(SpecError::token_count(SpecField::Points, spans.len(), span));
        }

        let mut points = spans.into_iter().map(|span| {
            let token = &input[span.clone()];
            let mut chars = token.chars();
            match (chars.next(), chars.next(), chars.next()) {
                (Some(x), Some(y), None) => Ok(AnchorPoint::new(x, y)),
                _ => Err(SpecError::anchor_length(token, span)),
            }
        });

        match (points.next(), points.next()) {
            (Some(element), Some(context)) => Ok(Self::new(element?, context?)),
            _ => Err(SpecError::token_count(SpecField::Points, 0, 0..input.len())),
        }
    }

    /// Both anchors at the center-middle point
    pub fn is_centered(&self) -> bool {
        let center = AnchorPoint::new('c', 'm');
        self.element == center && self.context == center
    }

    /// Element top-left on context bottom-left, i.e. a dropdown below
    pub fn is_below(&self) -> bool {
        self.element == AnchorPoint::new('l', 't') && self.context == AnchorPoint::new('l', 'b')
    }

    /// Presentation label for this spec as requested, before any flip
    pub fn direction(&self) -> Option<Direction> {
        let key = self.to_string();
        LABELS
            .iter()
            .find(|(points, _)| *points == key)
            .map(|(_, side)| Direction::new(*side))
    }

    /// Key for the horizontal lookup table, e.g. `"lr"`
    pub fn horizontal_key(&self) -> String {
        [self.element.x, self.context.x].iter().collect()
    }

    /// Key for the vertical lookup table, e.g. `"tb"`
    pub fn vertical_key(&self) -> String {
        [self.element.y, self.context.y].iter().collect()
    }
}

impl fmt::Display for AnchorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.element, self.context)
    }
}
