//! Per-call geometry derived from what the host measured
//!
//! The host supplies raw page geometry. Before any placement is computed the
//! configured offset is folded in: the viewport's leading edges move by it,
//! the context moves by it, and a relatively positioned offset parent yields
//! a correction that is subtracted from the context.

use crate::spec::AnchorSpec;

use super::error::LayoutError;
use super::placement::compute_placement;
use super::types::{
    Direction, Offset, OffsetParent, PositionResult, Positioning, Rect, Size, Viewport,
};

/// Correction for an offset parent that shifts the coordinate origin
///
/// Only relatively positioned parents shift it; anything else yields zero.
pub fn parent_correction(parent: Option<&OffsetParent>, offset: Offset) -> Offset {
    match parent {
        Some(parent) if parent.positioning == Positioning::Relative => Offset::new(
            parent.rect.left - (offset.left - parent.border_left()),
            parent.rect.top - offset.top,
        ),
        _ => Offset::zero(),
    }
}

/// Rectangle the element is anchored to
///
/// Without a context element the (already shifted) viewport is the context.
pub fn context_geometry(
    context: Option<&Rect>,
    viewport: &Viewport,
    correction: Offset,
    offset: Offset,
) -> Rect {
    match context {
        Some(rect) => Rect::new(
            rect.left + offset.left - correction.left,
            rect.top + offset.top - correction.top,
            rect.width,
            rect.height,
        ),
        None => viewport.as_rect(),
    }
}

/// Everything a placement needs for one positioning call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub element: Size,
    pub context: Rect,
    pub viewport: Viewport,
    pub correction: Offset,
    pub offset: Offset,
}

impl Frame {
    /// Derive the per-call geometry from host measurements
    pub fn from_host(
        element: Size,
        context: Option<&Rect>,
        viewport: &Viewport,
        offset_parent: Option<&OffsetParent>,
        offset: Offset,
    ) -> Self {
        let viewport = viewport.shifted(offset);
        let correction = parent_correction(offset_parent, offset);
        let context = context_geometry(context, &viewport, correction, offset);
        Self {
            element,
            context,
            viewport,
            correction,
            offset,
        }
    }

    /// Place the element with the given anchors
    pub fn place(
        &self,
        anchors: &AnchorSpec,
        direction: Option<Direction>,
    ) -> Result<PositionResult, LayoutError> {
        let (left, top) = compute_placement(self.element, &self.context, anchors)?;
        Ok(PositionResult::new(left, top, direction))
    }

    /// The element's bottom edge, in viewport terms, lies below the viewport
    pub fn overflows_bottom(&self, placement: &PositionResult) -> bool {
        placement.top + self.correction.top + self.element.height > self.viewport.bottom
    }

    /// The element's top edge, in viewport terms, lies above the viewport
    pub fn overflows_top(&self, placement: &PositionResult) -> bool {
        placement.top + self.correction.top < self.viewport.top
    }

    /// The element's right edge, in viewport terms, lies past the viewport
    pub fn overflows_right(&self, placement: &PositionResult) -> bool {
        placement.left + self.correction.left + self.element.width > self.viewport.right
    }

    /// The element's left edge lies before the viewport
    ///
    /// Unlike the other checks this compares the raw coordinate.
    pub fn overflows_left(&self, placement: &PositionResult) -> bool {
        placement.left < self.viewport.left
    }
}
