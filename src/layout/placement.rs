//! Placement lookup tables
//!
//! The element's anchor character and the context's anchor character form a
//! two-character key per axis. Only four keys per axis are defined; the
//! remaining combinations are reported as errors instead of guessed.

use crate::spec::AnchorSpec;

use super::error::{Axis, LayoutError};
use super::types::{Rect, Size};

/// Keys of the horizontal table
pub const HORIZONTAL_KEYS: &[&str] = &["ll", "lr", "rr", "cc"];

/// Keys of the vertical table
pub const VERTICAL_KEYS: &[&str] = &["tt", "tb", "bt", "mm"];

/// Element left edge for a pair of horizontal anchor characters
pub fn horizontal_offset(
    context: &Rect,
    element: Size,
    element_x: char,
    context_x: char,
) -> Option<f64> {
    match (element_x, context_x) {
        ('l', 'l') => Some(context.left),
        ('l', 'r') => Some(context.right()),
        ('r', 'r') => Some(context.right() - element.width),
        ('c', 'c') => Some(context.left + context.width / 2.0 - element.width / 2.0),
        _ => None,
    }
}

/// Element top edge for a pair of vertical anchor characters
pub fn vertical_offset(
    context: &Rect,
    element: Size,
    element_y: char,
    context_y: char,
) -> Option<f64> {
    match (element_y, context_y) {
        ('t', 't') => Some(context.top),
        ('t', 'b') => Some(context.bottom()),
        ('b', 't') => Some(context.top - element.height),
        ('m', 'm') => Some(context.top + context.height / 2.0 - element.height / 2.0),
        _ => None,
    }
}

/// Element left/top for the given anchors
pub fn compute_placement(
    element: Size,
    context: &Rect,
    anchors: &AnchorSpec,
) -> Result<(f64, f64), LayoutError> {
    let left = horizontal_offset(context, element, anchors.element.x, anchors.context.x)
        .ok_or_else(|| {
            LayoutError::undefined_combination(
                anchors.to_string(),
                Axis::Horizontal,
                anchors.horizontal_key(),
                HORIZONTAL_KEYS,
            )
        })?;

    let top = vertical_offset(context, element, anchors.element.y, anchors.context.y)
        .ok_or_else(|| {
            LayoutError::undefined_combination(
                anchors.to_string(),
                Axis::Vertical,
                anchors.vertical_key(),
                VERTICAL_KEYS,
            )
        })?;

    Ok((left, top))
}
