//! Viewport collision policy
//!
//! Each axis is checked once, vertical first. An overflowing placement is
//! flipped to the opposite side; when the flip overflows on that side too,
//! the placement from before the flip is kept. This bounds the work to two
//! placements per axis and never searches other anchor combinations, so an
//! element that fits on neither side stays where it was requested.

use tracing::debug;

use crate::spec::AnchorSpec;

use super::error::LayoutError;
use super::host::Frame;
use super::types::{Direction, PositionResult, Side};

/// Which flips are in effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionState {
    #[default]
    Default,
    FlippedVertical,
    FlippedHorizontal,
    FlippedBoth,
}

impl CollisionState {
    fn flip_vertical(self) -> Self {
        match self {
            Self::Default | Self::FlippedVertical => Self::FlippedVertical,
            Self::FlippedHorizontal | Self::FlippedBoth => Self::FlippedBoth,
        }
    }

    fn flip_horizontal(self) -> Self {
        match self {
            Self::Default | Self::FlippedHorizontal => Self::FlippedHorizontal,
            Self::FlippedVertical | Self::FlippedBoth => Self::FlippedBoth,
        }
    }

    pub fn is_vertically_flipped(self) -> bool {
        matches!(self, Self::FlippedVertical | Self::FlippedBoth)
    }

    pub fn is_horizontally_flipped(self) -> bool {
        matches!(self, Self::FlippedHorizontal | Self::FlippedBoth)
    }
}

/// A placement together with the anchors and flips that produced it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    pub placement: PositionResult,
    pub anchors: AnchorSpec,
    pub state: CollisionState,
}

impl Outcome {
    pub fn new(placement: PositionResult, anchors: AnchorSpec) -> Self {
        Self {
            placement,
            anchors,
            state: CollisionState::Default,
        }
    }
}

/// Run the vertical then the horizontal check on an initial placement
pub fn resolve(frame: &Frame, initial: Outcome) -> Result<Outcome, LayoutError> {
    let outcome = resolve_vertical(frame, initial)?;
    resolve_horizontal(frame, outcome)
}

/// Move a dropdown above its context when it runs off the bottom
///
/// Only the below-context preset (`"lt lb"`) is checked.
pub fn resolve_vertical(frame: &Frame, current: Outcome) -> Result<Outcome, LayoutError> {
    if !current.anchors.is_below() || !frame.overflows_bottom(&current.placement) {
        return Ok(current);
    }

    let anchors = AnchorSpec::new(
        current.anchors.element.with_y('b'),
        current.anchors.context.with_y('t'),
    );
    let placed = frame.place(&anchors, Some(Direction::new(Side::Top)))?;
    let flipped = PositionResult {
        top: placed.top - 2.0 * frame.offset.top,
        ..placed
    };

    if frame.overflows_top(&flipped) {
        debug!(
            top = flipped.top,
            viewport_top = frame.viewport.top,
            "flip above also overflows, keeping placement below"
        );
        return Ok(Outcome {
            placement: current
                .placement
                .with_direction(Some(Direction::new(Side::Bottom))),
            ..current
        });
    }

    debug!(from = current.placement.top, to = flipped.top, "flipped above context");
    Ok(Outcome {
        placement: flipped,
        anchors,
        state: current.state.flip_vertical(),
    })
}

/// Right-align the element with its context when it runs off the right edge
pub fn resolve_horizontal(frame: &Frame, current: Outcome) -> Result<Outcome, LayoutError> {
    if !frame.overflows_right(&current.placement) {
        return Ok(current);
    }

    let anchors = AnchorSpec::new(
        current.anchors.element.with_x('r'),
        current.anchors.context.with_x('r'),
    );
    let direction = current.placement.direction.map(Direction::with_right_alignment);
    let placed = frame.place(&anchors, direction)?;

    // The recomputed top has lost the mirrored vertical offset
    let top = if current.state.is_vertically_flipped() {
        placed.top - 2.0 * frame.offset.top
    } else {
        placed.top
    };
    let flipped = PositionResult {
        left: placed.left - 2.0 * frame.offset.left,
        top,
        ..placed
    };

    if frame.overflows_left(&flipped) {
        debug!(
            left = flipped.left,
            viewport_left = frame.viewport.left,
            "right alignment overflows left edge, keeping placement"
        );
        return Ok(current);
    }

    debug!(from = current.placement.left, to = flipped.left, "right-aligned with context");
    Ok(Outcome {
        placement: flipped,
        anchors,
        state: current.state.flip_horizontal(),
    })
}
