//! Position engine
//!
//! One call takes a [`PositionRequest`] through four stages:
//!
//! 1. parse the anchor and offset specs (configuration errors stop here),
//! 2. derive the per-call [`Frame`] from host geometry,
//! 3. compute the requested placement,
//! 4. apply the collision policy unless the request holds its placement.
//!
//! Nothing is cached between calls.

use tracing::{debug, debug_span};

use crate::config::PositionerConfig;
use crate::spec::{parse_offset, AnchorSpec};
use crate::PositionError;

use super::collision::{self, Outcome};
use super::host::Frame;
use super::types::{OffsetParent, PositionResult, Rect, Size, Viewport};

/// Input for one positioning call
#[derive(Debug, Clone, PartialEq)]
pub struct PositionRequest {
    /// Outer size of the floating element
    pub element: Size,
    /// Reference element; `None` anchors to the viewport
    pub context: Option<Rect>,
    pub viewport: Viewport,
    pub offset_parent: Option<OffsetParent>,
    /// Anchor spec such as `"lt lb"`; `None` uses the configured default
    pub points: Option<String>,
    /// Offset spec such as `"0 5"`; `None` uses the configured default
    pub offset: Option<String>,
    /// Take the requested placement verbatim, without collision checks
    pub hold: bool,
}

impl PositionRequest {
    pub fn new(element: Size, viewport: Viewport) -> Self {
        Self {
            element,
            context: None,
            viewport,
            offset_parent: None,
            points: None,
            offset: None,
            hold: false,
        }
    }

    /// Set the context element rectangle
    pub fn with_context(mut self, context: Rect) -> Self {
        self.context = Some(context);
        self
    }

    /// Set the offset parent
    pub fn with_offset_parent(mut self, parent: OffsetParent) -> Self {
        self.offset_parent = Some(parent);
        self
    }

    /// Set the anchor spec
    pub fn with_points(mut self, points: impl Into<String>) -> Self {
        self.points = Some(points.into());
        self
    }

    /// Set the offset spec
    pub fn with_offset(mut self, offset: impl Into<String>) -> Self {
        self.offset = Some(offset.into());
        self
    }

    /// Enable or disable holding the requested placement
    pub fn with_hold(mut self, hold: bool) -> Self {
        self.hold = hold;
        self
    }
}

/// Compute the final position for a request
pub fn compute(
    request: &PositionRequest,
    config: &PositionerConfig,
) -> Result<PositionResult, PositionError> {
    let points = request.points.as_deref().unwrap_or(config.default_points.as_str());
    let offset = request.offset.as_deref().unwrap_or(config.default_offset.as_str());

    let _span = debug_span!("position", points, offset, hold = request.hold).entered();

    let anchors = AnchorSpec::parse(points)?;
    let offset = parse_offset(offset)?;

    let frame = Frame::from_host(
        request.element,
        request.context.as_ref(),
        &request.viewport,
        request.offset_parent.as_ref(),
        offset,
    );

    let placement = frame.place(&anchors, anchors.direction())?;

    if request.hold || anchors.is_centered() {
        debug!(left = placement.left, top = placement.top, "placement taken as requested");
        return Ok(placement);
    }

    let outcome = collision::resolve(&frame, Outcome::new(placement, anchors))?;
    debug!(
        left = outcome.placement.left,
        top = outcome.placement.top,
        state = ?outcome.state,
        "placement resolved"
    );
    Ok(outcome.placement)
}
