//! Anchor Positioner - placement of floating elements such as tooltips,
//! dropdowns and popovers
//!
//! The floating element is aligned to a context element (or the viewport)
//! through a pair of anchor points, then flipped away from viewport edges it
//! would overflow.
//!
//! # Example
//!
//! ```rust
//! use anchor_positioner::{position, PositionRequest, Rect, Size, Viewport};
//!
//! let viewport = Viewport::from_rect(Rect::new(0.0, 0.0, 800.0, 515.0));
//! let request = PositionRequest::new(Size::new(40.0, 30.0), viewport)
//!     .with_context(Rect::new(100.0, 500.0, 50.0, 20.0))
//!     .with_points("lt lb");
//!
//! // No room below the context, so the dropdown opens above it
//! let result = position(&request).unwrap();
//! assert_eq!(result.top, 470.0);
//! assert_eq!(result.label(), "top");
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod spec;

pub use config::{ConfigError, PositionerConfig};
pub use error::{SpecError, SpecField};
pub use layout::{
    Direction, LayoutError, Offset, OffsetParent, PositionRequest, PositionResult, Positioning,
    Rect, Side, Size, Viewport, WindowMetrics,
};
pub use spec::AnchorSpec;

use thiserror::Error;

/// Errors that can occur while positioning an element
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PositionError {
    /// Malformed anchor or offset spec
    #[error("configuration error: {0}")]
    Configuration(#[from] SpecError),

    /// Anchors outside the supported combinations
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),
}

impl PositionError {
    /// Render a diagnostic pointing at the malformed part of the request
    ///
    /// Layout errors carry no span and render as their message.
    pub fn format(&self, request: &PositionRequest, config: &PositionerConfig) -> String {
        match self {
            PositionError::Configuration(err) => {
                let (given, default) = match err.field() {
                    SpecField::Points => (&request.points, &config.default_points),
                    SpecField::Offset => (&request.offset, &config.default_offset),
                };
                let source = given.as_deref().unwrap_or(default.as_str());
                err.format(source, &err.field().to_string())
            }
            PositionError::Layout(err) => err.to_string(),
        }
    }
}

/// Compute the position of a floating element with default configuration
///
/// This is the main entry point for the library. It is a pure function of the
/// request; hosts call it again whenever scrolling or resizing changes the
/// geometry.
pub fn position(request: &PositionRequest) -> Result<PositionResult, PositionError> {
    position_with_config(request, &PositionerConfig::default())
}

/// Compute the position of a floating element with custom configuration
///
/// # Example
///
/// ```rust
/// use anchor_positioner::{
///     position_with_config, PositionRequest, PositionerConfig, Size, WindowMetrics,
/// };
///
/// let config = PositionerConfig::new().with_scrollbar_allowance(0.0);
/// let viewport = config.viewport(&WindowMetrics::new(800.0, 600.0));
/// let request = PositionRequest::new(Size::new(200.0, 100.0), viewport);
///
/// let result = position_with_config(&request, &config).unwrap();
/// assert_eq!((result.left, result.top), (300.0, 250.0));
/// ```
pub fn position_with_config(
    request: &PositionRequest,
    config: &PositionerConfig,
) -> Result<PositionResult, PositionError> {
    layout::compute(request, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> PositionRequest {
        PositionRequest::new(
            Size::new(40.0, 30.0),
            Viewport::from_rect(Rect::new(0.0, 0.0, 800.0, 600.0)),
        )
        .with_context(Rect::new(100.0, 100.0, 50.0, 20.0))
    }

    #[test]
    fn test_position_centered_by_default() {
        let result = position(&request()).unwrap();
        assert_eq!((result.left, result.top), (105.0, 95.0));
        assert_eq!(result.label(), "center");
    }

    #[test]
    fn test_configuration_error_from_points() {
        let err = position(&request().with_points("top bottom")).unwrap_err();
        assert!(matches!(
            err,
            PositionError::Configuration(SpecError::AnchorTokenLength { .. })
        ));
        assert!(err.to_string().starts_with("configuration error:"));
    }

    #[test]
    fn test_format_points_error() {
        let request = request().with_points("lt lbx");
        let err = position(&request).unwrap_err();
        let report = err.format(&request, &PositionerConfig::default());
        assert!(report.contains("anchor point 'lbx' must be exactly two characters"));
        assert!(report.contains("lt lbx"));
    }

    #[test]
    fn test_format_layout_error() {
        let request = request().with_points("rl rl");
        let err = position(&request).unwrap_err();
        match &err {
            PositionError::Layout(inner) => assert_eq!(
                err.format(&request, &PositionerConfig::default()),
                inner.to_string()
            ),
            other => panic!("expected layout error, got {other:?}"),
        }
    }

    #[test]
    fn test_class_name_uses_config_prefix() {
        let config = PositionerConfig::default();
        let result = position(&request().with_points("lt lb")).unwrap();
        let class = result.direction.map(|d| d.class_name(&config.class_prefix));
        assert_eq!(class.as_deref(), Some("ch-bottom"));
    }
}
