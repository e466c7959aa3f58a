//! Core types for the positioning engine
//!
//! All coordinates are page coordinates, i.e. they include the scroll offset.

use std::fmt;

/// A rectangle representing the spatial extent of an element
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Outer size of the floating element
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A pixel pair: a configured offset, or an offset-parent correction
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub left: f64,
    pub top: f64,
}

impl Offset {
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    pub fn zero() -> Self {
        Self::default()
    }
}

/// The visible scrollable area
///
/// Edges are stored rather than derived: a viewport built from window
/// metrics reserves room for a scrollbar, so `right` is not `left + width`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Viewport whose edges follow directly from a rectangle
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            left: rect.left,
            top: rect.top,
            right: rect.right(),
            bottom: rect.bottom(),
            width: rect.width,
            height: rect.height,
        }
    }

    /// Viewport from window metrics, keeping `scrollbar` pixels clear on the
    /// right
    pub fn from_window(window: &WindowMetrics, scrollbar: f64) -> Self {
        let width = window.inner_width - scrollbar;
        let height = window.inner_height;
        Self {
            left: window.scroll_x - scrollbar,
            top: window.scroll_y,
            right: width + window.scroll_x,
            bottom: height + window.scroll_y,
            width,
            height,
        }
    }

    /// Shift the leading edges by the configured offset
    pub fn shifted(&self, offset: Offset) -> Self {
        Self {
            left: self.left + offset.left,
            top: self.top + offset.top,
            ..*self
        }
    }

    /// The viewport as a context rectangle
    pub fn as_rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.width, self.height)
    }
}

/// Window size and scroll position as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WindowMetrics {
    pub inner_width: f64,
    pub inner_height: f64,
    pub scroll_x: f64,
    pub scroll_y: f64,
}

impl WindowMetrics {
    pub fn new(inner_width: f64, inner_height: f64) -> Self {
        Self {
            inner_width,
            inner_height,
            scroll_x: 0.0,
            scroll_y: 0.0,
        }
    }

    pub fn with_scroll(mut self, x: f64, y: f64) -> Self {
        self.scroll_x = x;
        self.scroll_y = y;
        self
    }
}

/// CSS `position` of the offset parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Positioning {
    #[default]
    Static,
    Relative,
    Absolute,
    Fixed,
}

/// The nearest ancestor establishing the floating element's coordinate origin
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OffsetParent {
    /// Page rectangle including border and padding
    pub rect: Rect,
    /// Content box width
    pub inner_width: f64,
    pub padding_left: f64,
    pub positioning: Positioning,
}

impl OffsetParent {
    pub fn new(rect: Rect, positioning: Positioning) -> Self {
        Self {
            rect,
            inner_width: rect.width,
            padding_left: 0.0,
            positioning,
        }
    }

    /// Set the content width and left padding used to derive the left border
    pub fn with_box(mut self, inner_width: f64, padding_left: f64) -> Self {
        self.inner_width = inner_width;
        self.padding_left = padding_left;
        self
    }

    /// Width of the left border, assuming symmetric borders and padding
    pub fn border_left(&self) -> f64 {
        (self.rect.width - self.inner_width - self.padding_left * 2.0) / 2.0
    }
}

/// Side of the context the floating element ended up on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
    Center,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
            Side::Center => "center",
        }
    }
}

/// Direction label of a placement, used by hosts to pick a matching style
///
/// Labels are stable: `top`, `bottom`, `left`, `right`, `center`, and the
/// right-aligned forms such as `top-right` and `bottom-right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub side: Side,
    /// The element was right-aligned to its context to stay in view
    pub right_aligned: bool,
}

impl Direction {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            right_aligned: false,
        }
    }

    /// The same side, right-aligned with the context
    pub fn with_right_alignment(self) -> Self {
        Self {
            right_aligned: true,
            ..self
        }
    }

    /// Style class for this direction, e.g. `ch-bottom-right`
    pub fn class_name(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.side.as_str())?;
        if self.right_aligned {
            f.write_str("-right")?;
        }
        Ok(())
    }
}

/// Final coordinates for the floating element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionResult {
    pub left: f64,
    pub top: f64,
    /// `None` when the requested anchors have no presentation label
    pub direction: Option<Direction>,
}

impl PositionResult {
    pub fn new(left: f64, top: f64, direction: Option<Direction>) -> Self {
        Self {
            left,
            top,
            direction,
        }
    }

    pub fn with_direction(self, direction: Option<Direction>) -> Self {
        Self { direction, ..self }
    }

    /// Direction label, or an empty string when unlabeled
    pub fn label(&self) -> String {
        self.direction.map(|d| d.to_string()).unwrap_or_default()
    }
}
