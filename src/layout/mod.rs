//! Positioning engine for floating elements
//!
//! This module takes host geometry and parsed specs and computes where the
//! floating element goes, flipping it away from viewport edges when needed.

pub mod collision;
pub mod engine;
pub mod error;
pub mod host;
pub mod placement;
pub mod types;

pub use collision::CollisionState;
pub use engine::{compute, PositionRequest};
pub use error::{Axis, LayoutError};
pub use host::Frame;
pub use types::*;
