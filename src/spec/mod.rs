//! Parsers for the anchor and offset spec strings of a request

pub mod anchor;
pub mod lexer;
pub mod offset;

pub use anchor::{AnchorPoint, AnchorSpec, DEFAULT_POINTS};
pub use offset::{parse_offset, DEFAULT_OFFSET};
