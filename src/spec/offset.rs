//! Pixel offset specs such as `"0 5"`

use crate::error::{SpecError, SpecField};
use crate::layout::types::Offset;

use super::lexer::{lex, Token};

/// Offset used when a request names none
pub const DEFAULT_OFFSET: &str = "0 0";

/// Parse an `"x y"` offset spec into a pixel pair
///
/// Both components must be plain integers; unit suffixes are rejected.
pub fn parse_offset(input: &str) -> Result<Offset, SpecError> {
    let items: Vec<_> = lex(input).collect();

    if items.len() != 2 {
        let span = match items.get(2) {
            Some((_, extra)) => extra.start..input.len(),
            None => 0..input.len(),
        };
        return Err(SpecError::token_count(SpecField::Offset, items.len(), span));
    }

    let mut values = [0i64; 2];
    for (value, (token, span)) in values.iter_mut().zip(items) {
        match token {
            Ok(Token::Integer(n)) => *value = n,
            _ => return Err(SpecError::not_numeric(&input[span.clone()], span)),
        }
    }

    Ok(Offset::new(values[0] as f64, values[1] as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_offset() {
        assert_eq!(parse_offset(DEFAULT_OFFSET).unwrap(), Offset::zero());
    }

    #[test]
    fn test_negative_components() {
        assert_eq!(parse_offset("-3 12").unwrap(), Offset::new(-3.0, 12.0));
    }

    #[test]
    fn test_unit_suffix_rejected() {
        let err = parse_offset("0 5px").unwrap_err();
        assert_eq!(err, SpecError::not_numeric("5px", 2..5));
    }

    #[test]
    fn test_overflow_rejected() {
        let err = parse_offset("0 99999999999999999999").unwrap_err();
        assert!(matches!(err, SpecError::NotNumeric { .. }));
    }

    #[test]
    fn test_single_component_rejected() {
        let err = parse_offset("10").unwrap_err();
        assert_eq!(err, SpecError::token_count(SpecField::Offset, 1, 0..2));
    }

    #[test]
    fn test_empty_rejected() {
        let err = parse_offset("").unwrap_err();
        assert_eq!(err, SpecError::token_count(SpecField::Offset, 0, 0..0));
    }
}
