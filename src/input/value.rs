use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("\"{0}\" is not an integer")]
    NotInteger(String),
    #[error("{value} is out of range (must be between {min} and {max})")]
    OutOfRange { value: i64, min: i64, max: i64 },
}

/// Inclusive range accepted for typed values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValueLimits {
    pub min: i64,
    pub max: i64,
}

impl Default for ValueLimits {
    fn default() -> Self {
        // Two digits keep labels inside a node circle
        Self { min: -99, max: 99 }
    }
}

/// Parse a typed value
///
/// Blank input means the user cancelled and yields `Ok(None)`. Only the
/// canonical spelling of an integer is accepted, so `"007"`, `"+5"` and
/// `"-0"` are rejected.
pub fn parse_value(raw: &str, limits: &ValueLimits) -> Result<Option<i64>, InputError> {
    let input = raw.trim();
    if input.is_empty() {
        return Ok(None);
    }

    let value: i64 = input
        .parse()
        .map_err(|_| InputError::NotInteger(input.to_string()))?;
    if value.to_string() != input {
        return Err(InputError::NotInteger(input.to_string()));
    }

    if value < limits.min || value > limits.max {
        return Err(InputError::OutOfRange {
            value,
            min: limits.min,
            max: limits.max,
        });
    }

    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Result<Option<i64>, InputError> {
        parse_value(raw, &ValueLimits::default())
    }

    #[test]
    fn test_parse_valid() {
        assert_eq!(parse("42"), Ok(Some(42)));
        assert_eq!(parse("  -7 "), Ok(Some(-7)));
        assert_eq!(parse("99"), Ok(Some(99)));
        assert_eq!(parse("-99"), Ok(Some(-99)));
    }

    #[test]
    fn test_blank_is_cancel() {
        assert_eq!(parse(""), Ok(None));
        assert_eq!(parse("   "), Ok(None));
    }

    #[test]
    fn test_not_integer() {
        assert_eq!(parse("abc"), Err(InputError::NotInteger("abc".into())));
        assert_eq!(parse("4.5"), Err(InputError::NotInteger("4.5".into())));
        assert_eq!(parse("12abc"), Err(InputError::NotInteger("12abc".into())));
    }

    #[test]
    fn test_non_canonical_rejected() {
        assert!(matches!(parse("007"), Err(InputError::NotInteger(_))));
        assert!(matches!(parse("+5"), Err(InputError::NotInteger(_))));
        assert!(matches!(parse("-0"), Err(InputError::NotInteger(_))));
    }

    #[test]
    fn test_out_of_range() {
        let err = parse("100").unwrap_err();
        assert_eq!(err, InputError::OutOfRange { value: 100, min: -99, max: 99 });
        assert_eq!(err.to_string(), "100 is out of range (must be between -99 and 99)");
    }

    #[test]
    fn test_custom_limits() {
        let limits = ValueLimits { min: 0, max: 1000 };
        assert_eq!(parse_value("500", &limits), Ok(Some(500)));
        assert!(parse_value("-1", &limits).is_err());
    }
}
