use crate::error::ValidationError;
use lazy_static::lazy_static;
use regex::Regex;

// DDMMYY with per-month day ranges (February always allows 29), a century marker,
// three digits and a control character. G, I, O, Q and Z are never control characters.
const HETU_PATTERN: &str = concat!(
    r"^(((0[1-9]|[12][0-9]|3[01])(0[13578]|10|12))",
    r"|((0[1-9]|[12][0-9]|30)(0[469]|11))",
    r"|(0[1-9]|[12][0-9])02)",
    r"[0-9]{2}[-+A][0-9]{3}[0-9A-FHJ-NPR-Y]$",
);

lazy_static! {
    static ref HETU_REGEX: Regex = Regex::new(HETU_PATTERN).unwrap();
}

/// Uppercases ASCII letters only. Anything else is left alone and will fail the pattern.
pub fn normalize(code: &str) -> String {
    code.to_ascii_uppercase()
}

/// Full-string match of an already normalized code
pub fn check_structure(normalized: &str) -> Result<(), ValidationError> {
    if HETU_REGEX.is_match(normalized) {
        Ok(())
    } else {
        Err(ValidationError::InvalidStructure)
    }
}
