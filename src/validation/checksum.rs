use crate::error::ValidationError;
use crate::validation::{CHECKSUM_INDEX, DATE_RANGE, INDIVIDUAL_NUMBER_RANGE};

const CHECKSUM_MODULUS: u32 = 31;

/// Control character for each remainder modulo 31
pub const CONTROL_CHARS: [char; 31] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'H', 'J', 'K',
    'L', 'M', 'N', 'P', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y',
];

/// Codes ending in this suffix are accepted as test fixtures when the debug bypass is enabled
pub const DEBUG_FIXTURE_SUFFIX: &str = "0000";
const DEBUG_FIXTURE_CHECKSUM: char = '0';

pub fn control_character(remainder: u32) -> Option<char> {
    CONTROL_CHARS.get(remainder as usize).copied()
}

/// Expected control character of a structurally valid code, from DDMMYY followed by ZZZ
pub fn compute_checksum(normalized: &str) -> Result<char, ValidationError> {
    let (Some(date_part), Some(individual_part)) = (
        normalized.get(DATE_RANGE),
        normalized.get(INDIVIDUAL_NUMBER_RANGE),
    ) else {
        return Err(ValidationError::InvalidStructure);
    };

    let mut numeric_value: u32 = 0;
    for c in date_part.chars().chain(individual_part.chars()) {
        let digit = c.to_digit(10).ok_or(ValidationError::InvalidStructure)?;
        numeric_value = numeric_value * 10 + digit;
    }

    control_character(numeric_value % CHECKSUM_MODULUS).ok_or(ValidationError::InvalidStructure)
}

pub fn is_debug_fixture(normalized: &str) -> bool {
    normalized.ends_with(DEBUG_FIXTURE_SUFFIX)
}

pub fn check_checksum(normalized: &str, debug_bypass: bool) -> Result<(), ValidationError> {
    let expected = if debug_bypass && is_debug_fixture(normalized) {
        DEBUG_FIXTURE_CHECKSUM
    } else {
        compute_checksum(normalized)?
    };

    let found = normalized
        .chars()
        .nth(CHECKSUM_INDEX)
        .ok_or(ValidationError::InvalidStructure)?;

    if found.to_ascii_uppercase() == expected {
        Ok(())
    } else {
        Err(ValidationError::ChecksumMismatch { expected, found })
    }
}
