use crate::error::ValidationError;
use crate::validation::INDIVIDUAL_NUMBER_RANGE;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const PERMANENT_RANGE: RangeInclusive<u16> = 2..=899;
pub const TEMPORARY_RANGE: RangeInclusive<u16> = 900..=999;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum IndividualNumberKind {
    Permanent,
    Temporary,
    /// Accepted only through the debug checksum bypass
    DebugFixture,
}

/// Reads the ZZZ part of a structurally valid code
pub fn individual_number(normalized: &str) -> Result<u16, ValidationError> {
    normalized
        .get(INDIVIDUAL_NUMBER_RANGE)
        .and_then(|digits| digits.parse().ok())
        .ok_or(ValidationError::InvalidStructure)
}

pub fn classify(
    individual_number: u16,
    allow_temporary: bool,
) -> Result<IndividualNumberKind, ValidationError> {
    if allow_temporary && TEMPORARY_RANGE.contains(&individual_number) {
        Ok(IndividualNumberKind::Temporary)
    } else if PERMANENT_RANGE.contains(&individual_number) {
        Ok(IndividualNumberKind::Permanent)
    } else {
        Err(ValidationError::IndividualNumberOutOfRange {
            individual_number,
            allow_temporary,
        })
    }
}

#[cfg(test)]
mod test {
    use crate::error::ValidationError;
    use crate::validation::individual_number::*;

    #[test]
    fn reads_individual_number() {
        assert_eq!(individual_number("131052-308T"), Ok(308));
        assert_eq!(individual_number("010180+0025"), Ok(2));
        assert_eq!(
            individual_number("131052"),
            Err(ValidationError::InvalidStructure)
        );
    }

    #[test]
    fn permanent_range() {
        for n in [2, 100, 899] {
            assert_eq!(classify(n, false), Ok(IndividualNumberKind::Permanent));
            assert_eq!(classify(n, true), Ok(IndividualNumberKind::Permanent));
        }
    }

    #[test]
    fn temporary_range_requires_opt_in() {
        for n in [900, 950, 999] {
            assert_eq!(classify(n, true), Ok(IndividualNumberKind::Temporary));
            assert_eq!(
                classify(n, false),
                Err(ValidationError::IndividualNumberOutOfRange {
                    individual_number: n,
                    allow_temporary: false,
                })
            );
        }
    }

    #[test]
    fn zero_and_one_are_never_valid() {
        for n in [0, 1] {
            assert!(classify(n, false).is_err());
            assert!(classify(n, true).is_err());
        }
    }
}
