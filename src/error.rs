use thiserror::Error;

pub const REASON_EMPTY: &str = "empty";
pub const REASON_INVALID_STRUCTURE: &str = "invalid_structure";
pub const REASON_INDIVIDUAL_NUMBER_OUT_OF_RANGE: &str = "individual_number_out_of_range";
pub const REASON_CHECKSUM_MISMATCH: &str = "checksum_mismatch";

#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum ValidationError {
    #[error("The identity code is empty")]
    Empty,

    #[error("The identity code does not match the DDMMYYCZZZQ format")]
    InvalidStructure,

    #[error("Individual number {individual_number:03} is out of range (temporary numbers allowed: {allow_temporary})")]
    IndividualNumberOutOfRange {
        individual_number: u16,
        allow_temporary: bool,
    },

    #[error("Checksum character mismatch: expected '{expected}', found '{found}'")]
    ChecksumMismatch { expected: char, found: char },
}

impl ValidationError {
    /// Stable short name of the rejection, used as a metric label
    pub fn reason(&self) -> &'static str {
        match self {
            ValidationError::Empty => REASON_EMPTY,
            ValidationError::InvalidStructure => REASON_INVALID_STRUCTURE,
            ValidationError::IndividualNumberOutOfRange { .. } => {
                REASON_INDIVIDUAL_NUMBER_OUT_OF_RANGE
            }
            ValidationError::ChecksumMismatch { .. } => REASON_CHECKSUM_MISMATCH,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum ConfigError {
    #[error("Unknown build mode: {0}")]
    UnknownBuildMode(String),
}
