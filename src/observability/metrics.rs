use crate::error::{
    ValidationError, REASON_CHECKSUM_MISMATCH, REASON_EMPTY, REASON_INDIVIDUAL_NUMBER_OUT_OF_RANGE,
    REASON_INVALID_STRUCTURE,
};
use crate::observability::labels::Labels;
use metrics::{counter, Counter};

const REASON: &str = "reason";
const REJECTED: &str = "hetu.validation.rejected";

pub struct ValidationMetrics {
    pub validations: Counter,
    pub accepted: Counter,
    pub debug_bypass: Counter,
    pub rejected_empty: Counter,
    pub rejected_invalid_structure: Counter,
    pub rejected_individual_number: Counter,
    pub rejected_checksum: Counter,
}

impl ValidationMetrics {
    pub fn new(labels: &Labels) -> Self {
        ValidationMetrics {
            validations: counter!("hetu.validations", labels.clone()),
            accepted: counter!("hetu.validation.accepted", labels.clone()),
            debug_bypass: counter!("hetu.validation.debug_bypass", labels.clone()),
            rejected_empty: counter!(
                REJECTED,
                labels.clone_with_labels(&[(REASON, REASON_EMPTY)])
            ),
            rejected_invalid_structure: counter!(
                REJECTED,
                labels.clone_with_labels(&[(REASON, REASON_INVALID_STRUCTURE)])
            ),
            rejected_individual_number: counter!(
                REJECTED,
                labels.clone_with_labels(&[(REASON, REASON_INDIVIDUAL_NUMBER_OUT_OF_RANGE)])
            ),
            rejected_checksum: counter!(
                REJECTED,
                labels.clone_with_labels(&[(REASON, REASON_CHECKSUM_MISMATCH)])
            ),
        }
    }

    pub fn record_rejection(&self, error: &ValidationError) {
        match error {
            ValidationError::Empty => self.rejected_empty.increment(1),
            ValidationError::InvalidStructure => self.rejected_invalid_structure.increment(1),
            ValidationError::IndividualNumberOutOfRange { .. } => {
                self.rejected_individual_number.increment(1)
            }
            ValidationError::ChecksumMismatch { .. } => self.rejected_checksum.increment(1),
        }
    }
}
