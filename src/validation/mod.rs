//! The three checks an identity code goes through, in order. Each one assumes
//! the previous ones passed.

pub mod checksum;
pub mod individual_number;
pub mod structure;

/// Length of a HETU in its canonical form, e.g. "131052-308T"
pub const HETU_LENGTH: usize = 11;

pub(crate) const DATE_RANGE: std::ops::Range<usize> = 0..6;
pub(crate) const CENTURY_MARKER_INDEX: usize = 6;
pub(crate) const INDIVIDUAL_NUMBER_RANGE: std::ops::Range<usize> = 7..10;
pub(crate) const CHECKSUM_INDEX: usize = 10;
