// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod config;
mod error;
mod identity_code;
mod observability;
mod validation;
mod validator;

// This is the public API of the HETU validation library
pub use config::{BuildMode, ValidatorConfig};
pub use error::{ConfigError, ValidationError};
pub use identity_code::{CenturyMarker, IdentityCode};
pub use observability::labels::Labels;
pub use validation::checksum::DEBUG_FIXTURE_SUFFIX;
pub use validation::individual_number::{IndividualNumberKind, PERMANENT_RANGE, TEMPORARY_RANGE};
pub use validation::HETU_LENGTH;
pub use validator::{is_valid, HetuValidator, Validator};
