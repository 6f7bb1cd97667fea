use crate::config::ValidatorConfig;
use crate::error::ValidationError;
use crate::identity_code::IdentityCode;
use crate::observability::labels::Labels;
use crate::observability::metrics::ValidationMetrics;
use crate::validation::individual_number::IndividualNumberKind;

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, code: &str) -> bool;
}

/// Checks if `code` is a valid Finnish personal identity code (HETU).
///
/// Temporary individual numbers (900-999) are only accepted when `allow_temporary` is set.
/// Empty or missing input is never valid. Records no metrics; use [HetuValidator] for that.
pub fn is_valid<'a>(code: impl Into<Option<&'a str>>, allow_temporary: bool) -> bool {
    let config = ValidatorConfig::new().allow_temporary(allow_temporary);
    code.into().is_some_and(|code| IdentityCode::parse(code, &config).is_ok())
}

pub struct HetuValidator {
    config: ValidatorConfig,
    metrics: ValidationMetrics,
}

impl HetuValidator {
    pub fn new(config: ValidatorConfig) -> Self {
        let metrics = ValidationMetrics::new(&Labels::from(&config.labels));
        Self { config, metrics }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    pub fn validate(&self, code: &str) -> Result<IdentityCode, ValidationError> {
        self.metrics.validations.increment(1);

        match IdentityCode::parse(code, &self.config) {
            Ok(identity_code) => {
                if identity_code.kind() == IndividualNumberKind::DebugFixture {
                    self.metrics.debug_bypass.increment(1);
                }
                self.metrics.accepted.increment(1);
                Ok(identity_code)
            }
            Err(err) => {
                self.metrics.record_rejection(&err);
                Err(err)
            }
        }
    }
}

impl Default for HetuValidator {
    fn default() -> Self {
        HetuValidator::new(ValidatorConfig::default())
    }
}

impl Validator for HetuValidator {
    fn is_valid_match(&self, code: &str) -> bool {
        self.validate(code).is_ok()
    }
}

#[cfg(test)]
mod test {
    use crate::config::ValidatorConfig;
    use crate::validator::*;
    use metrics::{Key, Label};
    use metrics_util::debugging::{DebugValue, DebuggingRecorder};
    use metrics_util::CompositeKey;
    use metrics_util::MetricKind::Counter;

    #[test]
    fn validate_finnish_hetus() {
        let valid_hetus = vec![
            "131052-308T",
            "010297-100H",
            "111111-111C",
            "010101-0101",
            "280264-051U",
            "290200A002C",
            "311299-8997",
            "010180+0025",
        ];

        for hetu in valid_hetus {
            println!("Finnish HETU: {}", hetu);
            assert!(is_valid(hetu, false));
            assert!(is_valid(hetu, true));
            assert!(HetuValidator::default().is_valid_match(hetu));

            let mut invalid_hetu = hetu[..10].to_string();
            invalid_hetu.push('G');
            println!(
                "Finnish HETU with invalid control character: {}",
                invalid_hetu
            );
            assert!(!is_valid(invalid_hetu.as_str(), true));
        }

        let invalid_formats = vec![
            "",
            "010297-100X",  // Invalid control character
            "320297-100X",  // Invalid day
            "111111G111C",  // Invalid century marker
            "010101Y0101",  // Century marker not accepted
            "010297-000B",  // Individual number out of range
            "010297-001X",  // Individual number out of range
            "111111-111",   // Too short
            "111111-11111", // Too long
            "111111--111C", // Double hyphen
        ];

        for hetu in invalid_formats {
            println!("Invalid format HETU: {}", hetu);
            assert!(!is_valid(hetu, false));
            assert!(!is_valid(hetu, true));
        }
    }

    #[test]
    fn missing_input_is_invalid() {
        assert!(!is_valid(None::<&str>, false));
        assert!(!is_valid(None::<&str>, true));
        assert!(is_valid(Some("131052-308T"), false));
    }

    #[test]
    fn temporary_numbers() {
        for hetu in ["010297-900A", "010297-999H", "010100A900F"] {
            assert!(!is_valid(hetu, false));
            assert!(is_valid(hetu, true));
        }
    }

    #[test]
    fn lowercase_is_accepted() {
        assert!(is_valid("131052-308t", false));
        assert!(is_valid("010100a900f", true));
    }

    #[test]
    fn debug_fixture_requires_explicit_config() {
        assert!(!is_valid("010297-0000", false));
        assert!(!is_valid("010297-0000", true));
        assert!(!HetuValidator::default().is_valid_match("010297-0000"));

        let validator =
            HetuValidator::new(ValidatorConfig::new().allow_debug_checksum_bypass(true));
        assert!(validator.is_valid_match("010297-0000"));
        assert!(validator.is_valid_match("131052-308T"));
        assert!(!validator.is_valid_match("010297-001X"));
    }

    #[test]
    fn should_submit_validation_metrics() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        metrics::with_local_recorder(&recorder, || {
            let validator = HetuValidator::default();
            assert!(validator.is_valid_match("131052-308T"));
            assert!(!validator.is_valid_match("131052-308X"));
            assert!(!validator.is_valid_match("320297-100X"));
            assert!(!validator.is_valid_match(""));
            assert!(!validator.is_valid_match("010297-001X"));
        });

        let snapshot = snapshotter.snapshot().into_hashmap();

        let counter_value = |key: Key| {
            snapshot
                .get(&CompositeKey::new(Counter, key))
                .map(|(_, _, value)| value)
        };

        assert_eq!(
            counter_value(Key::from_name("hetu.validations")),
            Some(&DebugValue::Counter(5))
        );
        assert_eq!(
            counter_value(Key::from_name("hetu.validation.accepted")),
            Some(&DebugValue::Counter(1))
        );
        for reason in [
            "checksum_mismatch",
            "invalid_structure",
            "empty",
            "individual_number_out_of_range",
        ] {
            assert_eq!(
                counter_value(Key::from_parts(
                    "hetu.validation.rejected",
                    vec![Label::new("reason", reason)]
                )),
                Some(&DebugValue::Counter(1)),
                "{reason}"
            );
        }
    }

    #[test]
    fn should_submit_debug_bypass_metric_with_config_labels() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        metrics::with_local_recorder(&recorder, || {
            let validator = HetuValidator::new(
                ValidatorConfig::new()
                    .allow_debug_checksum_bypass(true)
                    .label("source", "fixtures"),
            );
            assert!(validator.is_valid_match("010297-0000"));
        });

        let snapshot = snapshotter.snapshot().into_hashmap();
        let metric_value = snapshot
            .get(&CompositeKey::new(
                Counter,
                Key::from_parts(
                    "hetu.validation.debug_bypass",
                    vec![Label::new("source", "fixtures")],
                ),
            ))
            .expect("metric not found");
        assert_eq!(metric_value.2, DebugValue::Counter(1));
    }
}
