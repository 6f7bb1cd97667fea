use crate::config::ValidatorConfig;
use crate::error::ValidationError;
use crate::validation::checksum::{check_checksum, is_debug_fixture};
use crate::validation::individual_number::{classify, individual_number, IndividualNumberKind};
use crate::validation::structure::{check_structure, normalize};
use crate::validation::{CENTURY_MARKER_INDEX, CHECKSUM_INDEX};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CenturyMarker {
    /// '+', born in the 1800s
    Plus,
    /// '-', born in the 1900s
    Minus,
    /// 'A', born in the 2000s
    A,
}

impl CenturyMarker {
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            '+' => Some(CenturyMarker::Plus),
            '-' => Some(CenturyMarker::Minus),
            'A' => Some(CenturyMarker::A),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            CenturyMarker::Plus => '+',
            CenturyMarker::Minus => '-',
            CenturyMarker::A => 'A',
        }
    }

    /// First year of the century the marker stands for
    pub fn century_base(&self) -> u16 {
        match self {
            CenturyMarker::Plus => 1800,
            CenturyMarker::Minus => 1900,
            CenturyMarker::A => 2000,
        }
    }
}

/// A Finnish personal identity code that passed every check. It can only be
/// obtained through [IdentityCode::parse], so the accessors never fail.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IdentityCode {
    // normalized (uppercase) form, always `HETU_LENGTH` ASCII characters
    code: String,
    century_marker: CenturyMarker,
    individual_number: u16,
    kind: IndividualNumberKind,
}

impl IdentityCode {
    pub fn parse(code: &str, config: &ValidatorConfig) -> Result<Self, ValidationError> {
        if code.is_empty() {
            return Err(ValidationError::Empty);
        }

        let normalized = normalize(code);
        check_structure(&normalized)?;

        let individual_number = individual_number(&normalized)?;
        let kind = if config.allow_debug_checksum_bypass && is_debug_fixture(&normalized) {
            IndividualNumberKind::DebugFixture
        } else {
            classify(individual_number, config.allow_temporary)?
        };

        check_checksum(&normalized, config.allow_debug_checksum_bypass)?;

        let century_marker = normalized
            .chars()
            .nth(CENTURY_MARKER_INDEX)
            .and_then(CenturyMarker::from_char)
            .ok_or(ValidationError::InvalidStructure)?;

        Ok(IdentityCode {
            code: normalized,
            century_marker,
            individual_number,
            kind,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.code
    }

    pub fn century_marker(&self) -> CenturyMarker {
        self.century_marker
    }

    pub fn day(&self) -> u8 {
        self.two_digits(0)
    }

    pub fn month(&self) -> u8 {
        self.two_digits(2)
    }

    pub fn year_of_century(&self) -> u8 {
        self.two_digits(4)
    }

    pub fn birth_year(&self) -> u16 {
        self.century_marker.century_base() + u16::from(self.year_of_century())
    }

    pub fn individual_number(&self) -> u16 {
        self.individual_number
    }

    pub fn kind(&self) -> IndividualNumberKind {
        self.kind
    }

    pub fn is_temporary(&self) -> bool {
        self.kind == IndividualNumberKind::Temporary
    }

    pub fn checksum_char(&self) -> char {
        self.code.as_bytes()[CHECKSUM_INDEX] as char
    }

    // The code was matched against the pattern, so the first six bytes are ASCII digits
    fn two_digits(&self, start: usize) -> u8 {
        let bytes = self.code.as_bytes();
        (bytes[start] - b'0') * 10 + (bytes[start + 1] - b'0')
    }
}

impl Display for IdentityCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code)
    }
}

impl FromStr for IdentityCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IdentityCode::parse(s, &ValidatorConfig::default())
    }
}

impl Serialize for IdentityCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.code)
    }
}

impl<'de> Deserialize<'de> for IdentityCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        IdentityCode::from_str(&code).map_err(serde::de::Error::custom)
    }
}
