use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;
use std::collections::BTreeMap;
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumString};

/// Build/deployment mode of the calling application. The library never reads
/// it from the environment; callers translate their own setting explicitly.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Display, AsRefStr, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BuildMode {
    Development,
    Test,
    Production,
}

impl BuildMode {
    pub fn parse_name(name: &str) -> Result<Self, ConfigError> {
        BuildMode::from_str(name.trim())
            .map_err(|_| ConfigError::UnknownBuildMode(name.to_owned()))
    }
}

#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct ValidatorConfig {
    /// Accept temporary individual numbers (900-999)
    #[serde(default)]
    pub allow_temporary: bool,

    /// Accept codes ending in "0000" as test fixtures. Must stay disabled in production.
    #[serde(default)]
    pub allow_debug_checksum_bypass: bool,

    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
}

impl ValidatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_build_mode(mode: BuildMode) -> Self {
        Self::default().allow_debug_checksum_bypass(mode == BuildMode::Development)
    }

    pub fn allow_temporary(&self, allow_temporary: bool) -> Self {
        self.mutate_clone(|x| x.allow_temporary = allow_temporary)
    }

    pub fn allow_debug_checksum_bypass(&self, allow: bool) -> Self {
        self.mutate_clone(|x| x.allow_debug_checksum_bypass = allow)
    }

    pub fn label(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let (key, value) = (key.into(), value.into());
        self.mutate_clone(|x| {
            x.labels.insert(key, value);
        })
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}
