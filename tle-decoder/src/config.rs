use crate::epoch::DEFAULT_PIVOT_YEAR;
use serde::Deserialize;

#[derive(Copy, Clone, PartialEq, Eq, Debug, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct DecoderConfig {
    /// Reject element sets whose checksum digits don't match. When disabled,
    /// mismatches are only logged.
    pub verify_checksums: bool,

    /// Two-digit epoch years below this are in the 21st century
    pub epoch_pivot_year: u8,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            verify_checksums: true,
            epoch_pivot_year: DEFAULT_PIVOT_YEAR,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse decoder configuration. {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Epoch pivot year must be a two-digit year, found {0}")]
    EpochPivotYear(u8),
}

impl DecoderConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: DecoderConfig = toml::from_str(s)?;
        if cfg.epoch_pivot_year > 99 {
            return Err(ConfigError::EpochPivotYear(cfg.epoch_pivot_year));
        }
        Ok(cfg)
    }
}
