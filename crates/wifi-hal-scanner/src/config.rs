//! Scanner configuration.
//!
//! [`ScannerConfig`] holds the few knobs the router and its channel helper
//! need. It is serializable via [`serde`] so a platform can ship it as a JSON
//! file next to the driver.
//!
//! # Example
//!
//! ```rust
//! use wifi_hal_scanner::{FeatureSet, ScannerConfig};
//!
//! let cfg = ScannerConfig::default();
//! cfg.validate().expect("default config is valid");
//! assert_eq!(cfg.offload_capability_mask, FeatureSet::HAL_EPNO);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::band::{is_24ghz, is_5ghz, is_5ghz_dfs};
use crate::domain::feature::FeatureSet;
use crate::error::ConfigError;

/// Dwell time the platform assumes for one channel when estimating scans.
pub const DEFAULT_DWELL_TIME_PER_CHANNEL_MS: u32 = 200;

/// Configuration for [`crate::HalWifiScanner`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// Feature bits that must all be present for offload lists to go to the
    /// hardware. Default: [`FeatureSet::HAL_EPNO`].
    pub offload_capability_mask: FeatureSet,

    /// Per-channel dwell time used for scan-duration estimates. Default: **200**.
    pub dwell_time_per_channel_ms: u32,

    /// 2.4 GHz channels used when the driver cannot list them.
    pub preset_channels_24ghz: Vec<u32>,

    /// 5 GHz non-DFS channels used when the driver cannot list them.
    pub preset_channels_5ghz: Vec<u32>,

    /// 5 GHz DFS channels used when the driver cannot list them.
    pub preset_channels_5ghz_dfs: Vec<u32>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            offload_capability_mask: FeatureSet::HAL_EPNO,
            dwell_time_per_channel_ms: DEFAULT_DWELL_TIME_PER_CHANNEL_MS,
            preset_channels_24ghz: (2412..=2472).step_by(5).collect(),
            preset_channels_5ghz: vec![5180, 5200, 5220, 5240, 5745, 5765, 5785, 5805, 5825],
            preset_channels_5ghz_dfs: [5260, 5280, 5300, 5320]
                .into_iter()
                .chain((5500..=5720).step_by(20))
                .collect(),
        }
    }
}

impl ScannerConfig {
    /// Load and validate a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileRead`] if the file cannot be read,
    /// [`ConfigError::Json`] if it is malformed and
    /// [`ConfigError::InvalidValue`] if a field is out of range.
    pub fn from_json(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg: ScannerConfig = serde_json::from_str(&contents)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Write this configuration as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileWrite`] if the file cannot be written.
    pub fn to_json(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| ConfigError::FileWrite {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Check every field against its allowed range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.offload_capability_mask.is_empty() {
            return Err(ConfigError::invalid_value(
                "offload_capability_mask",
                "must name at least one feature bit",
            ));
        }
        if self.dwell_time_per_channel_ms == 0 {
            return Err(ConfigError::invalid_value("dwell_time_per_channel_ms", "must be > 0"));
        }
        check_band("preset_channels_24ghz", &self.preset_channels_24ghz, is_24ghz)?;
        check_band("preset_channels_5ghz", &self.preset_channels_5ghz, |freq| {
            is_5ghz(freq) && !is_5ghz_dfs(freq)
        })?;
        check_band("preset_channels_5ghz_dfs", &self.preset_channels_5ghz_dfs, is_5ghz_dfs)?;
        Ok(())
    }
}

fn check_band(
    field: &'static str,
    channels: &[u32],
    in_band: fn(u32) -> bool,
) -> Result<(), ConfigError> {
    match channels.iter().find(|&&freq| !in_band(freq)) {
        Some(freq) => Err(ConfigError::invalid_value(
            field,
            format!("{freq} MHz is outside the band"),
        )),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let cfg = ScannerConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.preset_channels_24ghz.len(), 13);
        assert_eq!(cfg.preset_channels_24ghz[0], 2412);
        assert_eq!(cfg.preset_channels_24ghz[12], 2472);
        assert_eq!(cfg.preset_channels_5ghz_dfs.len(), 16);
    }

    #[test]
    fn zero_mask_rejected() {
        let cfg = ScannerConfig {
            offload_capability_mask: FeatureSet::empty(),
            ..ScannerConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("offload_capability_mask"));
    }

    #[test]
    fn zero_dwell_rejected() {
        let cfg = ScannerConfig {
            dwell_time_per_channel_ms: 0,
            ..ScannerConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn out_of_band_preset_rejected() {
        let cfg = ScannerConfig {
            preset_channels_24ghz: vec![2412, 5180],
            ..ScannerConfig::default()
        };
        let err = cfg.validate().unwrap_err().to_string();
        assert!(err.contains("preset_channels_24ghz"), "{err}");
        assert!(err.contains("5180"), "{err}");
    }

    #[test]
    fn dfs_channel_in_non_dfs_preset_rejected() {
        let cfg = ScannerConfig {
            preset_channels_5ghz: vec![5180, 5260],
            ..ScannerConfig::default()
        };
        let err = cfg.validate().unwrap_err().to_string();
        assert!(err.contains("preset_channels_5ghz"), "{err}");
        assert!(err.contains("5260"), "{err}");
    }

    #[test]
    fn non_dfs_channel_in_dfs_preset_rejected() {
        let cfg = ScannerConfig {
            preset_channels_5ghz_dfs: vec![5500, 5745],
            ..ScannerConfig::default()
        };
        let err = cfg.validate().unwrap_err().to_string();
        assert!(err.contains("preset_channels_5ghz_dfs"), "{err}");
        assert!(err.contains("5745"), "{err}");
    }

    #[test]
    fn json_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scanner.json");

        let cfg = ScannerConfig {
            dwell_time_per_channel_ms: 120,
            ..ScannerConfig::default()
        };
        cfg.to_json(&path).unwrap();
        let loaded = ScannerConfig::from_json(&path).unwrap();
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.json");
        std::fs::write(&path, r#"{ "offload_capability_mask": 1024 }"#).unwrap();

        let loaded = ScannerConfig::from_json(&path).unwrap();
        assert_eq!(loaded.offload_capability_mask, FeatureSet::PNO);
        assert_eq!(loaded.dwell_time_per_channel_ms, DEFAULT_DWELL_TIME_PER_CHANNEL_MS);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ScannerConfig::from_json(Path::new("/nonexistent/scanner.json")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }

    #[test]
    fn malformed_json_reports_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, r#"{ "dwell_time_per_channel_ms": "#).unwrap();

        let err = ScannerConfig::from_json(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)), "{err}");
    }

    #[test]
    fn unwritable_path_reports_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("scanner.json");

        let err = ScannerConfig::default().to_json(&path).unwrap_err();
        assert!(matches!(err, ConfigError::FileWrite { .. }), "{err}");
    }
}
