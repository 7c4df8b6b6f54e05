//! Read-only descriptor of the radio channels a device can scan.
//!
//! The [`ChannelHelper`] is built once from the HAL driver and then shared,
//! unchanged, between the router, the fallback scanner and their callers.

use std::time::Duration;

use crate::config::ScannerConfig;
use crate::domain::band::WifiBand;
use crate::domain::settings::BucketSettings;
use crate::port::NativeDriver;

/// Channel lists for the three base bands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelHelper {
    band_24ghz: Vec<u32>,
    band_5ghz: Vec<u32>,
    band_5ghz_dfs: Vec<u32>,
    dwell_time: Duration,
}

impl ChannelHelper {
    /// Query the driver for each base band.
    ///
    /// A band the driver cannot list falls back to the config's preset table.
    pub fn from_driver<D: NativeDriver + ?Sized>(driver: &D, config: &ScannerConfig) -> Self {
        let query = |band: WifiBand, preset: &[u32]| match driver.channels_for_band(band) {
            Some(channels) => channels,
            None => {
                tracing::warn!(%band, "driver has no channel list, using preset table");
                preset.to_vec()
            }
        };

        Self {
            band_24ghz: query(WifiBand::Band24GHz, &config.preset_channels_24ghz),
            band_5ghz: query(WifiBand::Band5GHz, &config.preset_channels_5ghz),
            band_5ghz_dfs: query(WifiBand::Band5GHzDfsOnly, &config.preset_channels_5ghz_dfs),
            dwell_time: Duration::from_millis(u64::from(config.dwell_time_per_channel_ms)),
        }
    }

    /// Build a helper from explicit lists.
    pub fn new(
        band_24ghz: Vec<u32>,
        band_5ghz: Vec<u32>,
        band_5ghz_dfs: Vec<u32>,
        dwell_time: Duration,
    ) -> Self {
        Self {
            band_24ghz,
            band_5ghz,
            band_5ghz_dfs,
            dwell_time,
        }
    }

    fn base_band(&self, band: WifiBand) -> &[u32] {
        match band {
            WifiBand::Band24GHz => &self.band_24ghz,
            WifiBand::Band5GHz => &self.band_5ghz,
            WifiBand::Band5GHzDfsOnly => &self.band_5ghz_dfs,
            _ => &[],
        }
    }

    /// Frequencies covered by `band`, in base-band order.
    pub fn available_channels(&self, band: WifiBand) -> Vec<u32> {
        WifiBand::BASE_BANDS
            .iter()
            .filter(|base| band.intersects(**base))
            .flat_map(|base| self.base_band(*base).iter().copied())
            .collect()
    }

    /// Every channel the device knows about.
    pub fn all_channels(&self) -> Vec<u32> {
        self.available_channels(WifiBand::BothWithDfs)
    }

    /// The base band listing `freq_mhz`, if any.
    pub fn band_of(&self, freq_mhz: u32) -> Option<WifiBand> {
        WifiBand::BASE_BANDS
            .into_iter()
            .find(|base| self.base_band(*base).contains(&freq_mhz))
    }

    /// Per-channel dwell time used for estimates.
    pub fn dwell_time(&self) -> Duration {
        self.dwell_time
    }

    /// Rough time one pass over the bucket takes.
    pub fn estimate_scan_duration(&self, bucket: &BucketSettings) -> Duration {
        let count = match bucket.band {
            WifiBand::Unspecified => bucket.channels.len(),
            band => self.available_channels(band).len(),
        };
        self.dwell_time * count as u32
    }

    /// Whether a pass over the bucket visits `freq_mhz`.
    pub fn bucket_contains_channel(&self, bucket: &BucketSettings, freq_mhz: u32) -> bool {
        match bucket.band {
            WifiBand::Unspecified => bucket
                .channels
                .iter()
                .any(|spec| spec.frequency_mhz == freq_mhz),
            band => self
                .band_of(freq_mhz)
                .is_some_and(|base| band.intersects(base)),
        }
    }
}
