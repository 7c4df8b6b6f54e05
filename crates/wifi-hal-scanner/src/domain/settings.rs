//! Settings value objects handed to the scan backends.
//!
//! The router forwards these untouched. Their fields mirror what the HAL and
//! the software scanner consume, so a backend can act on them directly.

use serde::{Deserialize, Serialize};

use crate::domain::band::WifiBand;
use crate::domain::bssid::BssidId;

// ---------------------------------------------------------------------------
// Batched / single scan settings
// ---------------------------------------------------------------------------

/// When a bucket reports its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportEvents(u32);

impl ReportEvents {
    /// Report only when the result buffer fills up.
    pub const AFTER_BUFFER_FULL: Self = Self(0);
    /// Report after every scan of the bucket.
    pub const AFTER_EACH_SCAN: Self = Self(1 << 0);
    /// Report each full scan result as it arrives.
    pub const FULL_SCAN_RESULT: Self = Self(1 << 1);
    /// Do not buffer results.
    pub const NO_BATCH: Self = Self(1 << 2);

    /// Wrap raw report flags.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// The raw flags.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// True when every flag of `other` is set.
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Union of two flag sets.
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

/// A single channel to visit when a bucket has no band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChannelSpec {
    /// Centre frequency in MHz.
    pub frequency_mhz: u32,
    /// Dwell time in milliseconds; 0 lets the driver pick.
    pub dwell_time_ms: u32,
    /// Listen only, do not send probe requests.
    pub passive: bool,
}

impl ChannelSpec {
    /// An active channel with the driver's default dwell time.
    pub fn new(frequency_mhz: u32) -> Self {
        Self {
            frequency_mhz,
            ..Self::default()
        }
    }
}

/// One scheduling bucket of a batched scan.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BucketSettings {
    /// Bucket index within [`ScanSettings::buckets`].
    pub bucket: u32,
    /// Band to scan, or [`WifiBand::Unspecified`] to use `channels`.
    pub band: WifiBand,
    /// Scan period in milliseconds.
    pub period_ms: u32,
    /// Upper bound for exponential back-off; 0 disables back-off.
    pub max_period_ms: u32,
    /// Scans at each period before doubling.
    pub step_count: u32,
    /// Reporting behaviour.
    pub report_events: ReportEvents,
    /// Explicit channels, used when `band` is unspecified.
    pub channels: Vec<ChannelSpec>,
}

/// Settings for single and batched scans.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScanSettings {
    /// Base scheduling period in milliseconds.
    pub base_period_ms: u32,
    /// Maximum APs reported per scan.
    pub max_ap_per_scan: u32,
    /// Buffer fill percentage that triggers a report.
    pub report_threshold_percent: u32,
    /// Number of scans that triggers a report.
    pub report_threshold_num_scans: u32,
    /// Scheduling buckets.
    pub buckets: Vec<BucketSettings>,
}

impl ScanSettings {
    /// Number of buckets.
    pub fn num_buckets(&self) -> usize {
        self.buckets.len()
    }
}

// ---------------------------------------------------------------------------
// Offload (ePNO) settings
// ---------------------------------------------------------------------------

/// A saved network placed in the offload list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OffloadNetwork {
    /// Network name.
    pub ssid: String,
    /// Framework-side network id.
    pub network_id: i32,
    /// Higher values are preferred.
    pub priority: i32,
    /// Driver flags (hidden, A-band only, ...).
    pub flags: u8,
    /// Allowed authentication types as a bit field.
    pub auth_bit_field: u8,
}

/// Preferred-network offload configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OffloadSettings {
    /// Minimum RSSI for 5 GHz candidates (dBm).
    pub min_5ghz_rssi: i32,
    /// Minimum RSSI for 2.4 GHz candidates (dBm).
    pub min_24ghz_rssi: i32,
    /// Cap on the RSSI-derived score.
    pub initial_score_max: i32,
    /// Bonus for the current network.
    pub current_connection_bonus: i32,
    /// Bonus for networks matching the last connection.
    pub same_network_bonus: i32,
    /// Bonus for secured networks.
    pub secure_bonus: i32,
    /// Bonus for 5 GHz networks.
    pub band_5ghz_bonus: i32,
    /// Whether the device is currently associated.
    pub is_connected: bool,
    /// Networks to look for.
    pub networks: Vec<OffloadNetwork>,
}

// ---------------------------------------------------------------------------
// Hotlist and significant-change settings
// ---------------------------------------------------------------------------

/// An access point watched by a hotlist or change tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BssidInfo {
    /// Access point address.
    pub bssid: BssidId,
    /// Low RSSI threshold (dBm).
    pub low: i32,
    /// High RSSI threshold (dBm).
    pub high: i32,
    /// Expected frequency in MHz, 0 if unknown.
    pub frequency_hint_mhz: u32,
}

/// Proximity-alert list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HotlistSettings {
    /// Watched access points.
    pub bssids: Vec<BssidInfo>,
    /// Consecutive misses before an AP is reported lost.
    pub ap_lost_threshold: u32,
}

/// Significant RSSI-change tracking configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChangeSettings {
    /// Samples averaged per RSSI estimate.
    pub rssi_sample_size: u32,
    /// Samples before an AP is considered lost.
    pub lost_ap_sample_size: u32,
    /// Samples before an AP is considered unchanged.
    pub unchanged_sample_size: u32,
    /// APs that must breach their threshold before reporting.
    pub min_aps_breaching_threshold: u32,
    /// Scan period in milliseconds.
    pub period_ms: u32,
    /// Tracked access points.
    pub bssids: Vec<BssidInfo>,
}
