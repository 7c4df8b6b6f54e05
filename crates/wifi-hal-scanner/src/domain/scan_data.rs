//! Scan results and HAL capability limits.

use serde::{Deserialize, Serialize};

use crate::domain::band::frequency_to_channel;
use crate::domain::bssid::BssidId;

/// One access point seen by a scan.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScanResult {
    /// Network name. Empty for hidden networks.
    pub ssid: String,
    /// Access point address.
    pub bssid: BssidId,
    /// Received signal level in dBm.
    pub level_dbm: i32,
    /// Centre frequency in MHz.
    pub frequency_mhz: u32,
    /// Time the result was seen, microseconds since boot.
    pub timestamp_us: u64,
}

impl ScanResult {
    /// The 802.11 channel number, 0 when the frequency is not a WiFi channel.
    pub fn channel(&self) -> u8 {
        frequency_to_channel(self.frequency_mhz)
    }
}

/// Results of one scan cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScanData {
    /// Scan id assigned by the backend.
    pub id: i32,
    /// Backend flags (for example "interrupted").
    pub flags: i32,
    /// Bit set of the buckets included in this cycle.
    pub buckets_scanned: u32,
    /// Access points seen.
    pub results: Vec<ScanResult>,
}

impl ScanData {
    /// True when the bucket with index `bucket` took part in this cycle.
    pub fn scanned_bucket(&self, bucket: u32) -> bool {
        bucket < 32 && (self.buckets_scanned & (1 << bucket)) != 0
    }
}

/// Limits reported by the gscan HAL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScanCapabilities {
    /// Bytes available for buffered scan results.
    pub max_scan_cache_size: u32,
    /// Maximum number of scheduling buckets.
    pub max_scan_buckets: u32,
    /// Maximum APs cached per scan.
    pub max_ap_cache_per_scan: u32,
    /// Maximum samples for RSSI averaging.
    pub max_rssi_sample_size: u32,
    /// Maximum reporting threshold in percent.
    pub max_scan_reporting_threshold: u32,
    /// Maximum hotlist entries.
    pub max_hotlist_bssids: u32,
    /// Maximum APs for significant-change tracking.
    pub max_significant_wifi_change_aps: u32,
    /// Maximum BSSID history entries.
    pub max_bssid_history_entries: u32,
    /// Maximum ePNO networks.
    pub max_number_epno_networks: u32,
    /// Maximum ePNO networks matched by SSID only.
    pub max_number_epno_networks_by_ssid: u32,
    /// Maximum white-listed SSIDs.
    pub max_number_of_white_listed_ssid: u32,
}
