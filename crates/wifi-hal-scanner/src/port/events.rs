//! Callback interfaces the backends use to deliver asynchronous results.
//!
//! Callers hand these to the router as `Arc<dyn …>`; the router passes them to
//! whichever backend it selects and never calls them itself.

use crate::domain::scan_data::{ScanData, ScanResult};

/// Status reported for a running batched or single scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanStatus {
    /// New results can be read.
    ResultsAvailable,
    /// The scan-count reporting threshold was reached.
    ThresholdNumScans,
    /// The buffer-percentage reporting threshold was reached.
    ThresholdPercent,
    /// The scan failed.
    Failed,
}

/// Receives events for single and batched scans.
pub trait ScanEventHandler: Send + Sync {
    /// A scan status change.
    fn on_scan_status(&self, status: ScanStatus);

    /// A full result for a bucket that requested
    /// [`crate::domain::ReportEvents::FULL_SCAN_RESULT`].
    fn on_full_scan_result(&self, _result: &ScanResult, _buckets_scanned: u32) {}

    /// The scan was paused; `data` holds whatever was buffered.
    fn on_scan_paused(&self, _data: &[ScanData]) {}

    /// A paused scan resumed.
    fn on_scan_restarted(&self) {}
}

/// Receives events for an installed offload list.
pub trait OffloadEventHandler: Send + Sync {
    /// One or more listed networks were found.
    fn on_network_found(&self, results: &[ScanResult]);

    /// The offload scan failed.
    fn on_scan_failed(&self) {}
}

/// Receives hotlist proximity alerts.
pub trait HotlistEventHandler: Send + Sync {
    /// Listed access points came into range.
    fn on_ap_found(&self, results: &[ScanResult]);

    /// Listed access points went out of range.
    fn on_ap_lost(&self, _results: &[ScanResult]) {}
}

/// Receives significant RSSI-change alerts.
pub trait ChangeEventHandler: Send + Sync {
    /// Tracked access points crossed their thresholds.
    fn on_changes_found(&self, results: &[ScanResult]);
}
