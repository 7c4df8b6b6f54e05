//! The driving port: the scanner contract consumed by the scanning service.

use std::sync::Arc;

use crate::channel::ChannelHelper;
use crate::domain::scan_data::{ScanCapabilities, ScanData};
use crate::domain::settings::{ChangeSettings, HotlistSettings, OffloadSettings, ScanSettings};
use crate::port::events::{
    ChangeEventHandler, HotlistEventHandler, OffloadEventHandler, ScanEventHandler,
};

/// A complete scanner implementation.
///
/// The scanning service only talks to this trait, so any backend implementing
/// it (see [`crate::HalWifiScanner`]) can be swapped in as a
/// `Box<dyn WifiScanner>`. Failures are reported as `false` or `None`; retry
/// policy belongs to the caller.
pub trait WifiScanner: Send {
    /// gscan limits of the hardware.
    fn scan_capabilities(&self) -> Option<ScanCapabilities>;

    /// Channel descriptor shared with the backends.
    fn channel_helper(&self) -> &Arc<ChannelHelper>;

    /// Start a one-shot scan.
    fn start_single_scan(&mut self, settings: &ScanSettings, handler: Arc<dyn ScanEventHandler>)
        -> bool;

    /// Results of the last single scan.
    fn latest_single_scan_results(&self) -> Option<ScanData>;

    /// Start a periodic batched scan. Both arguments are required; a missing
    /// one is rejected with `false`.
    fn start_batched_scan(
        &mut self,
        settings: Option<&ScanSettings>,
        handler: Option<Arc<dyn ScanEventHandler>>,
    ) -> bool;

    /// Stop the batched scan.
    fn stop_batched_scan(&mut self);

    /// Pause the batched scan.
    fn pause_batched_scan(&mut self);

    /// Resume a paused batched scan.
    fn restart_batched_scan(&mut self);

    /// Buffered batched results; `flush` clears the buffer.
    fn latest_batched_scan_results(&mut self, flush: bool) -> Option<Vec<ScanData>>;

    /// Install the preferred-network offload list.
    fn set_offload_list(
        &mut self,
        settings: &OffloadSettings,
        handler: Arc<dyn OffloadEventHandler>,
    ) -> bool;

    /// Clear the offload list.
    fn reset_offload_list(&mut self, settings: &OffloadSettings) -> bool;

    /// Whether a background scan must run alongside the offload list.
    fn should_schedule_background_scan_for_offload(&self, is_connected: bool) -> bool;

    /// Install a hotlist.
    fn set_hotlist(
        &mut self,
        settings: &HotlistSettings,
        handler: Arc<dyn HotlistEventHandler>,
    ) -> bool;

    /// Clear the hotlist.
    fn reset_hotlist(&mut self);

    /// Start significant-change tracking.
    fn track_significant_change(
        &mut self,
        settings: &ChangeSettings,
        handler: Arc<dyn ChangeEventHandler>,
    ) -> bool;

    /// Stop significant-change tracking.
    fn untrack_significant_change(&mut self);

    /// Release resources held by the implementation.
    fn cleanup(&mut self);
}
