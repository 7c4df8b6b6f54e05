//! The driven port for the WiFi HAL driver.

use std::sync::Arc;

use crate::domain::band::WifiBand;
use crate::domain::feature::FeatureSet;
use crate::domain::scan_data::{ScanCapabilities, ScanData};
use crate::domain::settings::{ChangeSettings, HotlistSettings, OffloadSettings, ScanSettings};
use crate::port::events::{
    ChangeEventHandler, HotlistEventHandler, OffloadEventHandler, ScanEventHandler,
};

/// Hardware/firmware scanning and offload APIs exposed by the HAL.
///
/// The handle is shared between the router and the fallback scanner, so every
/// method takes `&self`; implementations keep their own interior state.
pub trait NativeDriver: Send + Sync {
    /// Whether the driver handle is open. A closed handle makes router
    /// construction fail.
    fn is_ready(&self) -> bool;

    /// Supported feature bitmask.
    fn feature_set(&self) -> FeatureSet;

    /// gscan limits, or `None` if the query failed.
    fn scan_capabilities(&self) -> Option<ScanCapabilities>;

    /// Frequencies (MHz) available in a base band, or `None` if unknown.
    fn channels_for_band(&self, band: WifiBand) -> Option<Vec<u32>>;

    /// Start a batched background scan.
    fn start_scan(&self, settings: &ScanSettings, handler: Arc<dyn ScanEventHandler>) -> bool;

    /// Stop the batched scan.
    fn stop_scan(&self);

    /// Pause the batched scan, keeping its settings.
    fn pause_scan(&self);

    /// Resume a paused batched scan.
    fn restart_scan(&self);

    /// Buffered batched results; `flush` clears the buffer.
    fn scan_results(&self, flush: bool) -> Option<Vec<ScanData>>;

    /// Install a hardware offload list.
    fn set_offload_list(
        &self,
        settings: &OffloadSettings,
        handler: Arc<dyn OffloadEventHandler>,
    ) -> bool;

    /// Clear the hardware offload list.
    fn reset_offload_list(&self) -> bool;

    /// Install a hotlist.
    fn set_hotlist(&self, settings: &HotlistSettings, handler: Arc<dyn HotlistEventHandler>)
        -> bool;

    /// Clear the hotlist.
    fn reset_hotlist(&self);

    /// Start significant-change tracking.
    fn track_significant_change(
        &self,
        settings: &ChangeSettings,
        handler: Arc<dyn ChangeEventHandler>,
    ) -> bool;

    /// Stop significant-change tracking.
    fn untrack_significant_change(&self);
}
