//! The driven port for the software fallback scanner.

use std::sync::Arc;

use crate::domain::scan_data::ScanData;
use crate::domain::settings::{OffloadSettings, ScanSettings};
use crate::port::events::{OffloadEventHandler, ScanEventHandler};

/// Software scanner used for single scans and, when the HAL lacks ePNO, for
/// the offload list.
pub trait FallbackScanner: Send {
    /// Start a one-shot scan.
    fn start_single_scan(&mut self, settings: &ScanSettings, handler: Arc<dyn ScanEventHandler>)
        -> bool;

    /// Results of the last completed single scan.
    fn latest_single_scan_results(&self) -> Option<ScanData>;

    /// Install a software offload list.
    fn set_offload_list(
        &mut self,
        settings: &OffloadSettings,
        handler: Arc<dyn OffloadEventHandler>,
    ) -> bool;

    /// Remove the offload list installed with `settings`.
    fn reset_offload_list(&mut self, settings: &OffloadSettings) -> bool;

    /// Whether the caller should keep a background scan running for offload.
    fn should_schedule_background_scan_for_offload(&self, is_connected: bool) -> bool;

    /// Release scanner resources.
    fn cleanup(&mut self);
}
