//! Recording test doubles for the scanner's driven ports.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use wifi_hal_scanner::{
    dispatch, ChangeEventHandler, ChangeSettings, FallbackScanner, FeatureSet, HalWifiScanner,
    HotlistEventHandler, HotlistSettings, NativeDriver, OffloadEventHandler, OffloadSettings,
    ScanCapabilities, ScanData, ScanEventHandler, ScanResult, ScanSettings, ScanStatus,
    ScannerError, WifiBand,
};

// ---------------------------------------------------------------------------
// FakeDriver
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverCall {
    ScanCapabilities,
    StartScan(ScanSettings),
    StopScan,
    PauseScan,
    RestartScan,
    ScanResults { flush: bool },
    SetOffloadList(OffloadSettings),
    ResetOffloadList,
    SetHotlist(HotlistSettings),
    ResetHotlist,
    TrackSignificantChange(ChangeSettings),
    UntrackSignificantChange,
}

/// HAL driver that records every forwarded call and fires the handler it is
/// given once, so tests can see the handler arrived.
pub struct FakeDriver {
    pub ready: bool,
    pub features: FeatureSet,
    pub reply: bool,
    pub capabilities: Option<ScanCapabilities>,
    pub batched: Option<Vec<ScanData>>,
    calls: Mutex<Vec<DriverCall>>,
}

impl FakeDriver {
    pub fn with_features(features: FeatureSet) -> Self {
        Self {
            ready: true,
            features,
            reply: true,
            capabilities: None,
            batched: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<DriverCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: DriverCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl NativeDriver for FakeDriver {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn feature_set(&self) -> FeatureSet {
        self.features
    }

    fn scan_capabilities(&self) -> Option<ScanCapabilities> {
        self.record(DriverCall::ScanCapabilities);
        self.capabilities
    }

    fn channels_for_band(&self, band: WifiBand) -> Option<Vec<u32>> {
        match band {
            WifiBand::Band24GHz => Some(vec![2412, 2437, 2462]),
            WifiBand::Band5GHz => Some(vec![5180, 5745]),
            _ => None,
        }
    }

    fn start_scan(&self, settings: &ScanSettings, handler: Arc<dyn ScanEventHandler>) -> bool {
        self.record(DriverCall::StartScan(settings.clone()));
        handler.on_scan_status(ScanStatus::ResultsAvailable);
        self.reply
    }

    fn stop_scan(&self) {
        self.record(DriverCall::StopScan);
    }

    fn pause_scan(&self) {
        self.record(DriverCall::PauseScan);
    }

    fn restart_scan(&self) {
        self.record(DriverCall::RestartScan);
    }

    fn scan_results(&self, flush: bool) -> Option<Vec<ScanData>> {
        self.record(DriverCall::ScanResults { flush });
        self.batched.clone()
    }

    fn set_offload_list(
        &self,
        settings: &OffloadSettings,
        handler: Arc<dyn OffloadEventHandler>,
    ) -> bool {
        self.record(DriverCall::SetOffloadList(settings.clone()));
        handler.on_network_found(&[]);
        self.reply
    }

    fn reset_offload_list(&self) -> bool {
        self.record(DriverCall::ResetOffloadList);
        self.reply
    }

    fn set_hotlist(
        &self,
        settings: &HotlistSettings,
        handler: Arc<dyn HotlistEventHandler>,
    ) -> bool {
        self.record(DriverCall::SetHotlist(settings.clone()));
        handler.on_ap_found(&[]);
        self.reply
    }

    fn reset_hotlist(&self) {
        self.record(DriverCall::ResetHotlist);
    }

    fn track_significant_change(
        &self,
        settings: &ChangeSettings,
        handler: Arc<dyn ChangeEventHandler>,
    ) -> bool {
        self.record(DriverCall::TrackSignificantChange(settings.clone()));
        handler.on_changes_found(&[]);
        self.reply
    }

    fn untrack_significant_change(&self) {
        self.record(DriverCall::UntrackSignificantChange);
    }
}

// ---------------------------------------------------------------------------
// FakeFallback
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackCall {
    StartSingleScan(ScanSettings),
    LatestSingleScanResults,
    SetOffloadList(OffloadSettings),
    ResetOffloadList(OffloadSettings),
    ShouldScheduleBackgroundScan { is_connected: bool },
    Cleanup,
}

/// Software scanner that records calls. Its background-scan decision is
/// "only while disconnected", so tests can tell it apart from the HAL path.
pub struct FakeFallback {
    pub reply: bool,
    pub single: Option<ScanData>,
    calls: Mutex<Vec<FallbackCall>>,
}

impl FakeFallback {
    pub fn new() -> Self {
        Self {
            reply: true,
            single: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<FallbackCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: FallbackCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl FallbackScanner for FakeFallback {
    fn start_single_scan(
        &mut self,
        settings: &ScanSettings,
        handler: Arc<dyn ScanEventHandler>,
    ) -> bool {
        self.record(FallbackCall::StartSingleScan(settings.clone()));
        handler.on_scan_status(ScanStatus::ResultsAvailable);
        self.reply
    }

    fn latest_single_scan_results(&self) -> Option<ScanData> {
        self.record(FallbackCall::LatestSingleScanResults);
        self.single.clone()
    }

    fn set_offload_list(
        &mut self,
        settings: &OffloadSettings,
        handler: Arc<dyn OffloadEventHandler>,
    ) -> bool {
        self.record(FallbackCall::SetOffloadList(settings.clone()));
        handler.on_network_found(&[]);
        self.reply
    }

    fn reset_offload_list(&mut self, settings: &OffloadSettings) -> bool {
        self.record(FallbackCall::ResetOffloadList(settings.clone()));
        self.reply
    }

    fn should_schedule_background_scan_for_offload(&self, is_connected: bool) -> bool {
        self.record(FallbackCall::ShouldScheduleBackgroundScan { is_connected });
        !is_connected
    }

    fn cleanup(&mut self) {
        self.record(FallbackCall::Cleanup);
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// Counts every callback it receives, whatever the kind.
#[derive(Default)]
pub struct CountingHandler {
    hits: AtomicUsize,
}

impl CountingHandler {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.hits.fetch_add(1, Ordering::SeqCst);
    }
}

impl ScanEventHandler for CountingHandler {
    fn on_scan_status(&self, _status: ScanStatus) {
        self.hit();
    }
}

impl OffloadEventHandler for CountingHandler {
    fn on_network_found(&self, _results: &[ScanResult]) {
        self.hit();
    }
}

impl HotlistEventHandler for CountingHandler {
    fn on_ap_found(&self, _results: &[ScanResult]) {
        self.hit();
    }
}

impl ChangeEventHandler for CountingHandler {
    fn on_changes_found(&self, _results: &[ScanResult]) {
        self.hit();
    }
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

pub type TestScanner = HalWifiScanner<FakeDriver, FakeFallback>;

pub fn scanner_with(driver: FakeDriver) -> (TestScanner, Arc<FakeDriver>) {
    try_scanner_with(driver).expect("scanner builds")
}

pub fn try_scanner_with(
    driver: FakeDriver,
) -> Result<(TestScanner, Arc<FakeDriver>), ScannerError> {
    let driver = Arc::new(driver);
    let (looper, _event_loop) = dispatch::channel();
    let scanner = HalWifiScanner::new(Arc::clone(&driver), looper, |_ctx| FakeFallback::new())?;
    Ok((scanner, driver))
}

pub fn offload_settings(ssid: &str) -> OffloadSettings {
    OffloadSettings {
        min_5ghz_rssi: -82,
        min_24ghz_rssi: -85,
        is_connected: false,
        networks: vec![wifi_hal_scanner::OffloadNetwork {
            ssid: ssid.to_owned(),
            network_id: 7,
            priority: 1,
            flags: 0,
            auth_bit_field: 0b10,
        }],
        ..OffloadSettings::default()
    }
}

pub fn scan_settings(period_ms: u32) -> ScanSettings {
    ScanSettings {
        base_period_ms: period_ms,
        max_ap_per_scan: 16,
        report_threshold_percent: 80,
        report_threshold_num_scans: 10,
        buckets: vec![wifi_hal_scanner::BucketSettings {
            band: WifiBand::Both,
            period_ms,
            ..Default::default()
        }],
    }
}
