//! Scanner that uses the gscan HAL for background work and a software scanner
//! for one-shot scans.
//!
//! # Routing
//!
//! | Operation group | Backend |
//! |---|---|
//! | capabilities, batched scans, hotlist, significant change | HAL driver |
//! | single scans, cleanup | fallback scanner |
//! | offload list, background-scan decision | HAL if it reports ePNO, else fallback |
//!
//! The ePNO check runs once, in the constructor. The result is stored as an
//! [`OffloadRoute`] and never re-queried.

use std::fmt;
use std::sync::Arc;

use crate::channel::ChannelHelper;
use crate::config::ScannerConfig;
use crate::dispatch::{LoopHandle, Message, MessageHandler};
use crate::domain::feature::FeatureSet;
use crate::domain::scan_data::{ScanCapabilities, ScanData};
use crate::domain::settings::{ChangeSettings, HotlistSettings, OffloadSettings, ScanSettings};
use crate::error::ScannerError;
use crate::port::{
    ChangeEventHandler, FallbackScanner, HotlistEventHandler, NativeDriver, OffloadEventHandler,
    ScanEventHandler, WifiScanner,
};

// ---------------------------------------------------------------------------
// OffloadRoute
// ---------------------------------------------------------------------------

/// Backend that owns the preferred-network offload list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OffloadRoute {
    /// The HAL implements ePNO.
    Hardware,
    /// The software scanner emulates offload with background scans.
    Software,
}

impl OffloadRoute {
    fn for_features(features: FeatureSet, mask: FeatureSet) -> Self {
        if features.contains(mask) {
            Self::Hardware
        } else {
            Self::Software
        }
    }
}

// ---------------------------------------------------------------------------
// FallbackContext
// ---------------------------------------------------------------------------

/// What the fallback scanner is built from: the router's own driver handle,
/// channel descriptor and scheduling context.
pub struct FallbackContext<D> {
    /// Shared HAL driver handle.
    pub driver: Arc<D>,
    /// Shared channel descriptor.
    pub channels: Arc<ChannelHelper>,
    /// Event loop the scanner runs on.
    pub looper: LoopHandle,
}

// ---------------------------------------------------------------------------
// HalWifiScanner
// ---------------------------------------------------------------------------

/// Capability router between a [`NativeDriver`] and a [`FallbackScanner`].
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use wifi_hal_scanner::{dispatch, HalWifiScanner, WifiScanner};
///
/// let (looper, mut event_loop) = dispatch::channel();
/// let mut scanner = HalWifiScanner::new(Arc::new(driver), looper, |ctx| {
///     SupplicantScanner::new(ctx.driver, ctx.channels, ctx.looper)
/// })?;
///
/// scanner.start_single_scan(&settings, handler);
/// event_loop.dispatch_pending(&mut scanner);
/// ```
pub struct HalWifiScanner<D, F> {
    driver: Arc<D>,
    channels: Arc<ChannelHelper>,
    fallback: F,
    features: FeatureSet,
    offload_route: OffloadRoute,
}

impl<D, F> HalWifiScanner<D, F>
where
    D: NativeDriver,
    F: FallbackScanner,
{
    /// Build a router with [`ScannerConfig::default`].
    ///
    /// # Errors
    ///
    /// Returns [`ScannerError::DriverUnavailable`] if the driver handle is not
    /// open.
    pub fn new<B>(
        driver: Arc<D>,
        looper: LoopHandle,
        build_fallback: B,
    ) -> Result<Self, ScannerError>
    where
        B: FnOnce(FallbackContext<D>) -> F,
    {
        Self::with_config(driver, looper, &ScannerConfig::default(), build_fallback)
    }

    /// Build a router with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ScannerError::DriverUnavailable`] if the driver handle is not
    /// open and [`ScannerError::Config`] if `config` fails validation.
    pub fn with_config<B>(
        driver: Arc<D>,
        looper: LoopHandle,
        config: &ScannerConfig,
        build_fallback: B,
    ) -> Result<Self, ScannerError>
    where
        B: FnOnce(FallbackContext<D>) -> F,
    {
        if !driver.is_ready() {
            return Err(ScannerError::DriverUnavailable);
        }
        config.validate()?;

        let channels = Arc::new(ChannelHelper::from_driver(driver.as_ref(), config));
        let fallback = build_fallback(FallbackContext {
            driver: Arc::clone(&driver),
            channels: Arc::clone(&channels),
            looper,
        });

        let features = driver.feature_set();
        let offload_route = OffloadRoute::for_features(features, config.offload_capability_mask);

        tracing::debug!(
            features = ?features,
            offload_route = ?offload_route,
            channels = channels.all_channels().len(),
            "HAL scanner ready"
        );

        Ok(Self {
            driver,
            channels,
            fallback,
            features,
            offload_route,
        })
    }

    /// Feature bitmask read at construction.
    pub fn feature_set(&self) -> FeatureSet {
        self.features
    }

    /// Backend that owns the offload list.
    pub fn offload_route(&self) -> OffloadRoute {
        self.offload_route
    }

    /// Whether offload lists go to the hardware.
    pub fn hardware_offload_supported(&self) -> bool {
        self.offload_route == OffloadRoute::Hardware
    }

    /// The software scanner.
    pub fn fallback(&self) -> &F {
        &self.fallback
    }
}

impl<D, F> fmt::Debug for HalWifiScanner<D, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HalWifiScanner")
            .field("features", &self.features)
            .field("offload_route", &self.offload_route)
            .field("channels", &self.channels)
            .finish_non_exhaustive()
    }
}

impl<D, F> WifiScanner for HalWifiScanner<D, F>
where
    D: NativeDriver,
    F: FallbackScanner,
{
    fn scan_capabilities(&self) -> Option<ScanCapabilities> {
        self.driver.scan_capabilities()
    }

    fn channel_helper(&self) -> &Arc<ChannelHelper> {
        &self.channels
    }

    fn start_single_scan(
        &mut self,
        settings: &ScanSettings,
        handler: Arc<dyn ScanEventHandler>,
    ) -> bool {
        self.fallback.start_single_scan(settings, handler)
    }

    fn latest_single_scan_results(&self) -> Option<ScanData> {
        self.fallback.latest_single_scan_results()
    }

    fn start_batched_scan(
        &mut self,
        settings: Option<&ScanSettings>,
        handler: Option<Arc<dyn ScanEventHandler>>,
    ) -> bool {
        match (settings, handler) {
            (Some(settings), Some(handler)) => self.driver.start_scan(settings, handler),
            (settings, handler) => {
                tracing::warn!(
                    has_settings = settings.is_some(),
                    has_handler = handler.is_some(),
                    "invalid arguments for batched scan start"
                );
                false
            }
        }
    }

    fn stop_batched_scan(&mut self) {
        self.driver.stop_scan();
    }

    fn pause_batched_scan(&mut self) {
        self.driver.pause_scan();
    }

    fn restart_batched_scan(&mut self) {
        self.driver.restart_scan();
    }

    fn latest_batched_scan_results(&mut self, flush: bool) -> Option<Vec<ScanData>> {
        self.driver.scan_results(flush)
    }

    fn set_offload_list(
        &mut self,
        settings: &OffloadSettings,
        handler: Arc<dyn OffloadEventHandler>,
    ) -> bool {
        match self.offload_route {
            OffloadRoute::Hardware => self.driver.set_offload_list(settings, handler),
            OffloadRoute::Software => self.fallback.set_offload_list(settings, handler),
        }
    }

    fn reset_offload_list(&mut self, settings: &OffloadSettings) -> bool {
        match self.offload_route {
            OffloadRoute::Hardware => self.driver.reset_offload_list(),
            OffloadRoute::Software => self.fallback.reset_offload_list(settings),
        }
    }

    fn should_schedule_background_scan_for_offload(&self, is_connected: bool) -> bool {
        // Hardware ePNO always needs the background scan, connected or not.
        match self.offload_route {
            OffloadRoute::Hardware => true,
            OffloadRoute::Software => self
                .fallback
                .should_schedule_background_scan_for_offload(is_connected),
        }
    }

    fn set_hotlist(
        &mut self,
        settings: &HotlistSettings,
        handler: Arc<dyn HotlistEventHandler>,
    ) -> bool {
        self.driver.set_hotlist(settings, handler)
    }

    fn reset_hotlist(&mut self) {
        self.driver.reset_hotlist();
    }

    fn track_significant_change(
        &mut self,
        settings: &ChangeSettings,
        handler: Arc<dyn ChangeEventHandler>,
    ) -> bool {
        self.driver.track_significant_change(settings, handler)
    }

    fn untrack_significant_change(&mut self) {
        self.driver.untrack_significant_change();
    }

    fn cleanup(&mut self) {
        self.fallback.cleanup();
    }
}

impl<D, F> MessageHandler for HalWifiScanner<D, F> {
    // The router owns no message codes; backends post to their own handlers.
    fn handle_message(&mut self, msg: &Message) -> bool {
        tracing::warn!(
            what = msg.what,
            arg1 = msg.arg1,
            arg2 = msg.arg2,
            "unknown message received"
        );
        true
    }
}
