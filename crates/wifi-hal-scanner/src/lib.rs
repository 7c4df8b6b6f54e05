//! # wifi-hal-scanner
//!
//! WiFi scanner backend that sits between the scanning service and two scan
//! engines: the gscan HAL driver and a software fallback scanner.
//!
//! This crate provides:
//!
//! - **Domain types**: [`ScanSettings`], [`OffloadSettings`], [`HotlistSettings`],
//!   [`ChangeSettings`], [`ScanData`], [`ScanCapabilities`], [`FeatureSet`]
//! - **Ports**: [`WifiScanner`] (offered), [`NativeDriver`] and
//!   [`FallbackScanner`] (consumed)
//! - **Adapter**: [`HalWifiScanner`], the capability router
//! - **Channel descriptor**: [`ChannelHelper`], shared read-only by all backends
//! - **Scheduling context**: [`dispatch`], a single-consumer event loop
//!
//! Batched scans, hotlists and significant-change tracking always go to the
//! HAL. Single scans always go to the fallback. The offload list goes to the
//! HAL only when its feature set includes [`FeatureSet::HAL_EPNO`].

pub mod adapter;
pub mod channel;
pub mod config;
pub mod dispatch;
pub mod domain;
pub mod error;
pub mod port;

pub use adapter::{FallbackContext, HalWifiScanner, OffloadRoute};
pub use channel::ChannelHelper;
pub use config::ScannerConfig;
pub use dispatch::{EventLoop, LoopHandle, Message, MessageHandler};
pub use domain::{
    BssidId, BssidInfo, BucketSettings, ChangeSettings, ChannelSpec, FeatureSet, HotlistSettings,
    OffloadNetwork, OffloadSettings, ReportEvents, ScanCapabilities, ScanData, ScanResult,
    ScanSettings, WifiBand,
};
pub use error::{ConfigError, ScannerError};
pub use port::{
    ChangeEventHandler, FallbackScanner, HotlistEventHandler, NativeDriver, OffloadEventHandler,
    ScanEventHandler, ScanStatus, WifiScanner,
};
