//! Value objects shared by the router, its backends and their callers.

pub mod band;
pub mod bssid;
pub mod feature;
pub mod scan_data;
pub mod settings;

pub use band::WifiBand;
pub use bssid::{BssidId, BssidParseError};
pub use feature::FeatureSet;
pub use scan_data::{ScanCapabilities, ScanData, ScanResult};
pub use settings::{
    BssidInfo, BucketSettings, ChangeSettings, ChannelSpec, HotlistSettings, OffloadNetwork,
    OffloadSettings, ReportEvents, ScanSettings,
};
