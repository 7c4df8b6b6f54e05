//! Driver feature bitmask.

use std::fmt;
use std::ops::BitOr;

use serde::{Deserialize, Serialize};

/// Bitmask of capabilities reported by the HAL driver.
///
/// Bit values match the platform's `WIFI_FEATURE_*` constants so a mask read
/// straight from the driver can be wrapped without translation.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureSet(u64);

impl FeatureSet {
    /// Basic infrastructure (STA) mode.
    pub const INFRA: Self = Self(0x0001);
    /// 5 GHz band support.
    pub const INFRA_5G: Self = Self(0x0002);
    /// Passpoint / Hotspot 2.0.
    pub const PASSPOINT: Self = Self(0x0004);
    /// WiFi Direct.
    pub const P2P: Self = Self(0x0008);
    /// Soft AP.
    pub const INFRA_AP: Self = Self(0x0010);
    /// Background scanning through the gscan HAL.
    pub const SCANNER: Self = Self(0x0020);
    /// Neighbor awareness networking.
    pub const AWARE: Self = Self(0x0040);
    /// Device-to-device RTT.
    pub const D2D_RTT: Self = Self(0x0080);
    /// Device-to-AP RTT.
    pub const D2AP_RTT: Self = Self(0x0100);
    /// Batched scan.
    pub const BATCH_SCAN: Self = Self(0x0200);
    /// Preferred network offload (firmware-side).
    pub const PNO: Self = Self(0x0400);
    /// Additional STA interface.
    pub const ADDITIONAL_STA: Self = Self(0x0800);
    /// Tunnel direct link setup.
    pub const TDLS: Self = Self(0x1000);
    /// TDLS off-channel.
    pub const TDLS_OFFCHANNEL: Self = Self(0x2000);
    /// Enhanced power reporting.
    pub const EPR: Self = Self(0x4000);
    /// Concurrent AP + STA.
    pub const AP_STA: Self = Self(0x8000);
    /// Link layer statistics.
    pub const LINK_LAYER_STATS: Self = Self(0x1_0000);
    /// Firmware logger.
    pub const LOGGER: Self = Self(0x2_0000);
    /// Enhanced PNO implemented by the HAL.
    pub const HAL_EPNO: Self = Self(0x4_0000);
    /// RSSI threshold monitoring.
    pub const RSSI_MONITOR: Self = Self(0x8_0000);

    /// The empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Wrap a raw driver bitmask.
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// The raw bitmask.
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// True when every bit of `other` is set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// True when no bit is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for FeatureSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Debug for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeatureSet({:#x})", self.0)
    }
}
