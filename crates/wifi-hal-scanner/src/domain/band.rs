//! WiFi band selectors and frequency helpers.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// WifiBand -- Value Object
// ---------------------------------------------------------------------------

/// Band selector used by scan buckets and channel queries.
///
/// Each variant is a combination of three base bands: 2.4 GHz (`0b001`),
/// 5 GHz non-DFS (`0b010`) and 5 GHz DFS-only (`0b100`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum WifiBand {
    /// No band; the bucket carries an explicit channel list instead.
    #[default]
    Unspecified = 0,
    /// 2.4 GHz.
    Band24GHz = 1,
    /// 5 GHz without DFS channels.
    Band5GHz = 2,
    /// 2.4 GHz and 5 GHz without DFS.
    Both = 3,
    /// 5 GHz DFS channels only.
    Band5GHzDfsOnly = 4,
    /// All 5 GHz channels.
    Band5GHzWithDfs = 6,
    /// Every channel.
    BothWithDfs = 7,
}

impl WifiBand {
    /// The three bands a driver reports channel lists for.
    pub const BASE_BANDS: [WifiBand; 3] = [
        WifiBand::Band24GHz,
        WifiBand::Band5GHz,
        WifiBand::Band5GHzDfsOnly,
    ];

    /// The band's bit pattern.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Parse a band from its bit pattern. `0b101` (2.4 GHz + DFS only) has no
    /// variant and yields `None`.
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(Self::Unspecified),
            1 => Some(Self::Band24GHz),
            2 => Some(Self::Band5GHz),
            3 => Some(Self::Both),
            4 => Some(Self::Band5GHzDfsOnly),
            6 => Some(Self::Band5GHzWithDfs),
            7 => Some(Self::BothWithDfs),
            _ => None,
        }
    }

    /// True when any base band of `other` is also selected by `self`.
    pub const fn intersects(self, other: WifiBand) -> bool {
        (self.bits() & other.bits()) != 0
    }
}

impl fmt::Display for WifiBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unspecified => "unspecified",
            Self::Band24GHz => "2.4 GHz",
            Self::Band5GHz => "5 GHz",
            Self::Both => "2.4 + 5 GHz",
            Self::Band5GHzDfsOnly => "5 GHz DFS",
            Self::Band5GHzWithDfs => "5 GHz + DFS",
            Self::BothWithDfs => "2.4 + 5 GHz + DFS",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Frequency helpers
// ---------------------------------------------------------------------------

/// Convert a centre frequency in MHz to an 802.11 channel number.
///
/// Returns 0 for frequencies outside the 2.4, 5 and 6 GHz bands.
pub fn frequency_to_channel(freq_mhz: u32) -> u8 {
    match freq_mhz {
        2412..=2472 => ((freq_mhz - 2407) / 5) as u8,
        2484 => 14,
        5170..=5885 => ((freq_mhz - 5000) / 5) as u8,
        5955..=7115 => ((freq_mhz - 5950) / 5) as u8,
        _ => 0,
    }
}

/// True for frequencies in the 2.4 GHz ISM band.
pub fn is_24ghz(freq_mhz: u32) -> bool {
    (2400..=2500).contains(&freq_mhz)
}

/// True for frequencies in the 5 GHz U-NII bands.
pub fn is_5ghz(freq_mhz: u32) -> bool {
    (4900..=5900).contains(&freq_mhz)
}

/// True for 5 GHz frequencies in the DFS range (U-NII-2A and U-NII-2C).
pub fn is_5ghz_dfs(freq_mhz: u32) -> bool {
    (5250..=5730).contains(&freq_mhz)
}
