//! Adapter implementations of the [`WifiScanner`](crate::port::WifiScanner) port.
//!
//! - [`HalWifiScanner`]: routes between the gscan HAL driver and a software
//!   fallback scanner, depending on whether the HAL reports ePNO.

pub mod hal_scanner;

pub use hal_scanner::{FallbackContext, HalWifiScanner, OffloadRoute};
