//! Ports of the scanner.
//!
//! [`WifiScanner`] is the driving port offered to the scanning service.
//! [`NativeDriver`] and [`FallbackScanner`] are the two driven ports the
//! router picks between. The handler traits carry asynchronous results from
//! the backends straight to the caller.

mod events;
mod fallback_scanner;
mod native_driver;
mod wifi_scanner;

pub use events::{
    ChangeEventHandler, HotlistEventHandler, OffloadEventHandler, ScanEventHandler, ScanStatus,
};
pub use fallback_scanner::FallbackScanner;
pub use native_driver::NativeDriver;
pub use wifi_scanner::WifiScanner;
