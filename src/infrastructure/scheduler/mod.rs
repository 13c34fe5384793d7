pub mod browser;
pub mod virtual_clock;

pub use browser::BrowserScheduler;
pub use virtual_clock::{VirtualScheduler, VirtualTimer};
