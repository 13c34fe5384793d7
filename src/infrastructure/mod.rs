pub mod scheduler;
pub mod services;

pub use scheduler::{BrowserScheduler, VirtualScheduler};
