pub mod hooks;
pub mod ticker_view;

pub use hooks::{MountedAnimator, use_animator, use_first_paint};
pub use ticker_view::{TickerRow, Trend, scroll_track};
