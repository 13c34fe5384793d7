pub mod config;
pub mod driver;

pub use config::SiteConfig;
pub use driver::AnimatorDriver;
