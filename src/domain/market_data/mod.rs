//! Synthetic ticker feed: entries, jitter bounds and the perturbing animator.

pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use services::*;
pub use value_objects::*;
