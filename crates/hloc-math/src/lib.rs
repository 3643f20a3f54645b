//! Histogram localization math utilities.

pub mod math;

pub use math::dist::*;
pub use math::wrap::*;
