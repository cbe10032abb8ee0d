//! Visual theme for the gallery window.

mod styles;

pub use styles::GLOBAL_STYLES;
