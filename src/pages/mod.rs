//! Page components for the gallery window.

mod gallery;

pub use gallery::Gallery;
