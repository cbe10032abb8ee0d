//! Reusable UI components

mod button;
mod category_select;
mod input;

pub use button::*;
pub use category_select::*;
pub use input::*;
