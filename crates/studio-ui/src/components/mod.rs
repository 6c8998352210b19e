//! Reusable editor controls

mod button;
mod input;
mod palette_picker;

pub use button::*;
pub use input::*;
pub use palette_picker::*;
