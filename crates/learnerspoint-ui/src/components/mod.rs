//! Reusable UI components
//!
//! Each component maps its variant enums onto class names from the global
//! stylesheet and forwards events as plain values.

mod button;
mod input;
mod notice;
mod progress_bar;

pub use button::*;
pub use input::*;
pub use notice::*;
pub use progress_bar::*;
