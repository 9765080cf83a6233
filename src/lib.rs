//! Hand-rolled SVG icon components for the application UI.

pub mod icons;
pub mod utils;

pub use icons::ChevronLeft;
