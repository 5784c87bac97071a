//! Resolved styling values for box edges

pub mod border;
pub mod color;

pub use border::{Border, BorderStyle};
pub use color::Color;
