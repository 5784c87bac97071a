pub mod error;
pub mod geometry;
pub mod paint;
pub mod style;

pub use error::{Error, Result};
pub use geometry::{Point, Rect};
pub use paint::border::Side;
pub use paint::canvas::{Canvas, LineCap};
pub use paint::display_list::{CanvasOp, DisplayList, RecordingCanvas};
pub use style::border::{Border, BorderStyle};
pub use style::color::Color;
