pub mod error;
pub mod event;
pub mod geometry;

pub use error::{MenuError, Result};
pub use event::{InputEvent, MouseButton, JOY_BUTTON_BACK};
pub use geometry::{Point, Rect};
