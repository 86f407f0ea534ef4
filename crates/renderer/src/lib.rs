//! Drawing targets for menu widgets.
//!
//! Widgets only talk to the [`Surface`] trait.  Two targets ship here:
//! - [`DrawList`] records every call as a serialisable [`DrawCommand`]
//!   (previews, snapshots, tests)
//! - the Iced canvas [`Frame`](iced::widget::canvas::Frame), see [`canvas`]

pub mod canvas;

use menu_core::{Point, Rect};
use menu_theme::Color;
use serde::Serialize;

/// Minimal set of primitives a title bar needs.
pub trait Surface {
    /// Fill the polygon traced by `points` (closed implicitly).
    fn fill_polygon(&mut self, points: &[Point], color: Color);

    /// Outline `rect` with a border `width` pixels thick.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: u32);

    /// Draw a single line of text with its top-left corner at `position`.
    fn draw_text(&mut self, text: &str, position: Point, size: u16, color: Color);
}

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    FillPolygon { points: Vec<Point>, color: Color },
    StrokeRect { rect: Rect, color: Color, width: u32 },
    Text { text: String, position: Point, size: u16, color: Color },
}

/// A [`Surface`] that remembers what was drawn, in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Surface for DrawList {
    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        self.commands.push(DrawCommand::FillPolygon {
            points: points.to_vec(),
            color,
        });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: u32) {
        self.commands.push(DrawCommand::StrokeRect { rect, color, width });
    }

    fn draw_text(&mut self, text: &str, position: Point, size: u16, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            size,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let mut list = DrawList::new();
        list.fill_polygon(&[Point::new(0.0, 0.0), Point::new(1.0, 0.0)], Color::BLACK);
        list.draw_text("Menu", Point::new(5.0, -1.0), 40, Color::WHITE);

        assert_eq!(list.commands.len(), 2);
        assert!(matches!(list.commands[0], DrawCommand::FillPolygon { ref points, .. } if points.len() == 2));
        assert!(matches!(list.commands[1], DrawCommand::Text { ref text, size: 40, .. } if text == "Menu"));

        list.clear();
        assert!(list.is_empty());
    }
}
