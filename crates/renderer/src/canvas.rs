//! [`Surface`] on top of an Iced canvas frame, so a title bar can be drawn
//! from a `canvas::Program::draw` implementation.

use crate::Surface;
use iced::widget::canvas::{Frame, Path, Stroke, Text};
use iced::{Pixels, Size};
use menu_core::{Point, Rect};
use menu_theme::Color;

#[inline]
fn to_iced_point(p: Point) -> iced::Point {
    iced::Point::new(p.x, p.y)
}

/// Closed path through `points`; `None` for an empty slice.
pub fn polygon_path(points: &[Point]) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    Some(Path::new(|b| {
        b.move_to(to_iced_point(*first));
        for p in rest {
            b.line_to(to_iced_point(*p));
        }
        b.close();
    }))
}

pub fn rect_path(rect: Rect) -> Path {
    Path::rectangle(
        iced::Point::new(rect.x as f32, rect.y as f32),
        Size::new(rect.width as f32, rect.height as f32),
    )
}

pub fn border_stroke(color: Color, width: u32) -> Stroke<'static> {
    Stroke::default()
        .with_color(color.to_iced())
        .with_width(width as f32)
}

pub fn title_text(text: &str, position: Point, size: u16, color: Color) -> Text {
    Text {
        content: text.to_string(),
        position: to_iced_point(position),
        color: color.to_iced(),
        size: Pixels(f32::from(size)),
        ..Text::default()
    }
}

impl Surface for Frame {
    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        if let Some(path) = polygon_path(points) {
            self.fill(&path, color.to_iced());
        }
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: u32) {
        self.stroke(&rect_path(rect), border_stroke(color, width));
    }

    fn draw_text(&mut self, text: &str, position: Point, size: u16, color: Color) {
        self.fill_text(title_text(text, position, size, color));
    }
}
