use crate::text::ApproxMetrics;
use menu_core::Point;
use menu_theme::{Color, Theme};

/// What a widget needs to know about the menu that owns it.
///
/// The owning menu is passed into each call instead of being stored in the
/// widget, so widgets never hold a reference to their parent.
pub trait MenuHost {
    /// Identifier of the menu.
    fn id(&self) -> &str;

    /// Menu background colour; `None` when the background is an image.
    fn background_color(&self) -> Option<Color>;

    /// `true` at the navigation root, `false` inside a submenu.
    fn is_at_root(&self) -> bool;

    /// `true` when closing the menu does something.
    fn has_close_action(&self) -> bool;

    /// Outer menu width in pixels.
    fn width(&self) -> i32;

    /// Menu width without the scrollbar.
    fn inner_width(&self) -> i32;

    /// Rendered `(width, height)` of `text` at `font_size` px.
    fn text_size(&self, text: &str, font_size: u16) -> (i32, i32);

    /// Map a normalised `[0, 1]` touch position to surface pixels.
    fn finger_position(&self, x: f32, y: f32) -> Point;
}

/// Plain-data [`MenuHost`]: a menu reduced to the facts widgets consume.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuFrame {
    pub id:            String,
    pub background:    Option<Color>,
    /// Navigation depth; `0` is the root menu.
    pub depth:         usize,
    pub close_action:  bool,
    pub width:         i32,
    pub inner_width:   i32,
    /// Window size used to map touch coordinates.
    pub window_size:   (i32, i32),
    pub metrics:       ApproxMetrics,
}

impl MenuFrame {
    pub fn new(id: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            id: id.into(),
            background: None,
            depth: 0,
            close_action: false,
            width,
            inner_width: width,
            window_size: (width, height),
            metrics: ApproxMetrics::default(),
        }
    }

    /// Frame with the menu background taken from `theme`.
    pub fn from_theme(id: impl Into<String>, theme: &Theme, width: i32, height: i32) -> Self {
        Self {
            background: theme.background_color.color(),
            ..Self::new(id, width, height)
        }
    }

    #[must_use]
    pub fn with_close_action(mut self, close_action: bool) -> Self {
        self.close_action = close_action;
        self
    }

    /// Reserve `thickness` px on the right for a vertical scrollbar.
    #[must_use]
    pub fn with_scrollbar(mut self, thickness: i32) -> Self {
        self.inner_width = self.width - thickness;
        self
    }

    pub fn open_submenu(&mut self) {
        self.depth += 1;
    }

    pub fn close_submenu(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

impl MenuHost for MenuFrame {
    fn id(&self) -> &str {
        &self.id
    }

    fn background_color(&self) -> Option<Color> {
        self.background
    }

    fn is_at_root(&self) -> bool {
        self.depth == 0
    }

    fn has_close_action(&self) -> bool {
        self.close_action
    }

    fn width(&self) -> i32 {
        self.width
    }

    fn inner_width(&self) -> i32 {
        self.inner_width
    }

    fn text_size(&self, text: &str, font_size: u16) -> (i32, i32) {
        self.metrics.measure(text, font_size)
    }

    fn finger_position(&self, x: f32, y: f32) -> Point {
        Point::new(x * self.window_size.0 as f32, y * self.window_size.1 as f32)
    }
}
