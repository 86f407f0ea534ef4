use crate::colors::Color;
use menu_config::SelectionKind;

/// Selection effect owned by a theme.  The colour is filled in from the
/// theme's `selection_color` during validation.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionEffect {
    pub kind:         SelectionKind,
    pub color:        Color,
    /// Extra space around the widget, `(x, y)` px.
    pub margin:       (f32, f32),
    pub border_width: u32,
}

impl SelectionEffect {
    pub fn new(kind: SelectionKind) -> Self {
        let (margin, border_width) = match kind {
            SelectionKind::Highlight => ((16.0, 8.0), 1),
            SelectionKind::Underline => ((0.0, 2.0), 1),
            SelectionKind::LeftArrow | SelectionKind::RightArrow => ((0.0, 0.0), 0),
            SelectionKind::None => ((0.0, 0.0), 0),
        };
        Self { kind, color: Color::WHITE, margin, border_width }
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

impl Default for SelectionEffect {
    fn default() -> Self {
        Self::new(SelectionKind::Highlight)
    }
}
