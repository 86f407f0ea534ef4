use crate::colors::Color;
use menu_config::{MenuBarStyle, PaddingInput};
use menu_core::{MenuError, Result};

/// Widget padding in pixels, CSS order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub top:    f32,
    pub right:  f32,
    pub bottom: f32,
    pub left:   f32,
}

impl Padding {
    pub const fn all(v: f32) -> Self {
        Self { top: v, right: v, bottom: v, left: v }
    }

    /// Expand the CSS shorthand: `[v, h]`, `[t, h, b]` or `[t, r, b, l]`.
    pub fn from_input(input: &PaddingInput) -> Result<Self> {
        let sides: Vec<f32> = match input {
            PaddingInput::Uniform(v) => return Ok(Self::all(*v as f32)),
            PaddingInput::Sides(sides) => sides.iter().map(|v| *v as f32).collect(),
        };

        match sides[..] {
            [v, h] => Ok(Self { top: v, right: h, bottom: v, left: h }),
            [t, h, b] => Ok(Self { top: t, right: h, bottom: b, left: h }),
            [top, right, bottom, left] => Ok(Self { top, right, bottom, left }),
            _ => Err(MenuError::Config(format!(
                "widget padding tuple length must be 2, 3 or 4, got {}",
                sides.len()
            ))),
        }
    }
}

/// The slice of a theme the title bar is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleStyle {
    pub style:             MenuBarStyle,
    pub background:        Color,
    pub font_color:        Color,
    pub font_size:         u16,
    /// Title offset `(x, y)` in pixels.
    pub offset:            (f32, f32),
    /// Draw the close/back button.
    pub close_button:      bool,
    pub modify_scrollarea: bool,
}
