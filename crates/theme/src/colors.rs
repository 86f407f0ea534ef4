use menu_config::{check_channels, ColorInput, ImageRef};
use menu_core::{MenuError, Result};
use serde::Serialize;

/// RGBA colour with 8-bit channels.  Alpha 255 is opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a CSS-style hex color string (`#RRGGBB` or `#RRGGBBAA`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        ColorInput::from_hex(hex).and_then(|c| format_color(&c).ok())
    }

    /// Convert to an [`iced::Color`] for drawing with Iced.
    #[inline]
    pub fn to_iced(self) -> iced::Color {
        iced::Color::from_rgba8(self.r, self.g, self.b, f32::from(self.a) / 255.0)
    }

    /// Return a copy with the alpha channel set to `alpha`.
    #[inline]
    #[must_use]
    pub fn with_alpha(mut self, alpha: u8) -> Self {
        self.a = alpha;
        self
    }

    /// Per-channel absolute RGB difference; alpha is ignored.
    #[must_use]
    pub fn rgb_distance(self, other: Self) -> [u8; 3] {
        [
            self.r.abs_diff(other.r),
            self.g.abs_diff(other.g),
            self.b.abs_diff(other.b),
        ]
    }
}

/// A fill that is either a plain colour or an image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Background {
    Color(Color),
    Image(ImageRef),
}

impl Background {
    /// The colour, or `None` for images.
    pub fn color(&self) -> Option<Color> {
        match self {
            Self::Color(c) => Some(*c),
            Self::Image(_) => None,
        }
    }
}

impl From<Color> for Background {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

/// Normalise a colour input to four channels.
///
/// `(r, g, b)` gains alpha 255, `(r, g, b, a)` is kept as is and images pass
/// through untouched.
pub fn format_opacity(input: &ColorInput) -> Result<Background> {
    match input {
        ColorInput::Image(image) => Ok(Background::Image(image.clone())),
        ColorInput::Channels(channels) => {
            check_channels(channels).map_err(MenuError::Config)?;
            // Channels are range-checked above.
            let ch = |i: usize| channels[i].round() as u8;
            let alpha = if channels.len() == 4 { ch(3) } else { 255 };
            Ok(Background::Color(Color::rgba(ch(0), ch(1), ch(2), alpha)))
        }
    }
}

/// [`format_opacity`] for fields that cannot hold an image.
pub fn format_color(input: &ColorInput) -> Result<Color> {
    match format_opacity(input)? {
        Background::Color(color) => Ok(color),
        Background::Image(image) => Err(MenuError::Config(format!(
            "image '{}' is not allowed here, expected a color",
            image.path.display()
        ))),
    }
}
