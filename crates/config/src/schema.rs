use menu_core::MenuError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Compass positions used for shadows and scrollbars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
    Center,
}

/// Horizontal widget alignment inside the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

/// Where the scroll area places its scrollbars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollAreaPosition {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
    /// No scrollbars at all.
    None,
    /// A scrollbar on every side.
    Full,
}

impl ScrollAreaPosition {
    /// Sides that carry a scrollbar.  Corners expand to their two sides.
    pub fn scrollbars(self) -> &'static [Position] {
        use Position as P;
        match self {
            Self::North => &[P::North],
            Self::NorthEast => &[P::North, P::East],
            Self::East => &[P::East],
            Self::SouthEast => &[P::South, P::East],
            Self::South => &[P::South],
            Self::SouthWest => &[P::South, P::West],
            Self::West => &[P::West],
            Self::NorthWest => &[P::North, P::West],
            Self::None => &[],
            Self::Full => &[P::North, P::East, P::South, P::West],
        }
    }
}

/// Visual effect drawn around the selected widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SelectionKind {
    #[default]
    Highlight,
    LeftArrow,
    RightArrow,
    Underline,
    None,
}

/// The seven title bar shapes.
///
/// The numeric codes are the ones accepted in theme files
/// (`title_bar_style = 1003`); names work too (`"title_only_diagonal"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MenuBarStyle {
    #[default]
    Adaptive,
    Simple,
    TitleOnly,
    TitleOnlyDiagonal,
    None,
    Underline,
    UnderlineTitle,
}

impl MenuBarStyle {
    pub const ALL: [Self; 7] = [
        Self::Adaptive,
        Self::Simple,
        Self::TitleOnly,
        Self::TitleOnlyDiagonal,
        Self::None,
        Self::Underline,
        Self::UnderlineTitle,
    ];

    pub const fn code(self) -> i64 {
        match self {
            Self::Adaptive => 1000,
            Self::Simple => 1001,
            Self::TitleOnly => 1002,
            Self::TitleOnlyDiagonal => 1003,
            Self::None => 1004,
            Self::Underline => 1005,
            Self::UnderlineTitle => 1006,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Adaptive => "adaptive",
            Self::Simple => "simple",
            Self::TitleOnly => "title_only",
            Self::TitleOnlyDiagonal => "title_only_diagonal",
            Self::None => "none",
            Self::Underline => "underline",
            Self::UnderlineTitle => "underline_title",
        }
    }
}

impl fmt::Display for MenuBarStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i64> for MenuBarStyle {
    type Error = MenuError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|s| s.code() == code)
            .ok_or_else(|| MenuError::InvalidStyle(code.to_string()))
    }
}

impl FromStr for MenuBarStyle {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|style| style.name() == wanted)
            .ok_or_else(|| MenuError::InvalidStyle(format!("'{s}'")))
    }
}

/// Reference to an image used in place of a background color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageRef {
    #[serde(rename = "image")]
    pub path: PathBuf,
}

/// A color as written by the user: 3 or 4 channels (0–255), or an image
/// for the fields that accept one.  Normalisation to RGBA happens in
/// `menu-theme`.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorInput {
    Channels(Vec<f64>),
    Image(ImageRef),
}

impl ColorInput {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Channels(vec![r.into(), g.into(), b.into()])
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::Channels(vec![r.into(), g.into(), b.into(), a.into()])
    }

    /// Parse a CSS-style hex color string (`#RRGGBB` or `#RRGGBBAA`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if !matches!(hex.len(), 6 | 8) || !hex.is_ascii() {
            return None;
        }

        (0..hex.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).ok().map(f64::from))
            .collect::<Option<Vec<_>>>()
            .map(Self::Channels)
    }
}

/// Check that `channels` is a 3- or 4-channel color with every channel in
/// `0..=255`.  Returns a human-readable reason on failure.
pub fn check_channels(channels: &[f64]) -> Result<(), String> {
    if !matches!(channels.len(), 3 | 4) {
        return Err(format!(
            "color must have 3 or 4 channels, got {}",
            channels.len()
        ));
    }
    if let Some(bad) = channels
        .iter()
        .find(|c| !c.is_finite() || **c < 0.0 || **c > 255.0)
    {
        return Err(format!("color channel {bad} is not between 0 and 255"));
    }
    Ok(())
}

/// Widget padding as written: one number for every side, or a 2–4 element
/// CSS-style shorthand.
#[derive(Debug, Clone, PartialEq)]
pub enum PaddingInput {
    Uniform(f64),
    Sides(Vec<f64>),
}

/// Raw theme configuration, one field per recognised key.
///
/// Values are type-checked when read from a table (see
/// [`ThemeConfig::from_table`]) but not normalised: colors may still have 3
/// channels and vectors are plain `Vec`s.  `menu_theme::Theme::validate`
/// turns this into the value the widgets consume.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeConfig {
    // ── Menu ─────────────────────────────────────────────────────────────────
    pub background_color: ColorInput,
    pub cursor_color: ColorInput,
    pub cursor_selection_color: ColorInput,
    pub focus_background_color: ColorInput,
    pub readonly_color: ColorInput,
    pub readonly_selected_color: ColorInput,
    pub selection_color: ColorInput,
    pub surface_clear_color: ColorInput,

    // ── Title bar ────────────────────────────────────────────────────────────
    pub menubar_close_button: bool,
    pub title_background_color: ColorInput,
    pub title_bar_modify_scrollarea: bool,
    /// Raw style code, checked against [`MenuBarStyle`] on validation.
    pub title_bar_style: i64,
    pub title_font: String,
    pub title_font_antialias: bool,
    pub title_font_color: ColorInput,
    pub title_font_size: i64,
    pub title_offset: Vec<f64>,
    pub title_shadow: bool,
    pub title_shadow_color: ColorInput,
    pub title_shadow_offset: f64,
    pub title_shadow_position: Position,

    // ── Scroll area ──────────────────────────────────────────────────────────
    pub scrollarea_outer_margin: Vec<f64>,
    pub scrollarea_position: ScrollAreaPosition,

    // ── Scrollbars ───────────────────────────────────────────────────────────
    pub scrollbar_color: ColorInput,
    pub scrollbar_shadow: bool,
    pub scrollbar_shadow_color: ColorInput,
    pub scrollbar_shadow_offset: f64,
    pub scrollbar_shadow_position: Position,
    pub scrollbar_slider_color: ColorInput,
    pub scrollbar_slider_pad: f64,
    pub scrollbar_thick: f64,

    // ── Widgets ──────────────────────────────────────────────────────────────
    pub widget_alignment: Alignment,
    pub widget_background_color: Option<ColorInput>,
    pub widget_background_inflate: Vec<f64>,
    pub widget_font: String,
    pub widget_font_antialias: bool,
    pub widget_font_background_color: Option<ColorInput>,
    pub widget_font_background_color_from_menu: bool,
    pub widget_font_color: ColorInput,
    pub widget_font_size: i64,
    pub widget_margin: Vec<f64>,
    pub widget_offset: Vec<f64>,
    pub widget_padding: PaddingInput,
    pub widget_selection_effect: SelectionKind,
    pub widget_shadow: bool,
    pub widget_shadow_color: ColorInput,
    pub widget_shadow_offset: f64,
    pub widget_shadow_position: Position,
}

/// Font used when a theme names none.
pub const DEFAULT_FONT: &str = "opensans";

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background_color:        ColorInput::rgb(220, 220, 220),
            cursor_color:            ColorInput::rgb(0, 0, 0),
            cursor_selection_color:  ColorInput::rgba(30, 30, 30, 120),
            focus_background_color:  ColorInput::rgba(0, 0, 0, 180),
            readonly_color:          ColorInput::rgb(120, 120, 120),
            readonly_selected_color: ColorInput::rgb(190, 190, 190),
            selection_color:         ColorInput::rgb(255, 255, 255),
            surface_clear_color:     ColorInput::rgb(0, 0, 0),

            menubar_close_button:        true,
            title_background_color:      ColorInput::rgb(70, 70, 70),
            title_bar_modify_scrollarea: true,
            title_bar_style:             MenuBarStyle::Adaptive.code(),
            title_font:                  DEFAULT_FONT.to_string(),
            title_font_antialias:        true,
            title_font_color:            ColorInput::rgb(220, 220, 220),
            title_font_size:             40,
            title_offset:                vec![5.0, -1.0],
            title_shadow:                false,
            title_shadow_color:          ColorInput::rgb(0, 0, 0),
            title_shadow_offset:         2.0,
            title_shadow_position:       Position::NorthWest,

            scrollarea_outer_margin: vec![0.0, 0.0],
            scrollarea_position:     ScrollAreaPosition::SouthEast,

            scrollbar_color:           ColorInput::rgb(220, 220, 220),
            scrollbar_shadow:          false,
            scrollbar_shadow_color:    ColorInput::rgb(0, 0, 0),
            scrollbar_shadow_offset:   2.0,
            scrollbar_shadow_position: Position::NorthWest,
            scrollbar_slider_color:    ColorInput::rgb(200, 200, 200),
            scrollbar_slider_pad:      0.0,
            scrollbar_thick:           20.0,

            widget_alignment:                       Alignment::Center,
            widget_background_color:                None,
            widget_background_inflate:              vec![0.0, 0.0],
            widget_font:                            DEFAULT_FONT.to_string(),
            widget_font_antialias:                  true,
            widget_font_background_color:           None,
            widget_font_background_color_from_menu: false,
            widget_font_color:                      ColorInput::rgb(70, 70, 70),
            widget_font_size:                       30,
            widget_margin:                          vec![0.0, 10.0],
            widget_offset:                          vec![0.0, 0.0],
            widget_padding:                         PaddingInput::Uniform(0.0),
            widget_selection_effect:                SelectionKind::Highlight,
            widget_shadow:                          false,
            widget_shadow_color:                    ColorInput::rgb(0, 0, 0),
            widget_shadow_offset:                   2.0,
            widget_shadow_position:                 Position::NorthWest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_codes_round_trip() {
        for style in MenuBarStyle::ALL {
            assert_eq!(MenuBarStyle::try_from(style.code()).unwrap(), style);
            assert_eq!(style.name().parse::<MenuBarStyle>().unwrap(), style);
        }
    }

    #[test]
    fn unknown_style_code_is_rejected() {
        assert!(matches!(
            MenuBarStyle::try_from(1007),
            Err(MenuError::InvalidStyle(_))
        ));
        assert!(matches!(
            "zigzag".parse::<MenuBarStyle>(),
            Err(MenuError::InvalidStyle(_))
        ));
    }

    #[test]
    fn hex_colors() {
        assert_eq!(
            ColorInput::from_hex("#1e1e2e"),
            Some(ColorInput::rgb(0x1e, 0x1e, 0x2e))
        );
        assert_eq!(
            ColorInput::from_hex("ff000080"),
            Some(ColorInput::rgba(255, 0, 0, 0x80))
        );
        assert_eq!(ColorInput::from_hex("#12345"), None);
        assert_eq!(ColorInput::from_hex("#gg0000"), None);
    }

    #[test]
    fn channel_check() {
        assert!(check_channels(&[0.0, 128.0, 255.0]).is_ok());
        assert!(check_channels(&[0.0, 0.0, 0.0, 0.0]).is_ok());
        assert!(check_channels(&[0.0, 0.0]).is_err());
        assert!(check_channels(&[0.0, 256.0, 0.0]).is_err());
        assert!(check_channels(&[-1.0, 0.0, 0.0]).is_err());
        assert!(check_channels(&[f64::NAN, 0.0, 0.0]).is_err());
    }

    #[test]
    fn corner_scrollarea_positions_expand_to_two_sides() {
        assert_eq!(
            ScrollAreaPosition::SouthEast.scrollbars(),
            &[Position::South, Position::East]
        );
        assert!(ScrollAreaPosition::None.scrollbars().is_empty());
        assert_eq!(ScrollAreaPosition::Full.scrollbars().len(), 4);
    }
}
