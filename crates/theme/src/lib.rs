pub mod colors;
pub mod selection;
pub mod style;

pub use colors::{format_color, format_opacity, Background, Color};
pub use selection::SelectionEffect;
pub use style::{Padding, TitleStyle};

use menu_config::{
    Alignment, ColorInput, MenuBarStyle, Position, Preset, ScrollAreaPosition, ThemeConfig,
};
use menu_core::{MenuError, Result};

/// Validated theme derived from a [`ThemeConfig`].
///
/// Every colour carries four channels, every vector has its fixed arity and
/// the title bar style is a real [`MenuBarStyle`].  Build one with
/// [`Theme::validate`]; `clone()` gives an independent deep copy.  After
/// validation the only sanctioned change is
/// [`Theme::set_background_color_opacity`].
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    // Menu
    pub background_color:        Background,
    pub cursor_color:            Color,
    pub cursor_selection_color:  Color,
    pub focus_background_color:  Color,
    pub readonly_color:          Color,
    pub readonly_selected_color: Color,
    pub selection_color:         Color,
    pub surface_clear_color:     Color,

    // Title bar
    pub menubar_close_button:        bool,
    pub title_background_color:      Color,
    pub title_bar_modify_scrollarea: bool,
    pub title_bar_style:             MenuBarStyle,
    pub title_font:                  String,
    pub title_font_antialias:        bool,
    pub title_font_color:            Color,
    pub title_font_size:             u16,
    pub title_offset:                (f32, f32),
    pub title_shadow:                bool,
    pub title_shadow_color:          Color,
    pub title_shadow_offset:         f32,
    pub title_shadow_position:       Position,

    // Scroll area
    pub scrollarea_outer_margin: (f32, f32),
    pub scrollarea_position:     ScrollAreaPosition,

    // Scrollbars
    pub scrollbar_color:           Color,
    pub scrollbar_shadow:          bool,
    pub scrollbar_shadow_color:    Color,
    pub scrollbar_shadow_offset:   f32,
    pub scrollbar_shadow_position: Position,
    pub scrollbar_slider_color:    Color,
    pub scrollbar_slider_pad:      f32,
    pub scrollbar_thick:           f32,

    // Widgets
    pub widget_alignment:                       Alignment,
    /// `None` = transparent (no per-widget background).
    pub widget_background_color:                Option<Background>,
    pub widget_background_inflate:              (f32, f32),
    pub widget_font:                            String,
    pub widget_font_antialias:                  bool,
    pub widget_font_background_color:           Option<Color>,
    pub widget_font_background_color_from_menu: bool,
    pub widget_font_color:                      Color,
    pub widget_font_size:                       u16,
    pub widget_margin:                          (f32, f32),
    pub widget_offset:                          (f32, f32),
    pub widget_padding:                         Padding,
    pub widget_selection_effect:                SelectionEffect,
    pub widget_shadow:                          bool,
    pub widget_shadow_color:                    Color,
    pub widget_shadow_offset:                   f32,
    pub widget_shadow_position:                 Position,
}

impl Theme {
    /// Check and normalise a raw config into a theme.
    ///
    /// Fails with [`MenuError::InvalidStyle`] for an unknown title bar style
    /// and with [`MenuError::Config`] for any other violated constraint.
    pub fn validate(config: ThemeConfig) -> Result<Self> {
        let c = config;

        let title_bar_style = MenuBarStyle::try_from(c.title_bar_style)?;

        let title_font_size  = font_size("title_font_size", c.title_font_size)?;
        let widget_font_size = font_size("widget_font_size", c.widget_font_size)?;
        positive("scrollbar_shadow_offset", c.scrollbar_shadow_offset)?;
        positive("scrollbar_thick", c.scrollbar_thick)?;
        positive("widget_shadow_offset", c.widget_shadow_offset)?;
        if !(c.scrollbar_slider_pad >= 0.0) {
            return Err(MenuError::Config(
                "scrollbar_slider_pad must be equal or greater than zero".into(),
            ));
        }

        let scrollarea_outer_margin = non_negative(
            "scrollarea_outer_margin",
            vec2("scrollarea_outer_margin", &c.scrollarea_outer_margin)?,
        )?;
        let widget_offset = non_negative("widget_offset", vec2("widget_offset", &c.widget_offset)?)?;

        let selection_color = color("selection_color", &c.selection_color)?;
        let mut widget_selection_effect = SelectionEffect::new(c.widget_selection_effect);
        widget_selection_effect.set_color(selection_color);

        let focus_background_color = color("focus_background_color", &c.focus_background_color)?;
        if focus_background_color.a == 0 {
            return Err(MenuError::Config(
                "focus background color cannot be fully transparent, \
                 suggested opacity between 1 and 255"
                    .into(),
            ));
        }

        let theme = Self {
            background_color: background("background_color", &c.background_color)?,
            cursor_color: color("cursor_color", &c.cursor_color)?,
            cursor_selection_color: color("cursor_selection_color", &c.cursor_selection_color)?,
            focus_background_color,
            readonly_color: color("readonly_color", &c.readonly_color)?,
            readonly_selected_color: color("readonly_selected_color", &c.readonly_selected_color)?,
            selection_color,
            surface_clear_color: color("surface_clear_color", &c.surface_clear_color)?,

            menubar_close_button: c.menubar_close_button,
            title_background_color: color("title_background_color", &c.title_background_color)?,
            title_bar_modify_scrollarea: c.title_bar_modify_scrollarea,
            title_bar_style,
            title_font: c.title_font,
            title_font_antialias: c.title_font_antialias,
            title_font_color: color("title_font_color", &c.title_font_color)?,
            title_font_size,
            title_offset: vec2("title_offset", &c.title_offset)?,
            title_shadow: c.title_shadow,
            title_shadow_color: color("title_shadow_color", &c.title_shadow_color)?,
            title_shadow_offset: c.title_shadow_offset as f32,
            title_shadow_position: c.title_shadow_position,

            scrollarea_outer_margin,
            scrollarea_position: c.scrollarea_position,

            scrollbar_color: color("scrollbar_color", &c.scrollbar_color)?,
            scrollbar_shadow: c.scrollbar_shadow,
            scrollbar_shadow_color: color("scrollbar_shadow_color", &c.scrollbar_shadow_color)?,
            scrollbar_shadow_offset: c.scrollbar_shadow_offset as f32,
            scrollbar_shadow_position: c.scrollbar_shadow_position,
            scrollbar_slider_color: color("scrollbar_slider_color", &c.scrollbar_slider_color)?,
            scrollbar_slider_pad: c.scrollbar_slider_pad as f32,
            scrollbar_thick: c.scrollbar_thick as f32,

            widget_alignment: c.widget_alignment,
            widget_background_color: c
                .widget_background_color
                .as_ref()
                .map(|input| background("widget_background_color", input))
                .transpose()?,
            widget_background_inflate: vec2("background_inflate", &c.widget_background_inflate)?,
            widget_font: c.widget_font,
            widget_font_antialias: c.widget_font_antialias,
            widget_font_background_color: c
                .widget_font_background_color
                .as_ref()
                .map(|input| color("widget_font_background_color", input))
                .transpose()?,
            widget_font_background_color_from_menu: c.widget_font_background_color_from_menu,
            widget_font_color: color("widget_font_color", &c.widget_font_color)?,
            widget_font_size,
            widget_margin: vec2("widget_margin", &c.widget_margin)?,
            widget_offset,
            widget_padding: Padding::from_input(&c.widget_padding)?,
            widget_selection_effect,
            widget_shadow: c.widget_shadow,
            widget_shadow_color: color("widget_shadow_color", &c.widget_shadow_color)?,
            widget_shadow_offset: c.widget_shadow_offset as f32,
            widget_shadow_position: c.widget_shadow_position,
        };

        tracing::debug!(style = %theme.title_bar_style, "theme validated");
        Ok(theme)
    }

    /// Validated built-in theme.
    pub fn preset(preset: Preset) -> Result<Self> {
        Self::validate(preset.config())
    }

    /// Rewrite the alpha channel of the menu background.
    ///
    /// `opacity` goes from `0.0` (transparent) to `1.0` (opaque); anything
    /// else, NaN included, is a [`MenuError::Range`].
    pub fn set_background_color_opacity(&mut self, opacity: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&opacity) {
            return Err(MenuError::Range(format!(
                "opacity must be a number between 0 (transparent) and 1 (opaque), got {opacity}"
            )));
        }

        match &mut self.background_color {
            Background::Color(c) => {
                *c = c.with_alpha((opacity * 255.0).round() as u8);
                Ok(())
            }
            Background::Image(image) => Err(MenuError::Config(format!(
                "cannot set the opacity of background image '{}'",
                image.path.display()
            ))),
        }
    }

    /// Title bar settings for building a `MenuBar`.
    pub fn title_style(&self) -> TitleStyle {
        TitleStyle {
            style:             self.title_bar_style,
            background:        self.title_background_color,
            font_color:        self.title_font_color,
            font_size:         self.title_font_size,
            offset:            self.title_offset,
            close_button:      self.menubar_close_button,
            modify_scrollarea: self.title_bar_modify_scrollarea,
        }
    }
}

fn with_key(key: &str, err: MenuError) -> MenuError {
    match err {
        MenuError::Config(reason) => MenuError::Config(format!("Theme.{key}: {reason}")),
        other => other,
    }
}

fn color(key: &str, input: &ColorInput) -> Result<Color> {
    format_color(input).map_err(|e| with_key(key, e))
}

fn background(key: &str, input: &ColorInput) -> Result<Background> {
    format_opacity(input).map_err(|e| with_key(key, e))
}

fn vec2(key: &str, v: &[f64]) -> Result<(f32, f32)> {
    match *v {
        [x, y] => Ok((x as f32, y as f32)),
        _ => Err(MenuError::Config(format!(
            "Theme.{key}: object is not a 2-length vector (got {} elements)",
            v.len()
        ))),
    }
}

fn non_negative(key: &str, (x, y): (f32, f32)) -> Result<(f32, f32)> {
    if x >= 0.0 && y >= 0.0 {
        Ok((x, y))
    } else {
        Err(MenuError::Config(format!(
            "Theme.{key} must be equal or greater than zero, got ({x}, {y})"
        )))
    }
}

fn positive(key: &str, v: f64) -> Result<()> {
    if v > 0.0 {
        Ok(())
    } else {
        Err(MenuError::Config(format!("Theme.{key} must be greater than zero, got {v}")))
    }
}

fn font_size(key: &str, v: i64) -> Result<u16> {
    u16::try_from(v)
        .ok()
        .filter(|size| *size > 0)
        .ok_or_else(|| MenuError::Config(format!("Theme.{key} must be between 1 and 65535, got {v}")))
}
