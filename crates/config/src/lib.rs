pub mod params;
pub mod presets;
pub mod schema;

pub use params::Params;
pub use presets::Preset;
pub use schema::{
    check_channels, Alignment, ColorInput, ImageRef, MenuBarStyle, PaddingInput, Position,
    ScrollAreaPosition, SelectionKind, ThemeConfig,
};

use menu_core::{MenuError, Result};
use std::path::{Path, PathBuf};
use toml::{Table, Value};

impl ThemeConfig {
    /// Build a config from a parameter table on top of the defaults.
    ///
    /// Fails with [`MenuError::Config`] on a badly typed value and with
    /// [`MenuError::UnknownParameter`] on a key outside the schema.
    pub fn from_table(table: Table) -> Result<Self> {
        Self::from_table_with_base(Self::default(), table)
    }

    /// Same as [`ThemeConfig::from_table`], with `base` supplying the values
    /// of absent keys (e.g. a [`Preset`]).
    pub fn from_table_with_base(base: Self, table: Table) -> Result<Self> {
        let mut p = Params::new(table);
        let d = base;

        let config = Self {
            background_color:        p.take_color_or_image("background_color", d.background_color)?,
            cursor_color:            p.take_color("cursor_color", d.cursor_color)?,
            cursor_selection_color:  p.take_color("cursor_selection_color", d.cursor_selection_color)?,
            focus_background_color:  p.take_color("focus_background_color", d.focus_background_color)?,
            readonly_color:          p.take_color("readonly_color", d.readonly_color)?,
            readonly_selected_color: p.take_color("readonly_selected_color", d.readonly_selected_color)?,
            selection_color:         p.take_color("selection_color", d.selection_color)?,
            surface_clear_color:     p.take_color("surface_clear_color", d.surface_clear_color)?,

            menubar_close_button:        p.take_bool("menubar_close_button", d.menubar_close_button)?,
            title_background_color:      p.take_color("title_background_color", d.title_background_color)?,
            title_bar_modify_scrollarea: p.take_bool("title_bar_modify_scrollarea", d.title_bar_modify_scrollarea)?,
            title_bar_style:             p.take_style("title_bar_style", d.title_bar_style)?,
            title_font:                  p.take_string("title_font", d.title_font)?,
            title_font_antialias:        p.take_bool("title_font_antialias", d.title_font_antialias)?,
            title_font_color:            p.take_color("title_font_color", d.title_font_color)?,
            title_font_size:             p.take_int("title_font_size", d.title_font_size)?,
            title_offset:                p.take_tuple2("title_offset", d.title_offset)?,
            title_shadow:                p.take_bool("title_shadow", d.title_shadow)?,
            title_shadow_color:          p.take_color("title_shadow_color", d.title_shadow_color)?,
            title_shadow_offset:         p.take_number("title_shadow_offset", d.title_shadow_offset)?,
            title_shadow_position:       p.take_enum("title_shadow_position", d.title_shadow_position)?,

            scrollarea_outer_margin: p.take_tuple2("scrollarea_outer_margin", d.scrollarea_outer_margin)?,
            scrollarea_position:     p.take_enum("scrollarea_position", d.scrollarea_position)?,

            scrollbar_color:           p.take_color("scrollbar_color", d.scrollbar_color)?,
            scrollbar_shadow:          p.take_bool("scrollbar_shadow", d.scrollbar_shadow)?,
            scrollbar_shadow_color:    p.take_color("scrollbar_shadow_color", d.scrollbar_shadow_color)?,
            scrollbar_shadow_offset:   p.take_number("scrollbar_shadow_offset", d.scrollbar_shadow_offset)?,
            scrollbar_shadow_position: p.take_enum("scrollbar_shadow_position", d.scrollbar_shadow_position)?,
            scrollbar_slider_color:    p.take_color("scrollbar_slider_color", d.scrollbar_slider_color)?,
            scrollbar_slider_pad:      p.take_number("scrollbar_slider_pad", d.scrollbar_slider_pad)?,
            scrollbar_thick:           p.take_number("scrollbar_thick", d.scrollbar_thick)?,

            widget_alignment:          p.take_enum("widget_alignment", d.widget_alignment)?,
            widget_background_color:   p.take_color_image_or_none("widget_background_color", d.widget_background_color)?,
            widget_background_inflate: p.take_tuple2("background_inflate", d.widget_background_inflate)?,
            widget_font:               p.take_string("widget_font", d.widget_font)?,
            widget_font_antialias:     p.take_bool("widget_font_antialias", d.widget_font_antialias)?,
            widget_font_background_color: p.take_color_or_none(
                "widget_font_background_color",
                d.widget_font_background_color,
            )?,
            widget_font_background_color_from_menu: p.take_bool(
                "widget_font_background_color_from_menu",
                d.widget_font_background_color_from_menu,
            )?,
            widget_font_color:       p.take_color("widget_font_color", d.widget_font_color)?,
            widget_font_size:        p.take_int("widget_font_size", d.widget_font_size)?,
            widget_margin:           p.take_tuple2("widget_margin", d.widget_margin)?,
            widget_offset:           p.take_tuple2("widget_offset", d.widget_offset)?,
            widget_padding:          p.take_padding("widget_padding", d.widget_padding)?,
            widget_selection_effect: p.take_enum("widget_selection_effect", d.widget_selection_effect)?,
            widget_shadow:           p.take_bool("widget_shadow", d.widget_shadow)?,
            widget_shadow_color:     p.take_color("widget_shadow_color", d.widget_shadow_color)?,
            widget_shadow_offset:    p.take_number("widget_shadow_offset", d.widget_shadow_offset)?,
            widget_shadow_position:  p.take_enum("widget_shadow_position", d.widget_shadow_position)?,
        };

        p.finish()?;
        Ok(config)
    }
}

/// Load a theme file.  Returns the default theme config if the file doesn't
/// exist so a menu always has something to render with.
///
/// The file holds an optional `base = "<preset>"` and a `[theme]` table:
///
/// ```toml
/// base = "dark"
///
/// [theme]
/// title_bar_style = "underline_title"
/// title_font_color = "#e0e0e0"
/// ```
pub fn load(path: impl AsRef<Path>) -> Result<ThemeConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Theme file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(ThemeConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| MenuError::Config(format!("cannot read '{}': {e}", path.display())))?;

    let config = parse(&raw)?;
    tracing::info!("Loaded theme from '{}'", path.display());
    Ok(config)
}

/// Parse the contents of a theme file (see [`load`]).
pub fn parse(raw: &str) -> Result<ThemeConfig> {
    let mut doc: Table =
        toml::from_str(raw).map_err(|e| MenuError::Config(format!("TOML parse error: {e}")))?;

    let base = match doc.remove("base") {
        None => Preset::Default,
        Some(value) => value
            .try_into::<Preset>()
            .map_err(|e| MenuError::Config(format!("base: {}", e.to_string().trim())))?,
    };

    let theme = match doc.remove("theme") {
        None => Table::new(),
        Some(Value::Table(table)) => table,
        Some(other) => {
            return Err(MenuError::Config(format!(
                "[theme] must be a table, got {}",
                other.type_str()
            )))
        }
    };

    if let Some(key) = doc.keys().next() {
        return Err(MenuError::UnknownParameter(key.clone()));
    }

    ThemeConfig::from_table_with_base(base.config(), theme)
}

/// Return the default theme path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("menu").join("theme.toml")
}
