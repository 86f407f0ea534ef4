use crate::schema::{ColorInput, ThemeConfig};
use serde::{Deserialize, Serialize};

/// Built-in themes.  Each one overrides a handful of colors on top of
/// [`ThemeConfig::default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    #[default]
    Default,
    Dark,
    Blue,
    Green,
    Orange,
    Solarized,
}

impl Preset {
    pub const ALL: [Self; 6] = [
        Self::Default,
        Self::Dark,
        Self::Blue,
        Self::Green,
        Self::Orange,
        Self::Solarized,
    ];

    pub fn config(self) -> ThemeConfig {
        match self {
            Self::Default => ThemeConfig::default(),
            Self::Dark => ThemeConfig {
                background_color:       ColorInput::rgb(40, 41, 35),
                cursor_color:           ColorInput::rgb(255, 255, 255),
                cursor_selection_color: ColorInput::rgba(80, 80, 80, 120),
                scrollbar_color:        ColorInput::rgb(39, 41, 42),
                scrollbar_slider_color: ColorInput::rgb(65, 66, 67),
                selection_color:        ColorInput::rgb(255, 255, 255),
                title_background_color: ColorInput::rgb(47, 48, 51),
                title_font_color:       ColorInput::rgb(215, 215, 215),
                widget_font_color:      ColorInput::rgb(200, 200, 200),
                ..ThemeConfig::default()
            },
            Self::Blue => ThemeConfig {
                background_color:       ColorInput::rgb(228, 230, 246),
                scrollbar_shadow:       true,
                scrollbar_slider_color: ColorInput::rgb(150, 200, 230),
                scrollbar_slider_pad:   2.0,
                selection_color:        ColorInput::rgb(100, 62, 132),
                title_background_color: ColorInput::rgb(62, 149, 195),
                title_font_color:       ColorInput::rgb(228, 230, 246),
                title_shadow:           true,
                widget_font_color:      ColorInput::rgb(61, 170, 220),
                ..ThemeConfig::default()
            },
            Self::Green => ThemeConfig {
                background_color:       ColorInput::rgb(186, 214, 177),
                scrollbar_slider_color: ColorInput::rgb(125, 121, 114),
                scrollbar_slider_pad:   2.0,
                selection_color:        ColorInput::rgb(125, 121, 114),
                title_background_color: ColorInput::rgb(125, 121, 114),
                title_font_color:       ColorInput::rgb(228, 230, 246),
                widget_font_color:      ColorInput::rgb(255, 255, 255),
                ..ThemeConfig::default()
            },
            Self::Orange => ThemeConfig {
                background_color:       ColorInput::rgb(228, 100, 36),
                selection_color:        ColorInput::rgb(255, 255, 255),
                title_background_color: ColorInput::rgb(170, 65, 50),
                widget_font_color:      ColorInput::rgb(0, 0, 0),
                widget_font_size:       30,
                ..ThemeConfig::default()
            },
            Self::Solarized => ThemeConfig {
                background_color:       ColorInput::rgb(239, 231, 211),
                cursor_color:           ColorInput::rgb(0, 0, 0),
                cursor_selection_color: ColorInput::rgba(146, 160, 160, 120),
                selection_color:        ColorInput::rgb(207, 62, 132),
                title_background_color: ColorInput::rgb(4, 47, 58),
                title_font_color:       ColorInput::rgb(38, 158, 151),
                widget_font_color:      ColorInput::rgb(102, 122, 130),
                ..ThemeConfig::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_differ_from_default_except_default() {
        for preset in Preset::ALL {
            let differs = preset.config() != ThemeConfig::default();
            assert_eq!(differs, preset != Preset::Default, "{preset:?}");
        }
    }

    #[test]
    fn dark_keeps_unlisted_defaults() {
        let dark = Preset::Dark.config();
        assert_eq!(dark.title_font_size, 40);
        assert_eq!(dark.background_color, ColorInput::rgb(40, 41, 35));
    }
}
