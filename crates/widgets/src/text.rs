/// Text size estimate for hosts without a font rasteriser.
///
/// Glyphs are assumed to be `glyph_width × size` wide and lines
/// `line_height × size` tall, which is close enough for proportional sans
/// fonts to lay out a title bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproxMetrics {
    pub glyph_width: f32,
    pub line_height: f32,
}

impl ApproxMetrics {
    /// `(width, height)` in whole pixels of `text` at `size` px.
    pub fn measure(&self, text: &str, size: u16) -> (i32, i32) {
        let size = f32::from(size);
        let chars = text.chars().count() as f32;
        (
            (chars * size * self.glyph_width).round() as i32,
            (size * self.line_height).round() as i32,
        )
    }
}

impl Default for ApproxMetrics {
    fn default() -> Self {
        Self {
            glyph_width: 0.55,
            line_height: 1.25,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_ignores_text() {
        let m = ApproxMetrics::default();
        assert_eq!(m.measure("", 40), (0, 50));
        assert_eq!(m.measure("Menu", 40), (88, 50));
    }

    #[test]
    fn counts_chars_not_bytes() {
        let m = ApproxMetrics::default();
        assert_eq!(m.measure("Menú", 20).0, m.measure("Menu", 20).0);
    }
}
