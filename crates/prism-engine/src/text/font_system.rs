use std::fmt;
use std::path::Path;

use crate::coords::Vec2;

/// Error returned by [`FontSystem::load_font`] and [`FontSystem::load_first_available`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Owns a collection of loaded fonts.
///
/// Fonts are immutable after loading. The system is passed to
/// `TextRenderer::render` each frame so new glyphs can be rasterized on demand.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        Ok(id)
    }

    /// Loads the first readable, parseable font among `paths`.
    pub fn load_first_available<P: AsRef<Path>>(
        &mut self,
        paths: &[P],
    ) -> Result<FontId, FontLoadError> {
        let mut last_err = FontLoadError("no font paths given".to_string());
        for path in paths {
            let path = path.as_ref();
            match std::fs::read(path) {
                Ok(bytes) => match self.load_font(&bytes) {
                    Ok(id) => {
                        log::debug!("loaded font {}", path.display());
                        return Ok(id);
                    }
                    Err(e) => last_err = FontLoadError(format!("{}: {}", path.display(), e.0)),
                },
                Err(e) => last_err = FontLoadError(format!("{}: {e}", path.display())),
            }
        }
        Err(last_err)
    }

    pub(crate) fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    /// Bounding box `(width, height)` of laid-out text in logical pixels.
    ///
    /// Unknown fonts and empty strings measure as zero width and one line
    /// height.
    #[must_use]
    pub fn measure_text(&self, text: &str, id: FontId, size: f32, max_width: Option<f32>) -> Vec2 {
        use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

        let Some(font) = self.get(id) else {
            return Vec2::new(0.0, size * 1.2);
        };

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings { max_width, ..LayoutSettings::default() });
        layout.append(&[font], &TextStyle::new(text, size, 0));

        let glyphs = layout.glyphs();
        if glyphs.is_empty() {
            return Vec2::new(0.0, size * 1.2);
        }

        // Pen position after each glyph, not the bitmap edge, so a measured
        // width fed back as `max_width` never wraps.
        let w = glyphs
            .iter()
            .map(|g| {
                let m = font.metrics_indexed(g.key.glyph_index, size);
                (g.x - m.xmin as f32 + m.advance_width).max(0.0)
            })
            .fold(0.0f32, f32::max);
        let h = glyphs.iter().map(|g| g.y + g.height as f32).fold(size, f32::max);
        Vec2::new(w, h)
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_fail_to_load() {
        let mut fonts = FontSystem::new();
        assert!(fonts.load_font(b"not a font").is_err());
    }

    #[test]
    fn missing_paths_report_last_error() {
        let mut fonts = FontSystem::new();
        let err = fonts
            .load_first_available(&["/nonexistent/a.ttf", "/nonexistent/b.ttf"])
            .unwrap_err();
        assert!(err.0.contains("b.ttf"), "{err}");
    }

    #[test]
    fn empty_path_list_is_an_error() {
        let mut fonts = FontSystem::new();
        let none: [&str; 0] = [];
        assert!(fonts.load_first_available(&none).is_err());
    }

    #[test]
    fn unknown_font_measures_one_line() {
        let fonts = FontSystem::new();
        let size = fonts.measure_text("abc", FontId(3), 10.0, None);
        assert_eq!(size, Vec2::new(0.0, 12.0));
    }
}
