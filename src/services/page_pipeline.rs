use std::path::Path;

use image::RgbaImage;
use lineart::{
    DominantColorExtractor, EdgeExtractor, LineArt, MatchResult, PaletteMatcher, PixelBuffer,
    ReferencePalette,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::error::AppError;
use crate::models::AppConfig;
use crate::services::image_io;

/// Summary of a line-art run written to disk
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineArtSummary {
    pub width: u32,
    pub height: u32,
    pub png_bytes: usize,
    pub ink_ratio: f64,
}

/// Dominant colors of an image and, with a palette, their matches
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorReport {
    pub colors: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub matches: Vec<MatchResult>,
}

/// Page pipeline that orchestrates decode → line art / colors → matching
pub struct PagePipeline {
    config: AppConfig,
    palette: Option<ReferencePalette>,
}

impl PagePipeline {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            palette: None,
        }
    }

    /// Attach a reference palette for matching.
    pub fn with_palette(mut self, palette: ReferencePalette) -> Self {
        self.palette = Some(palette);
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn palette(&self) -> Option<&ReferencePalette> {
        self.palette.as_ref()
    }

    /// Trace an already decoded image.
    pub fn line_art(&self, image: &RgbaImage) -> Result<LineArt, AppError> {
        let buffer = PixelBuffer::from_image(image)?;
        let art = EdgeExtractor::with_options(self.config.edge.to_options()).extract(&buffer)?;
        tracing::debug!(
            width = art.width(),
            height = art.height(),
            ink_ratio = art.ink_ratio(),
            "Extracted line art"
        );
        Ok(art)
    }

    /// Decode `input`, trace it and write the PNG to `output`.
    pub fn render_file(&self, input: &Path, output: &Path) -> Result<LineArtSummary, AppError> {
        let image = image_io::decode_file(input)?;
        let art = self.line_art(&image)?;
        let png_bytes = image_io::write_png(&art, output)?;

        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            width = art.width(),
            height = art.height(),
            png_bytes,
            "Wrote line art"
        );

        Ok(LineArtSummary {
            width: art.width(),
            height: art.height(),
            png_bytes,
            ink_ratio: art.ink_ratio(),
        })
    }

    /// Dominant colors of an already decoded image.
    ///
    /// Uses the configured seed when present, so repeated runs agree.
    pub fn dominant_colors(&self, image: &RgbaImage) -> Result<Vec<String>, AppError> {
        let buffer = PixelBuffer::from_image(image)?;
        let extractor = DominantColorExtractor::with_options(self.config.colors.to_options());

        let colors = match self.config.colors.seed {
            Some(seed) => extractor.extract_with_rng(&buffer, &mut StdRng::seed_from_u64(seed))?,
            None => extractor.extract(&buffer)?,
        };
        tracing::debug!(count = colors.len(), "Extracted dominant colors");
        Ok(colors)
    }

    /// Match hex colors against the attached palette.
    pub fn match_colors<S: AsRef<str>>(&self, hexes: &[S]) -> Result<Vec<MatchResult>, AppError> {
        let palette = self
            .palette
            .as_ref()
            .ok_or_else(|| AppError::Config("no palette configured for matching".to_string()))?;

        let matcher = PaletteMatcher::new(palette).metric(self.config.matching.metric);
        let results = matcher.match_colors(hexes, self.config.matching.top_k)?;
        tracing::debug!(
            colors = results.len(),
            metric = ?matcher.distance_metric(),
            top_k = self.config.matching.top_k,
            "Matched colors against palette"
        );
        Ok(results)
    }

    /// Dominant colors of `input`, matched against the palette when one is
    /// attached.
    pub fn analyze_file(&self, input: &Path) -> Result<ColorReport, AppError> {
        let image = image_io::decode_file(input)?;
        self.analyze(&image)
    }

    pub fn analyze(&self, image: &RgbaImage) -> Result<ColorReport, AppError> {
        let colors = self.dominant_colors(image)?;
        let matches = match self.palette {
            Some(_) => self.match_colors(&colors)?,
            None => Vec::new(),
        };
        Ok(ColorReport { colors, matches })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use lineart::PaletteEntry;

    fn palette() -> ReferencePalette {
        ReferencePalette::new(vec![
            PaletteEntry::new(1, "White", "#ffffff"),
            PaletteEntry::new(199, "Black", "#000000"),
            PaletteEntry::new(797, "Royal Blue", "#13477d"),
        ])
        .unwrap()
    }

    fn seeded_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.colors.seed = Some(17);
        config
    }

    #[test]
    fn test_match_without_palette_fails() {
        let pipeline = PagePipeline::new(AppConfig::default());
        let err = pipeline.match_colors(&["#000000"]).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_match_uses_configured_top_k() {
        let mut config = AppConfig::default();
        config.matching.top_k = 2;
        let pipeline = PagePipeline::new(config).with_palette(palette());

        let results = pipeline.match_colors(&["#000000"]).unwrap();
        assert_eq!(results[0].matches.len(), 2);
        assert_eq!(results[0].matches[0].entry.id, 199);
    }

    #[test]
    fn test_malformed_hex_is_core_error() {
        let pipeline = PagePipeline::new(AppConfig::default()).with_palette(palette());
        let err = pipeline.match_colors(&["#12"]).unwrap_err();
        assert!(matches!(err, AppError::Core(_)));
    }

    #[test]
    fn test_analyze_solid_image() {
        let image = RgbaImage::from_pixel(30, 20, Rgba([0x13, 0x47, 0x7d, 255]));
        let pipeline = PagePipeline::new(seeded_config()).with_palette(palette());

        let report = pipeline.analyze(&image).unwrap();
        assert_eq!(report.colors, vec!["#13477d".to_string()]);
        assert_eq!(report.matches.len(), 1);
        assert_eq!(report.matches[0].best().unwrap().entry.id, 797);
    }

    #[test]
    fn test_seeded_analysis_is_reproducible() {
        let image = RgbaImage::from_fn(40, 40, |x, y| {
            Rgba([(x * 6) as u8, (y * 6) as u8, ((x + y) * 3) as u8, 255])
        });
        let pipeline = PagePipeline::new(seeded_config());
        assert_eq!(
            pipeline.dominant_colors(&image).unwrap(),
            pipeline.dominant_colors(&image).unwrap()
        );
    }

    #[test]
    fn test_zero_sample_width_from_config_is_rejected() {
        let mut config = seeded_config();
        config.colors.max_sample_width = 0;
        let image = RgbaImage::from_pixel(8, 8, Rgba([0x13, 0x47, 0x7d, 255]));

        let err = PagePipeline::new(config).dominant_colors(&image).unwrap_err();
        assert!(
            matches!(err, AppError::Core(lineart::LineArtError::InvalidInput { .. })),
            "got {err:?}"
        );
    }

    #[test]
    fn test_line_art_respects_config_width() {
        let mut config = AppConfig::default();
        config.edge.max_output_width = 16;
        let image = RgbaImage::from_pixel(64, 32, Rgba([200, 200, 200, 255]));

        let art = PagePipeline::new(config).line_art(&image).unwrap();
        assert_eq!((art.width(), art.height()), (16, 8));
    }
}
