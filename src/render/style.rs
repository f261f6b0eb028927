use crate::foundation::color::Rgb8;
use crate::foundation::core::Canvas;
use crate::foundation::error::{ChartError, ChartResult};
use serde::{Deserialize, Serialize};

const POINTS_PER_INCH: f64 = 72.0;

/// Chart appearance. Lengths are in typographic points, the figure size in inches.
///
/// Defaults reproduce a 5x5 inch figure at 100 dpi with a translucent blue polygon.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartStyle {
    /// `(width, height)` in inches.
    pub figure_size: (f64, f64),
    /// Pixels per inch.
    pub dpi: f64,
    /// Polygon fill color.
    pub fill_color: Rgb8,
    /// Polygon fill opacity in `[0, 1]`.
    pub fill_alpha: f64,
    /// Polygon outline color.
    pub stroke_color: Rgb8,
    /// Polygon outline width in points.
    pub stroke_width: f64,
    /// Axis label size in points.
    pub label_font_size: f64,
    /// Margin between the labels and the canvas edge, in points.
    pub padding: f64,
    /// Canvas background. Also used to flatten alpha for JPEG output.
    pub background: Rgb8,
    /// Grid ring and spoke color.
    pub grid_color: Rgb8,
    /// Axis label color.
    pub label_color: Rgb8,
    /// Preferred label font family; generic `sans-serif` is always appended as fallback.
    pub font_family: String,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            figure_size: (5.0, 5.0),
            dpi: 100.0,
            fill_color: Rgb8::BLUE,
            fill_alpha: 0.4,
            stroke_color: Rgb8::BLUE,
            stroke_width: 2.0,
            label_font_size: 10.0,
            padding: 8.0,
            background: Rgb8::WHITE,
            grid_color: Rgb8::LIGHT_GRAY,
            label_color: Rgb8::BLACK,
            font_family: "DejaVu Sans".to_owned(),
        }
    }
}

impl ChartStyle {
    /// Check every numeric option is in range.
    pub fn validate(&self) -> ChartResult<()> {
        fn positive(name: &str, v: f64) -> ChartResult<()> {
            if !v.is_finite() || v <= 0.0 {
                return Err(ChartError::validation(format!(
                    "{name} must be finite and > 0, got {v}"
                )));
            }
            Ok(())
        }

        positive("figure_size.width", self.figure_size.0)?;
        positive("figure_size.height", self.figure_size.1)?;
        positive("dpi", self.dpi)?;
        positive("stroke_width", self.stroke_width)?;
        positive("label_font_size", self.label_font_size)?;
        if !(0.0..=1.0).contains(&self.fill_alpha) {
            return Err(ChartError::validation(format!(
                "fill_alpha must be within [0, 1], got {}",
                self.fill_alpha
            )));
        }
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(ChartError::validation(format!(
                "padding must be finite and >= 0, got {}",
                self.padding
            )));
        }
        self.canvas().map(|_| ())
    }

    /// Pixel canvas for `figure_size * dpi`.
    pub fn canvas(&self) -> ChartResult<Canvas> {
        let w = (self.figure_size.0 * self.dpi).round();
        let h = (self.figure_size.1 * self.dpi).round();
        if !(w >= 1.0 && h >= 1.0) {
            return Err(ChartError::validation(format!(
                "figure_size * dpi must be at least 1x1 pixels, got {w}x{h}"
            )));
        }
        if w > f64::from(Canvas::MAX_DIM) || h > f64::from(Canvas::MAX_DIM) {
            return Err(ChartError::validation(format!(
                "figure_size * dpi too large: {w}x{h} (max {0}x{0})",
                Canvas::MAX_DIM
            )));
        }
        Canvas::new(w as u32, h as u32)
    }

    /// Convert a length in points to pixels at this style's dpi.
    pub fn pt_to_px(&self, pt: f64) -> f64 {
        pt * self.dpi / POINTS_PER_INCH
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/style.rs"]
mod tests;
