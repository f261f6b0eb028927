use std::fmt::Write as _;

use crate::foundation::color::Rgb8;
use crate::foundation::core::{Canvas, Point};
use crate::foundation::error::{ChartError, ChartResult};
use crate::render::fonts::FontBook;

/// Rough advance width of one glyph, as a fraction of the font size.
pub(crate) const GLYPH_WIDTH_EM: f64 = 0.6;

/// Horizontal anchoring of a label relative to its anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    /// Labels on the right of the chart grow rightwards, on the left leftwards.
    pub(crate) fn for_angle(angle: f64) -> Self {
        let c = angle.cos();
        if c > 0.1 {
            Anchor::Start
        } else if c < -0.1 {
            Anchor::End
        } else {
            Anchor::Middle
        }
    }

    fn as_svg(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

/// One axis label, vertically centered on `at`.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct LabelPlacement {
    pub(crate) text: String,
    pub(crate) at: Point,
    pub(crate) anchor: Anchor,
}

/// Estimated rendered width of `text` at `font_px`.
pub(crate) fn estimate_width(text: &str, font_px: f64) -> f64 {
    text.chars().count() as f64 * font_px * GLYPH_WIDTH_EM
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Build a transparent SVG overlay holding only the axis labels.
pub(crate) fn labels_svg(
    canvas: Canvas,
    labels: &[LabelPlacement],
    font_family: &str,
    font_px: f64,
    color: Rgb8,
) -> String {
    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = canvas.width,
        h = canvas.height
    );
    let _ = write!(
        svg,
        r#"<g font-family="'{}', sans-serif" font-size="{font_px:.2}" fill="{}">"#,
        escape_xml(font_family),
        color.to_hex()
    );
    // Baseline sits ~0.35em below the visual center of Latin glyphs.
    let baseline_shift = 0.35 * font_px;
    for label in labels {
        let _ = write!(
            svg,
            r#"<text x="{:.2}" y="{:.2}" text-anchor="{}">{}</text>"#,
            label.at.x,
            label.at.y + baseline_shift,
            label.anchor.as_svg(),
            escape_xml(&label.text)
        );
    }
    svg.push_str("</g></svg>");
    svg
}

/// Rasterize the label overlay into premultiplied RGBA8 of exactly `canvas` size.
///
/// Returns `None` when the font book is empty.
pub(crate) fn rasterize_labels(
    fonts: &FontBook,
    canvas: Canvas,
    svg: &str,
) -> ChartResult<Option<Vec<u8>>> {
    if fonts.face_count() == 0 {
        return Ok(None);
    }

    let mut opts = usvg::Options::default();
    opts.fontdb = fonts.database();
    let tree = usvg::Tree::from_str(svg, &opts)
        .map_err(|e| ChartError::encoding(format!("parse label overlay svg: {e}")))?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(canvas.width, canvas.height)
        .ok_or_else(|| ChartError::encoding("failed to allocate label pixmap"))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::default(),
        &mut pixmap.as_mut(),
    );
    Ok(Some(pixmap.data().to_vec()))
}

#[cfg(test)]
#[path = "../../tests/unit/render/labels.rs"]
mod tests;
