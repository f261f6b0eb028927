use kurbo::Shape;

use crate::foundation::core::{BezPath, Canvas, Circle, Point};
use crate::foundation::error::{ChartError, ChartResult};
use crate::foundation::math::over_premul_in_place;
use crate::geometry::polygon::{ClosedPolygon, axis_angle};
use crate::geometry::scale::RadialScale;
use crate::render::backend::FrameRGBA;
use crate::render::fonts::FontBook;
use crate::render::labels::{
    Anchor, LabelPlacement, estimate_width, labels_svg, rasterize_labels,
};
use crate::render::style::ChartStyle;

/// Number of concentric grid rings.
const GRID_RINGS: usize = 4;
/// Grid line width in points.
const GRID_WIDTH_PT: f64 = 0.8;
/// Gap between the outer ring and a label anchor, in points.
const LABEL_GAP_PT: f64 = 6.0;
/// The plot never shrinks below this fraction of the half-canvas.
const MIN_RADIUS_FRACTION: f64 = 0.1;
const CIRCLE_TOLERANCE: f64 = 0.1;

/// Pixel-space placement of the polar plot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct PlotLayout {
    pub(crate) center: Point,
    /// Outer ring radius in pixels.
    pub(crate) radius: f64,
    /// Distance from the outer ring to label anchors.
    pub(crate) label_gap: f64,
    pub(crate) font_px: f64,
}

impl PlotLayout {
    /// Fit the plot so every label, plus padding, stays inside the canvas.
    pub(crate) fn fit(canvas: Canvas, style: &ChartStyle, labels: &[&str]) -> Self {
        let center = canvas.center();
        let half_w = center.x;
        let half_h = center.y;
        let padding = style.pt_to_px(style.padding);
        let label_gap = style.pt_to_px(LABEL_GAP_PT);
        let font_px = style.pt_to_px(style.label_font_size);

        let mut radius = half_w.min(half_h) - padding;
        for (i, label) in labels.iter().enumerate() {
            let angle = axis_angle(i, labels.len());
            let (sin, cos) = angle.sin_cos();
            let width = estimate_width(label, font_px);

            let horizontal = match Anchor::for_angle(angle) {
                Anchor::Start | Anchor::End => width,
                Anchor::Middle => 0.0,
            };
            if cos.abs() > 1e-9 {
                radius = radius.min((half_w - padding - horizontal) / cos.abs() - label_gap);
            }
            if sin.abs() > 1e-9 {
                radius = radius.min((half_h - padding - font_px / 2.0) / sin.abs() - label_gap);
            }
        }

        let floor = (half_w.min(half_h) * MIN_RADIUS_FRACTION).max(1.0);
        Self {
            center,
            radius: radius.max(floor),
            label_gap,
            font_px,
        }
    }

    /// Pixel position of a point at `angle` and `fraction` of the outer radius.
    ///
    /// Angle zero points right and angles grow counter-clockwise on screen.
    pub(crate) fn to_px(&self, angle: f64, fraction: f64) -> Point {
        let r = self.radius * fraction;
        let (sin, cos) = angle.sin_cos();
        Point::new(self.center.x + r * cos, self.center.y - r * sin)
    }

    fn label_anchor(&self, angle: f64) -> Point {
        let r = self.radius + self.label_gap;
        let (sin, cos) = angle.sin_cos();
        Point::new(self.center.x + r * cos, self.center.y - r * sin)
    }
}

/// CPU chart renderer powered by `vello_cpu` for vector rasterization.
///
/// Every call draws on its own freshly allocated render context and pixmap, so one renderer can
/// be shared across threads.
#[derive(Clone, Debug)]
pub struct ChartRenderer {
    fonts: FontBook,
}

impl ChartRenderer {
    /// Renderer that draws labels with the given fonts.
    pub fn new(fonts: FontBook) -> Self {
        Self { fonts }
    }

    /// Rasterize `polygon` with one angular label per vertex.
    #[tracing::instrument(skip(self, polygon, style), fields(points = polygon.len()))]
    pub fn render_frame(
        &self,
        polygon: &ClosedPolygon,
        labels: &[&str],
        style: &ChartStyle,
    ) -> ChartResult<FrameRGBA> {
        style.validate()?;
        if labels.len() != polygon.vertices().len() {
            return Err(ChartError::validation(format!(
                "expected {} axis labels, got {}",
                polygon.vertices().len(),
                labels.len()
            )));
        }

        let canvas = style.canvas()?;
        let layout = PlotLayout::fit(canvas, style, labels);
        let (lo, hi) = polygon.radial_extent();
        let scale = RadialScale::from_extent(lo, hi);

        let mut data = rasterize_plot(canvas, style, &layout, &scale, polygon)?;

        let placements: Vec<LabelPlacement> = polygon
            .vertices()
            .iter()
            .zip(labels)
            .map(|(p, text)| LabelPlacement {
                text: (*text).to_owned(),
                at: layout.label_anchor(p.angle),
                anchor: Anchor::for_angle(p.angle),
            })
            .collect();
        let svg = labels_svg(
            canvas,
            &placements,
            &style.font_family,
            layout.font_px,
            style.label_color,
        );
        if let Some(overlay) = rasterize_labels(&self.fonts, canvas, &svg)? {
            over_premul_in_place(&mut data, &overlay);
        }

        tracing::debug!(
            width = canvas.width,
            height = canvas.height,
            radius_px = layout.radius,
            outer = scale.outer,
            "rendered chart frame"
        );
        Ok(FrameRGBA {
            width: canvas.width,
            height: canvas.height,
            data,
            premultiplied: true,
        })
    }
}

fn rasterize_plot(
    canvas: Canvas,
    style: &ChartStyle,
    layout: &PlotLayout,
    scale: &RadialScale,
    polygon: &ClosedPolygon,
) -> ChartResult<Vec<u8>> {
    let w: u16 = canvas
        .width
        .try_into()
        .map_err(|_| ChartError::encoding("canvas width exceeds u16"))?;
    let h: u16 = canvas
        .height
        .try_into()
        .map_err(|_| ChartError::encoding("canvas height exceeds u16"))?;

    // Request-local context; dropped on every return path.
    let mut ctx = vello_cpu::RenderContext::new(w, h);

    let bg = style.background;
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(bg.r, bg.g, bg.b, 255));
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        0.0,
        0.0,
        f64::from(canvas.width),
        f64::from(canvas.height),
    ));

    let grid = style.grid_color;
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
        grid.r, grid.g, grid.b, 255,
    ));
    ctx.set_stroke(vello_cpu::kurbo::Stroke::new(style.pt_to_px(GRID_WIDTH_PT)));
    for ring in 1..=GRID_RINGS {
        let r = layout.radius * (ring as f64) / (GRID_RINGS as f64);
        let circle = Circle::new(layout.center, r).to_path(CIRCLE_TOLERANCE);
        ctx.stroke_path(&bezpath_to_cpu(&circle));
    }
    let axes = polygon.vertices().len();
    for i in 0..axes {
        let mut spoke = BezPath::new();
        spoke.move_to(layout.center);
        spoke.line_to(layout.to_px(axis_angle(i, axes), 1.0));
        ctx.stroke_path(&bezpath_to_cpu(&spoke));
    }

    let outline = polygon_path(layout, scale, polygon);
    let [r, g, b, a] = style.fill_color.with_alpha(style.fill_alpha);
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
    ctx.fill_path(&outline);

    let stroke = style.stroke_color;
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
        stroke.r, stroke.g, stroke.b, 255,
    ));
    ctx.set_stroke(vello_cpu::kurbo::Stroke::new(
        style.pt_to_px(style.stroke_width),
    ));
    ctx.stroke_path(&outline);

    ctx.flush();
    let mut pixmap = vello_cpu::Pixmap::new(w, h);
    ctx.render_to_pixmap(&mut pixmap);

    let data = pixmap.data_as_u8_slice().to_vec();
    if data.len() != canvas.rgba_len() {
        return Err(ChartError::encoding(format!(
            "raster readback size mismatch: {} bytes for {}x{}",
            data.len(),
            canvas.width,
            canvas.height
        )));
    }
    Ok(data)
}

fn polygon_path(
    layout: &PlotLayout,
    scale: &RadialScale,
    polygon: &ClosedPolygon,
) -> vello_cpu::kurbo::BezPath {
    let mut path = BezPath::new();
    for (i, p) in polygon.points().iter().enumerate() {
        let px = layout.to_px(p.angle, scale.fraction(p.radius));
        if i == 0 {
            path.move_to(px);
        } else {
            path.line_to(px);
        }
    }
    path.close_path();
    bezpath_to_cpu(&path)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
