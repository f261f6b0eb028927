use super::*;
use crate::geometry::polygon::build;
use crate::traits::model::{Trait, TraitVector};
use std::f64::consts::PI;

fn renderer() -> ChartRenderer {
    ChartRenderer::new(FontBook::empty())
}

fn polygon(values: [f64; 5]) -> ClosedPolygon {
    build(&TraitVector::new(values).unwrap())
}

fn sample_inside(style: &ChartStyle, fraction: f64) -> (u32, u32) {
    let canvas = style.canvas().unwrap();
    let layout = PlotLayout::fit(canvas, style, &Trait::labels());
    // Halfway between the first two axes, away from spokes and rings.
    let p = layout.to_px(PI / 5.0, fraction);
    (p.x.round() as u32, p.y.round() as u32)
}

#[test]
fn frame_matches_figure_size() {
    let style = ChartStyle::default();
    let frame = renderer()
        .render_frame(&polygon([1.0, 2.0, 3.0, 4.0, 5.0]), &Trait::labels(), &style)
        .unwrap();
    assert_eq!((frame.width, frame.height), (500, 500));
    assert_eq!(frame.data.len(), 500 * 500 * 4);
    assert!(frame.premultiplied);
    assert_eq!(frame.pixel(0, 0), Some([255, 255, 255, 255]));
    assert_eq!(frame.pixel(500, 0), None);
}

#[test]
fn polygon_interior_is_filled_with_translucent_blue() {
    let style = ChartStyle::default();
    let frame = renderer()
        .render_frame(&polygon([5.0; 5]), &Trait::labels(), &style)
        .unwrap();
    let (x, y) = sample_inside(&style, 0.35);
    let [r, g, b, a] = frame.pixel(x, y).unwrap();
    assert_eq!(a, 255);
    assert!(b > 240, "blue channel {b}");
    assert!(r > 100 && r < 200, "red channel {r}");
    assert!(g > 100 && g < 200, "green channel {g}");
}

#[test]
fn all_zero_scores_render_without_fill() {
    let style = ChartStyle::default();
    let frame = renderer()
        .render_frame(&polygon([0.0; 5]), &Trait::labels(), &style)
        .unwrap();
    let (x, y) = sample_inside(&style, 0.35);
    let [r, g, b, _] = frame.pixel(x, y).unwrap();
    assert_eq!((r, g, b), (255, 255, 255));
}

#[test]
fn rendering_is_deterministic() {
    let style = ChartStyle::default();
    let poly = polygon([3.0, 1.0, 4.0, 1.0, 5.0]);
    let a = renderer().render_frame(&poly, &Trait::labels(), &style).unwrap();
    let b = renderer().render_frame(&poly, &Trait::labels(), &style).unwrap();
    assert_eq!(a, b);
}

#[test]
fn concurrent_renders_do_not_interfere() {
    let style = ChartStyle {
        figure_size: (2.0, 2.0),
        ..ChartStyle::default()
    };
    let shared = renderer();
    let inputs: Vec<[f64; 5]> = (0..6)
        .map(|i| [i as f64, 1.0, (6 - i) as f64, 2.0, 3.0])
        .collect();
    let sequential: Vec<FrameRGBA> = inputs
        .iter()
        .map(|v| shared.render_frame(&polygon(*v), &Trait::labels(), &style).unwrap())
        .collect();

    let parallel: Vec<FrameRGBA> = std::thread::scope(|s| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|v| {
                let shared = &shared;
                let style = &style;
                s.spawn(move || {
                    shared
                        .render_frame(&polygon(*v), &Trait::labels(), style)
                        .unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, parallel);
}

#[test]
fn label_count_must_match_vertices() {
    let err = renderer()
        .render_frame(
            &polygon([1.0; 5]),
            &["a", "b"],
            &ChartStyle::default(),
        )
        .unwrap_err();
    assert!(matches!(err, ChartError::Validation(_)));
}

#[test]
fn invalid_style_is_rejected_before_drawing() {
    let style = ChartStyle {
        fill_alpha: 2.0,
        ..ChartStyle::default()
    };
    let err = renderer()
        .render_frame(&polygon([1.0; 5]), &Trait::labels(), &style)
        .unwrap_err();
    assert!(matches!(err, ChartError::Validation(_)));
}

#[test]
fn layout_keeps_labels_inside_canvas() {
    let style = ChartStyle::default();
    let canvas = style.canvas().unwrap();
    let labels = Trait::labels();
    let layout = PlotLayout::fit(canvas, &style, &labels);
    assert!(layout.radius > 50.0);
    assert!(layout.radius < 250.0);

    for (i, text) in labels.iter().enumerate() {
        let angle = axis_angle(i, labels.len());
        let at = layout.label_anchor(angle);
        let width = estimate_width(text, layout.font_px);
        let (left, right) = match Anchor::for_angle(angle) {
            Anchor::Start => (at.x, at.x + width),
            Anchor::End => (at.x - width, at.x),
            Anchor::Middle => (at.x - width / 2.0, at.x + width / 2.0),
        };
        assert!(left >= 0.0 && right <= f64::from(canvas.width), "{text}");
        assert!(at.y - layout.font_px / 2.0 >= 0.0, "{text}");
        assert!(at.y + layout.font_px / 2.0 <= f64::from(canvas.height), "{text}");
    }
}

#[test]
fn to_px_uses_counter_clockwise_screen_angles() {
    let style = ChartStyle::default();
    let layout = PlotLayout::fit(style.canvas().unwrap(), &style, &Trait::labels());
    let right = layout.to_px(0.0, 1.0);
    assert!((right.x - (layout.center.x + layout.radius)).abs() < 1e-9);
    assert!((right.y - layout.center.y).abs() < 1e-9);
    let up = layout.to_px(PI / 2.0, 1.0);
    assert!(up.y < layout.center.y);
    assert_eq!(layout.to_px(1.0, 0.0), layout.center);
}

#[test]
fn system_font_labels_sit_at_each_axis_inside_padding() {
    let fonts = FontBook::system::<&str>(&[]);
    if fonts.face_count() == 0 {
        return;
    }
    let style = ChartStyle::default();
    let labels = Trait::labels();
    let poly = polygon([1.0, 2.0, 3.0, 4.0, 5.0]);
    let plain = renderer().render_frame(&poly, &labels, &style).unwrap();
    let labelled = ChartRenderer::new(fonts)
        .render_frame(&poly, &labels, &style)
        .unwrap();

    let (w, h) = (labelled.width, labelled.height);
    let pad = style.pt_to_px(style.padding).floor() as u32;
    let mut changed = Vec::new();
    for y in 0..h {
        for x in 0..w {
            if plain.pixel(x, y) != labelled.pixel(x, y) {
                assert!(
                    x >= pad && y >= pad && x < w - pad && y < h - pad,
                    "label pixel ({x}, {y}) inside the {pad}px padding"
                );
                changed.push((f64::from(x), f64::from(y)));
            }
        }
    }
    assert!(!changed.is_empty());

    let layout = PlotLayout::fit(style.canvas().unwrap(), &style, &labels);
    for (i, text) in labels.iter().enumerate() {
        let angle = axis_angle(i, labels.len());
        let at = layout.label_anchor(angle);
        let reach = estimate_width(text, layout.font_px) + layout.font_px;
        let near = changed.iter().any(|&(x, y)| {
            (x - at.x).abs() <= reach && (y - at.y).abs() <= layout.font_px
        });
        assert!(near, "no label pixels near the {text} axis");
    }
}
