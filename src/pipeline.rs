use crate::encode::format::{ImageEncoding, encode_frame};
use crate::encode::sink::{ChartArtifact, ChartSink};
use crate::foundation::error::ChartResult;
use crate::geometry::polygon::build;
use crate::render::backend::FrameRGBA;
use crate::render::cpu::ChartRenderer;
use crate::render::fonts::FontBook;
use crate::render::style::ChartStyle;
use crate::traits::model::{Trait, TraitVector};

/// End-to-end chart generation: scores → polygon → pixels → encoded artifact.
///
/// Cheap to clone and safe to share across threads; every call renders on its own canvas.
#[derive(Clone, Debug)]
pub struct RadarChart {
    renderer: ChartRenderer,
    style: ChartStyle,
}

impl RadarChart {
    /// Build a pipeline, validating `style` once up front.
    pub fn new(style: ChartStyle, fonts: FontBook) -> ChartResult<Self> {
        style.validate()?;
        Ok(Self {
            renderer: ChartRenderer::new(fonts),
            style,
        })
    }

    /// Render scores to raw premultiplied pixels.
    pub fn render(&self, scores: &TraitVector) -> ChartResult<FrameRGBA> {
        let polygon = build(scores);
        self.renderer
            .render_frame(&polygon, &Trait::labels(), &self.style)
    }

    /// Render, encode and deliver one chart.
    #[tracing::instrument(skip(self, scores, sink), fields(scores = ?scores.values()))]
    pub fn generate(
        &self,
        scores: &TraitVector,
        encoding: ImageEncoding,
        sink: &ChartSink,
    ) -> ChartResult<ChartArtifact> {
        let frame = self.render(scores)?;
        let bytes = encode_frame(&frame, encoding, self.style.background)?;
        let artifact = sink.deliver(bytes, encoding)?;
        tracing::debug!(
            bytes = artifact.bytes.len(),
            filename = artifact.filename.as_deref().unwrap_or("-"),
            "generated chart"
        );
        Ok(artifact)
    }
}
