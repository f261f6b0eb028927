//! Radar chart rendering for five personality traits.
//!
//! Scores for Extraversion, Agreeableness, Conscientiousness, Neuroticism and Openness are
//! mapped to a closed polygon on five evenly spaced axes, rasterized on the CPU and encoded as
//! PNG or JPEG. The pipeline is usable directly:
//!
//! - Parse scores with [`scores_from_json`] or build a [`TraitVector`]
//! - Create a [`RadarChart`] from a [`ChartStyle`] and a [`FontBook`]
//! - Call [`RadarChart::generate`] with a [`ChartSink`]
//!
//! or behind the HTTP service in [`server`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod config;
/// Image encodings and artifact sinks.
pub mod encode;
pub(crate) mod geometry;
pub(crate) mod pipeline;
pub(crate) mod render;
/// HTTP service.
pub mod server;
/// Artifact storage.
pub mod store;
pub(crate) mod traits;

pub use crate::foundation::color::Rgb8;
pub use crate::foundation::core::{BezPath, Canvas, Point};
pub use crate::foundation::error::{ChartError, ChartResult};

pub use crate::config::{ServiceConfig, Transfer};
pub use crate::encode::format::{ImageEncoding, JPEG_QUALITY, encode_frame};
pub use crate::encode::sink::{ChartArtifact, ChartSink};
pub use crate::geometry::polygon::{ClosedPolygon, PolarPoint, axis_angle, build as build_polygon};
pub use crate::geometry::scale::RadialScale;
pub use crate::pipeline::RadarChart;
pub use crate::render::backend::FrameRGBA;
pub use crate::render::cpu::ChartRenderer;
pub use crate::render::fonts::FontBook;
pub use crate::render::style::ChartStyle;
pub use crate::store::artifacts::{ArtifactStore, StoredArtifact};
pub use crate::traits::input::{NON_NUMERIC_MESSAGE, scores_from_json, scores_from_slice};
pub use crate::traits::model::{Trait, TraitScore, TraitVector};
