use crate::traits::model::{Trait, TraitVector};
use std::f64::consts::TAU;

/// A vertex in polar space. `radius` is the raw trait value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PolarPoint {
    /// Radians in `[0, 2π)`, measured counter-clockwise from the positive x axis.
    pub angle: f64,
    /// Raw trait value.
    pub radius: f64,
}

/// Polygon whose last point repeats the first, so segment count equals vertex count.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ClosedPolygon {
    points: Vec<PolarPoint>,
}

impl ClosedPolygon {
    /// All points, including the closing duplicate.
    pub fn points(&self) -> &[PolarPoint] {
        &self.points
    }

    /// The distinct vertices (closing duplicate excluded).
    pub fn vertices(&self) -> &[PolarPoint] {
        &self.points[..self.points.len().saturating_sub(1)]
    }

    /// Total point count, closing duplicate included.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the polygon has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `(min, max)` radius over all vertices.
    pub fn radial_extent(&self) -> (f64, f64) {
        self.vertices()
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.radius), hi.max(p.radius))
            })
    }
}

/// Angle of axis `i` out of `n` evenly spaced axes.
pub fn axis_angle(i: usize, n: usize) -> f64 {
    (i as f64) * TAU / (n as f64)
}

/// Map scores to a closed polygon: axis `i` sits at `i * 2π / 5`, radius is the raw value.
pub fn build(scores: &TraitVector) -> ClosedPolygon {
    let mut points: Vec<PolarPoint> = scores
        .values()
        .iter()
        .enumerate()
        .map(|(i, &radius)| PolarPoint {
            angle: axis_angle(i, Trait::COUNT),
            radius,
        })
        .collect();
    points.push(points[0]);
    ClosedPolygon { points }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/polygon.rs"]
mod tests;
