/// Linear mapping from trait values to a `[0, 1]` fraction of the plot radius.
///
/// The inner bound is `0` unless some value is negative; the outer bound is the smallest
/// "nice" number (1, 2, 2.5, 5 times a power of ten) that covers the largest value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialScale {
    /// Value drawn at the center.
    pub inner: f64,
    /// Value drawn on the outer ring.
    pub outer: f64,
}

impl RadialScale {
    /// Choose a scale for values spanning `[lo, hi]`.
    pub fn from_extent(lo: f64, hi: f64) -> Self {
        let outer = if hi > 0.0 { nice_ceil(hi) } else { 0.0 };
        let inner = if lo < 0.0 { -nice_ceil(-lo) } else { 0.0 };
        if outer - inner > 0.0 {
            Self { inner, outer }
        } else {
            Self {
                inner,
                outer: inner + 1.0,
            }
        }
    }

    /// Fraction of the plot radius for value `v`, clamped to `[0, 1]`.
    ///
    /// Works on halved values so bounds near `±f64::MAX` do not overflow the span.
    pub fn fraction(&self, v: f64) -> f64 {
        let span = self.outer / 2.0 - self.inner / 2.0;
        if !span.is_finite() || span <= 0.0 {
            return 0.0;
        }
        ((v / 2.0 - self.inner / 2.0) / span).clamp(0.0, 1.0)
    }
}

pub(crate) fn nice_ceil(x: f64) -> f64 {
    if !x.is_finite() || x <= 0.0 {
        return 1.0;
    }
    let base = 10f64.powf(x.log10().floor());
    for m in [1.0, 2.0, 2.5, 5.0, 10.0] {
        let candidate = m * base;
        if candidate >= x * (1.0 - 1e-12) {
            return if candidate.is_finite() { candidate } else { x };
        }
    }
    x
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/scale.rs"]
mod tests;
