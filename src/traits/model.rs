use crate::foundation::error::{ChartError, ChartResult};

/// One of the five fixed personality dimensions, in canonical chart order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Trait {
    /// Axis 0.
    Extraversion,
    /// Axis 1.
    Agreeableness,
    /// Axis 2.
    Conscientiousness,
    /// Axis 3.
    Neuroticism,
    /// Axis 4.
    Openness,
}

impl Trait {
    /// Number of chart axes.
    pub const COUNT: usize = 5;

    /// All traits in canonical order. Angle assignment follows this order.
    pub const ALL: [Trait; Trait::COUNT] = [
        Trait::Extraversion,
        Trait::Agreeableness,
        Trait::Conscientiousness,
        Trait::Neuroticism,
        Trait::Openness,
    ];

    /// Label used both as the input key and as the axis label.
    pub fn label(self) -> &'static str {
        match self {
            Trait::Extraversion => "Extraversion",
            Trait::Agreeableness => "Agreeableness",
            Trait::Conscientiousness => "Conscientiousness",
            Trait::Neuroticism => "Neuroticism",
            Trait::Openness => "Openness",
        }
    }

    /// Position in [`Trait::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a trait by its exact label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }

    /// Axis labels in canonical order.
    pub fn labels() -> [&'static str; Trait::COUNT] {
        Self::ALL.map(Trait::label)
    }
}

impl std::fmt::Display for Trait {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single named score.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TraitScore {
    /// Which axis.
    pub trait_: Trait,
    /// Raw value, plotted as-is.
    pub value: f64,
}

/// Exactly five finite scores in canonical trait order.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TraitVector {
    values: [f64; Trait::COUNT],
}

impl TraitVector {
    /// Build from values already in canonical order.
    pub fn new(values: [f64; Trait::COUNT]) -> ChartResult<Self> {
        for (t, v) in Trait::ALL.iter().zip(values.iter()) {
            if !v.is_finite() {
                return Err(ChartError::validation(format!(
                    "score for {t} must be finite, got {v}"
                )));
            }
        }
        Ok(Self { values })
    }

    /// Build from named scores in any order. Every trait must appear exactly once.
    pub fn from_scores(scores: &[TraitScore]) -> ChartResult<Self> {
        let mut values = [None; Trait::COUNT];
        for s in scores {
            let slot = &mut values[s.trait_.index()];
            if slot.is_some() {
                return Err(ChartError::validation(format!(
                    "duplicate score for {}",
                    s.trait_
                )));
            }
            *slot = Some(s.value);
        }

        let mut out = [0.0; Trait::COUNT];
        for (i, v) in values.into_iter().enumerate() {
            out[i] = v.ok_or_else(|| {
                ChartError::validation(format!("missing score for {}", Trait::ALL[i]))
            })?;
        }
        Self::new(out)
    }

    /// Value for one trait.
    pub fn get(&self, t: Trait) -> f64 {
        self.values[t.index()]
    }

    /// Values in canonical order.
    pub fn values(&self) -> &[f64; Trait::COUNT] {
        &self.values
    }
}

#[cfg(test)]
#[path = "../../tests/unit/traits/model.rs"]
mod tests;
