use crate::foundation::error::{ChartError, ChartResult};
use crate::traits::model::{Trait, TraitScore, TraitVector};

/// Message returned to clients when any trait value is not a number.
pub const NON_NUMERIC_MESSAGE: &str = "All values must be numeric";

/// Build a [`TraitVector`] from a JSON object keyed by trait label.
///
/// Missing traits default to `0`, unknown keys are ignored, and any trait value that is not a
/// JSON number (strings, booleans, `null`, arrays, objects) is rejected.
pub fn scores_from_json(value: &serde_json::Value) -> ChartResult<TraitVector> {
    let obj = value.as_object().ok_or_else(|| {
        ChartError::validation("request body must be a JSON object of trait scores")
    })?;

    for key in obj.keys().filter(|k| Trait::from_label(k).is_none()) {
        tracing::debug!(key = %key, "ignoring unknown trait key");
    }

    let scores = Trait::ALL
        .into_iter()
        .map(|t| {
            let value = match obj.get(t.label()) {
                Some(raw) => raw
                    .as_f64()
                    .ok_or_else(|| ChartError::validation(NON_NUMERIC_MESSAGE))?,
                None => 0.0,
            };
            Ok::<_, ChartError>(TraitScore { trait_: t, value })
        })
        .collect::<ChartResult<Vec<_>>>()?;
    TraitVector::from_scores(&scores)
}

/// Parse raw request bytes and build a [`TraitVector`].
pub fn scores_from_slice(bytes: &[u8]) -> ChartResult<TraitVector> {
    let value: serde_json::Value = serde_json::from_slice(bytes)
        .map_err(|e| ChartError::validation(format!("parse trait scores JSON: {e}")))?;
    scores_from_json(&value)
}

#[cfg(test)]
#[path = "../../tests/unit/traits/input.rs"]
mod tests;
