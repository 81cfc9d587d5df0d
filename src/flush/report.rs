use crate::error::Result;
use crate::selector::{ActionSelector, DecisionRule};

/// Emit one `info` event per act with its value under the effective scale.
pub fn log_evaluations(selector: &ActionSelector) {
    for row in selector.evaluations() {
        tracing::info!(
            act = %row.act,
            value = row.value,
            negative_value = row.negative_value,
            scale = ?row.scale,
            "act evaluated"
        );
    }
}

/// Emit the winning act under `rule`.
///
/// Both rules report the winner's total value; the negative-utilitarian
/// winner additionally carries the harm figure it was chosen on.
pub fn log_best(selector: &ActionSelector, rule: DecisionRule) -> Result<()> {
    let best = selector.best(rule)?;
    match best.scale {
        Some(scale) => tracing::info!(
            rule = %rule,
            act = best.name,
            value = best.value,
            negative_value = best.negative_value,
            scale = scale.value(),
            "best act"
        ),
        None => tracing::info!(
            rule = %rule,
            act = best.name,
            value = best.value,
            negative_value = best.negative_value,
            "best act"
        ),
    }
    Ok(())
}
