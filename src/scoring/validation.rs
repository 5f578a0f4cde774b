use super::components::Component;
use super::config::WeightConfig;

/// How far the weight sum may drift from 1 before it is worth a warning
const SUM_TOLERANCE: f64 = 1e-9;

/// Validate weight configuration at startup.
/// Returns all validation errors at once (not just the first).
///
/// Only weights that cannot produce a number are rejected. Out-of-range
/// weights are allowed; see [`weight_warnings`].
pub fn validate_weights(weights: &WeightConfig) -> Result<(), Vec<String>> {
    let errors: Vec<String> = Component::ALL
        .iter()
        .filter_map(|&component| {
            let weight = weights.weight(component);
            (!weight.is_finite()).then(|| {
                format!("weights.{}: must be a finite number, got {}", component, weight)
            })
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Advisory notes for weights that are accepted but may push the composite
/// outside [0, 1]. Weights are never adjusted.
pub fn weight_warnings(weights: &WeightConfig) -> Vec<String> {
    let mut warnings = Vec::new();

    for component in Component::ALL {
        let weight = weights.weight(component);
        if weight.is_finite() && !(0.0..=1.0).contains(&weight) {
            warnings.push(format!(
                "weights.{}: {} is outside [0, 1]",
                component, weight
            ));
        }
    }

    let sum = weights.sum();
    if sum.is_finite() && (sum - 1.0).abs() > SUM_TOLERANCE {
        warnings.push(format!(
            "weights sum to {:.4}, not 1; composite scores will not be on a 0-1 scale",
            sum
        ));
    }

    warnings
}
