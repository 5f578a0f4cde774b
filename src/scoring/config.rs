use serde::{Deserialize, Serialize};

use super::components::Component;

/// Weights applied to each component when building the composite score.
///
/// Weights are used exactly as given: nothing renormalizes them if they do not
/// sum to 1. Components left out of a config file keep their default weight.
///
/// Example YAML:
/// ```yaml
/// weights:
///   program_expense_ratio: 0.4
///   fundraising_efficiency: 0.1
///   transparency: 0.1
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct WeightConfig {
    pub program_expense_ratio: f64,
    pub fundraising_efficiency: f64,
    pub revenue_sustainability: f64,
    pub net_surplus_margin: f64,
    pub executive_pay_reasonableness: f64,
    pub transparency: f64,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            program_expense_ratio: 0.30,
            fundraising_efficiency: 0.20,
            revenue_sustainability: 0.15,
            net_surplus_margin: 0.15,
            executive_pay_reasonableness: 0.10,
            transparency: 0.10,
        }
    }
}

impl WeightConfig {
    /// Weight for a single component
    pub fn weight(&self, component: Component) -> f64 {
        match component {
            Component::ProgramExpenseRatio => self.program_expense_ratio,
            Component::FundraisingEfficiency => self.fundraising_efficiency,
            Component::RevenueSustainability => self.revenue_sustainability,
            Component::NetSurplusMargin => self.net_surplus_margin,
            Component::ExecutivePayReasonableness => self.executive_pay_reasonableness,
            Component::Transparency => self.transparency,
        }
    }

    /// Return a copy with one weight replaced
    pub fn with_weight(mut self, component: Component, weight: f64) -> Self {
        match component {
            Component::ProgramExpenseRatio => self.program_expense_ratio = weight,
            Component::FundraisingEfficiency => self.fundraising_efficiency = weight,
            Component::RevenueSustainability => self.revenue_sustainability = weight,
            Component::NetSurplusMargin => self.net_surplus_margin = weight,
            Component::ExecutivePayReasonableness => self.executive_pay_reasonableness = weight,
            Component::Transparency => self.transparency = weight,
        }
        self
    }

    pub fn sum(&self) -> f64 {
        Component::ALL.iter().map(|c| self.weight(*c)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = WeightConfig::default();

        assert_eq!(weights.weight(Component::ProgramExpenseRatio), 0.30);
        assert_eq!(weights.weight(Component::FundraisingEfficiency), 0.20);
        assert_eq!(weights.weight(Component::RevenueSustainability), 0.15);
        assert_eq!(weights.weight(Component::NetSurplusMargin), 0.15);
        assert_eq!(weights.weight(Component::ExecutivePayReasonableness), 0.10);
        assert_eq!(weights.weight(Component::Transparency), 0.10);
    }

    #[test]
    fn test_default_weights_sum_to_one() {
        assert!((WeightConfig::default().sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_with_weight_leaves_original_untouched() {
        let defaults = WeightConfig::default();
        let custom = defaults.with_weight(Component::Transparency, 0.5);

        assert_eq!(custom.transparency, 0.5);
        assert_eq!(defaults.transparency, 0.10);
    }

    #[test]
    fn test_weight_config_serde_roundtrip() {
        let weights = WeightConfig::default();
        let yaml = serde_saphyr::to_string(&weights).unwrap();
        let parsed: WeightConfig = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(weights, parsed);
    }

    #[test]
    fn test_partial_weight_config_parse() {
        let yaml = r#"
program_expense_ratio: 0.5
transparency: 0.0
"#;
        let weights: WeightConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(weights.program_expense_ratio, 0.5);
        assert_eq!(weights.transparency, 0.0);
        // Unlisted components keep their defaults
        assert_eq!(weights.fundraising_efficiency, 0.20);
        assert_eq!(weights.net_surplus_margin, 0.15);
    }

    #[test]
    fn test_empty_weight_config_parse() {
        let weights: WeightConfig = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(weights, WeightConfig::default());
    }

    #[test]
    fn test_unknown_component_rejected() {
        let yaml = "overhead_ratio: 0.2\n";
        let result: Result<WeightConfig, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }
}
