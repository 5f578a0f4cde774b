use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

use super::components::{normalize, Component};
use super::config::WeightConfig;
use crate::record::FinancialRecord;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentScore {
    pub component: Component,
    pub raw: f64,          // Before clamping/scaling
    pub score: f64,        // Clamped to [0, 1]
    pub weight: f64,
    pub contribution: f64, // weight * score
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub composite_score: f64,
    /// One entry per component, in `Component::ALL` order
    pub breakdown: Vec<ComponentScore>,
}

impl ScoreResult {
    /// Component name -> clamped score
    pub fn components(&self) -> BTreeMap<&'static str, f64> {
        self.breakdown
            .iter()
            .map(|c| (c.component.name(), c.score))
            .collect()
    }

    pub fn component(&self, component: Component) -> Option<&ComponentScore> {
        self.breakdown.iter().find(|c| c.component == component)
    }
}

/// Score a validated record.
///
/// Each component is computed and clamped on its own, then weighted. The
/// composite is the plain weighted sum and is not clamped afterwards.
pub fn score(record: &FinancialRecord, weights: &WeightConfig) -> ScoreResult {
    let breakdown: Vec<ComponentScore> = Component::ALL
        .iter()
        .map(|&component| {
            let raw = component.raw_value(record);
            let score = normalize(component, raw);
            let weight = weights.weight(component);
            debug!(%component, raw, score, weight, "component scored");
            ComponentScore {
                component,
                raw,
                score,
                weight,
                contribution: score * weight,
            }
        })
        .collect();

    let scores: Vec<(Component, f64)> = breakdown.iter().map(|c| (c.component, c.score)).collect();
    let composite_score = composite(&scores, weights);
    debug!(composite_score, "composite computed");

    ScoreResult {
        composite_score,
        breakdown,
    }
}

/// Weighted sum of already-normalized component scores.
pub fn composite(scores: &[(Component, f64)], weights: &WeightConfig) -> f64 {
    scores
        .iter()
        .map(|(component, score)| score * weights.weight(*component))
        .sum()
}

/// Score with the default weights
pub fn score_default(record: &FinancialRecord) -> ScoreResult {
    score(record, &WeightConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> FinancialRecord {
        let policies = [("a", true), ("b", true), ("c", false), ("d", true)]
            .into_iter()
            .map(|(name, implemented)| (name.to_string(), implemented))
            .collect();

        FinancialRecord {
            organization_name: Some("Sample".to_string()),
            total_revenue: 1_000_000.0,
            total_expenses: 900_000.0,
            contributions_and_grants: 400_000.0,
            program_service_revenue: 500_000.0,
            fundraising_expenses: 100_000.0,
            program_expenses: 720_000.0,
            top_salary: 90_000.0,
            policies,
        }
    }

    /// Every component except net surplus margin (0.9) at the ceiling
    fn strong_record() -> FinancialRecord {
        FinancialRecord {
            organization_name: None,
            total_revenue: 100.0,
            total_expenses: 10.0,
            contributions_and_grants: 1_000.0,
            program_service_revenue: 100.0,
            fundraising_expenses: 1.0,
            program_expenses: 10.0,
            top_salary: 0.0,
            policies: [("audited".to_string(), true)].into_iter().collect(),
        }
    }

    fn all_ones() -> Vec<(Component, f64)> {
        Component::ALL.iter().map(|&c| (c, 1.0)).collect()
    }

    #[test]
    fn test_end_to_end_sample() {
        let result = score_default(&sample_record());
        let components = result.components();

        assert_eq!(components.len(), 6);
        assert!((components["program_expense_ratio"] - 0.8).abs() < 1e-12);
        assert!((components["fundraising_efficiency"] - 0.4).abs() < 1e-12);
        assert!((components["revenue_sustainability"] - 0.5).abs() < 1e-12);
        assert!((components["net_surplus_margin"] - 0.1).abs() < 1e-12);
        assert!((components["executive_pay_reasonableness"] - 0.9).abs() < 1e-12);
        assert!((components["transparency"] - 0.75).abs() < 1e-12);

        // 0.8*0.30 + 0.4*0.20 + 0.5*0.15 + 0.1*0.15 + 0.9*0.10 + 0.75*0.10
        let expected = 0.24 + 0.08 + 0.075 + 0.015 + 0.09 + 0.075;
        assert!((result.composite_score - expected).abs() < 1e-12);
    }

    #[test]
    fn test_breakdown_order_and_contributions() {
        let result = score_default(&sample_record());

        let order: Vec<Component> = result.breakdown.iter().map(|c| c.component).collect();
        assert_eq!(order, Component::ALL.to_vec());

        let total: f64 = result.breakdown.iter().map(|c| c.contribution).sum();
        assert_eq!(total, result.composite_score);
    }

    #[test]
    fn test_all_ones_composite_equals_weight_sum() {
        let weights = WeightConfig::default();
        let total = composite(&all_ones(), &weights);
        assert!((total - weights.sum()).abs() < 1e-12);
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_composite_matches_score() {
        let weights = WeightConfig::default();
        let result = score(&sample_record(), &weights);
        let scores: Vec<(Component, f64)> = result
            .breakdown
            .iter()
            .map(|c| (c.component, c.score))
            .collect();
        assert_eq!(composite(&scores, &weights), result.composite_score);
    }

    #[test]
    fn test_strong_record() {
        let result = score_default(&strong_record());
        for c in &result.breakdown {
            if c.component == Component::NetSurplusMargin {
                assert!((c.score - 0.9).abs() < 1e-12);
            } else {
                assert_eq!(c.score, 1.0, "{} should be 1.0", c.component);
            }
        }
        // 1.0 - 0.15 * 0.1
        assert!((result.composite_score - 0.985).abs() < 1e-12);
    }

    #[test]
    fn test_weights_not_renormalized() {
        let weights = WeightConfig {
            program_expense_ratio: 1.0,
            fundraising_efficiency: 1.0,
            revenue_sustainability: 1.0,
            net_surplus_margin: 1.0,
            executive_pay_reasonableness: 1.0,
            transparency: 1.0,
        };
        assert!((composite(&all_ones(), &weights) - 6.0).abs() < 1e-12);
        let result = score(&strong_record(), &weights);
        assert!((result.composite_score - 5.9).abs() < 1e-12);
    }

    #[test]
    fn test_negative_weight_passes_through() {
        let weights = WeightConfig::default().with_weight(Component::Transparency, -1.0);
        // 0.9 from the other five, minus 1.0 from transparency
        assert!((composite(&all_ones(), &weights) - -0.1).abs() < 1e-12);
    }

    #[test]
    fn test_zero_weights_give_zero_composite() {
        let weights = WeightConfig {
            program_expense_ratio: 0.0,
            fundraising_efficiency: 0.0,
            revenue_sustainability: 0.0,
            net_surplus_margin: 0.0,
            executive_pay_reasonableness: 0.0,
            transparency: 0.0,
        };
        let result = score(&sample_record(), &weights);
        assert_eq!(result.composite_score, 0.0);
        // Component scores are independent of weights
        assert!((result.components()["program_expense_ratio"] - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_all_zero_record() {
        let record = FinancialRecord {
            organization_name: None,
            total_revenue: 0.0,
            total_expenses: 0.0,
            contributions_and_grants: 0.0,
            program_service_revenue: 0.0,
            fundraising_expenses: 0.0,
            program_expenses: 0.0,
            top_salary: 0.0,
            policies: Default::default(),
        };
        let result = score_default(&record);
        assert_eq!(result.composite_score, 0.0);
        for c in &result.breakdown {
            assert_eq!(c.score, 0.0);
            assert_eq!(c.raw, 0.0);
        }
    }

    #[test]
    fn test_component_lookup() {
        let result = score_default(&sample_record());
        let fundraising = result.component(Component::FundraisingEfficiency).unwrap();
        assert_eq!(fundraising.raw, 4.0);
        assert!((fundraising.score - 0.4).abs() < 1e-12);
        assert_eq!(fundraising.weight, 0.20);
    }
}
