use std::collections::BTreeMap;

/// One organization's financials for a single reporting period.
///
/// Built by [`validate`](super::validate). Every optional substructure of the
/// input has already been resolved to a concrete value, so scoring never has
/// to deal with missing data.
#[derive(Debug, Clone, PartialEq)]
pub struct FinancialRecord {
    /// Display-only label; does not affect the score
    pub organization_name: Option<String>,
    pub total_revenue: f64,
    pub total_expenses: f64,
    pub contributions_and_grants: f64,
    pub program_service_revenue: f64,
    pub fundraising_expenses: f64,
    /// Sum of `expenses` across the largest program entries
    pub program_expenses: f64,
    /// Largest single reported compensation (not the sum)
    pub top_salary: f64,
    /// Policy name -> implemented
    pub policies: BTreeMap<String, bool>,
}

impl FinancialRecord {
    /// Organization name for display, "Unknown" when the input had none
    pub fn display_name(&self) -> &str {
        self.organization_name.as_deref().unwrap_or("Unknown")
    }

    /// Number of policies marked as implemented
    pub fn implemented_policies(&self) -> usize {
        self.policies.values().filter(|implemented| **implemented).count()
    }
}
