use serde::{Deserialize, Serialize};
use std::fmt;

use crate::record::FinancialRecord;

/// A raw contributions-to-fundraising ratio at or above this maps to a full score.
pub const FUNDRAISING_EFFICIENCY_CAP: f64 = 10.0;

/// The six sub-metrics that make up the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    ProgramExpenseRatio,
    FundraisingEfficiency,
    RevenueSustainability,
    NetSurplusMargin,
    ExecutivePayReasonableness,
    Transparency,
}

impl Component {
    /// All components in reporting order
    pub const ALL: [Component; 6] = [
        Component::ProgramExpenseRatio,
        Component::FundraisingEfficiency,
        Component::RevenueSustainability,
        Component::NetSurplusMargin,
        Component::ExecutivePayReasonableness,
        Component::Transparency,
    ];

    /// Stable snake_case name, used in config files and JSON output
    pub fn name(self) -> &'static str {
        match self {
            Component::ProgramExpenseRatio => "program_expense_ratio",
            Component::FundraisingEfficiency => "fundraising_efficiency",
            Component::RevenueSustainability => "revenue_sustainability",
            Component::NetSurplusMargin => "net_surplus_margin",
            Component::ExecutivePayReasonableness => "executive_pay_reasonableness",
            Component::Transparency => "transparency",
        }
    }

    /// Human-readable label for the text report
    pub fn label(self) -> &'static str {
        match self {
            Component::ProgramExpenseRatio => "Program expense ratio",
            Component::FundraisingEfficiency => "Fundraising efficiency",
            Component::RevenueSustainability => "Revenue sustainability",
            Component::NetSurplusMargin => "Net surplus margin",
            Component::ExecutivePayReasonableness => "Executive pay reasonableness",
            Component::Transparency => "Transparency",
        }
    }

    /// Value before clamping (and, for fundraising efficiency, before scaling).
    ///
    /// A zero denominator yields 0.
    pub fn raw_value(self, record: &FinancialRecord) -> f64 {
        match self {
            Component::ProgramExpenseRatio => {
                safe_ratio(record.program_expenses, record.total_expenses)
            }
            Component::FundraisingEfficiency => {
                safe_ratio(record.contributions_and_grants, record.fundraising_expenses)
            }
            Component::RevenueSustainability => {
                safe_ratio(record.program_service_revenue, record.total_revenue)
            }
            Component::NetSurplusMargin => safe_ratio(
                record.total_revenue - record.total_expenses,
                record.total_revenue,
            ),
            Component::ExecutivePayReasonableness => {
                if record.total_expenses == 0.0 {
                    0.0
                } else {
                    1.0 - record.top_salary / record.total_expenses
                }
            }
            Component::Transparency => safe_ratio(
                record.implemented_policies() as f64,
                record.policies.len() as f64,
            ),
        }
    }

    /// Normalized score in [0, 1]
    pub fn score(self, record: &FinancialRecord) -> f64 {
        normalize(self, self.raw_value(record))
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Map a raw component value to its [0, 1] score.
pub fn normalize(component: Component, raw: f64) -> f64 {
    match component {
        Component::FundraisingEfficiency => clamp_unit(raw / FUNDRAISING_EFFICIENCY_CAP),
        _ => clamp_unit(raw),
    }
}

/// Divide, treating a zero denominator as a zero result.
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Saturate to [0, 1]. NaN maps to 0.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
