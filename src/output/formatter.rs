use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::IsTerminal;

use crate::record::FinancialRecord;
use crate::scoring::{ComponentScore, ScoreResult, WeightConfig};

/// Composite scores at or above this are shown in green
const STRONG_SCORE: f64 = 0.7;
/// Composite scores below this are shown in red
const WEAK_SCORE: f64 = 0.4;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a 0-1 score with three decimals
pub fn format_score(score: f64) -> String {
    format!("{:.3}", score)
}

/// A scored record ready for display or serialization
#[derive(Debug, Serialize)]
pub struct ScoreReport<'a> {
    pub organization_name: &'a str,
    pub composite_score: f64,
    pub components: BTreeMap<&'static str, f64>,
    pub breakdown: &'a [ComponentScore],
}

impl<'a> ScoreReport<'a> {
    pub fn new(record: &'a FinancialRecord, result: &'a ScoreResult) -> Self {
        Self {
            organization_name: record.display_name(),
            composite_score: result.composite_score,
            components: result.components(),
            breakdown: &result.breakdown,
        }
    }
}

/// Format a report as pretty-printed JSON
pub fn format_json(report: &ScoreReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize score report")
}

/// Format a report for the terminal.
///
/// Headline with the organization and composite score, then one row per
/// component: raw value, clamped score, weight and weighted contribution.
pub fn format_report(report: &ScoreReport, use_colors: bool) -> String {
    let score_str = format_score(report.composite_score);
    let headline = if use_colors {
        let colored = if report.composite_score >= STRONG_SCORE {
            score_str.green().bold().to_string()
        } else if report.composite_score >= WEAK_SCORE {
            score_str.yellow().bold().to_string()
        } else {
            score_str.red().bold().to_string()
        };
        format!("{}\n  AEM Score: {}", report.organization_name.bold(), colored)
    } else {
        format!("{}\n  AEM Score: {}", report.organization_name, score_str)
    };

    let header = format!(
        "  {:<30} {:>9} {:>7} {:>7} {:>13}",
        "Component", "Raw", "Score", "Weight", "Contribution"
    );

    let mut lines = vec![headline, String::new()];
    lines.push(if use_colors {
        header.dimmed().to_string()
    } else {
        header
    });

    for row in report.breakdown {
        lines.push(format!(
            "  {:<30} {:>9.4} {:>7.4} {:>7.2} {:>13.4}",
            row.component.label(),
            row.raw,
            row.score,
            row.weight,
            row.contribution
        ));
    }

    lines.join("\n")
}

/// Render weights as YAML, ready to paste under `weights:` in a config file
pub fn format_weights(weights: &WeightConfig) -> Result<String> {
    let yaml = serde_saphyr::to_string(weights).context("Failed to serialize weights")?;
    Ok(format!("{}\n# sum: {:.4}", yaml.trim_end(), weights.sum()))
}
