//! Altruistic Effectiveness Metric (AEM) scoring for nonprofits.
//!
//! [`record::validate`] turns Form 990 derived JSON into a [`FinancialRecord`],
//! and [`scoring::score`] reduces it to a weighted composite in [0, 1] along
//! with the six component scores.

pub mod config;
pub mod input;
pub mod output;
pub mod record;
pub mod scoring;
pub mod telemetry;

pub use record::{validate, FinancialRecord, ValidationError};
pub use scoring::{score, score_default, Component, ScoreResult, WeightConfig};
