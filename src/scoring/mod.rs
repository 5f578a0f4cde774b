pub mod components;
pub mod config;
pub mod engine;
pub mod validation;

pub use components::{clamp_unit, safe_ratio, Component};
pub use config::WeightConfig;
pub use engine::{composite, score, score_default, ComponentScore, ScoreResult};
pub use validation::{validate_weights, weight_warnings};
