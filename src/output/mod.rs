pub mod formatter;

pub use formatter::{
    format_json, format_report, format_score, format_weights, should_use_colors, ScoreReport,
};
