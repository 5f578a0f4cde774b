use serde::{Deserialize, Serialize};

use crate::scoring::WeightConfig;

#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Component weights; defaults apply when omitted
    #[serde(default)]
    pub weights: Option<WeightConfig>,
    /// Log filter used when RUST_LOG is unset (e.g. "warn", "aem=debug")
    #[serde(default)]
    pub log_level: Option<String>,
}
