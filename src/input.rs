use anyhow::{Context, Result};
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load an organization's financials from a JSON file.
///
/// Returns untyped JSON; [`crate::record::validate`] turns it into a record.
pub fn load_financials(path: &Path) -> Result<Value> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open financial data file at {}", path.display()))?;

    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse financial data: invalid JSON in {}", path.display()))
}
