//! Budget limits configuration.
//!
//! Limits are read from a `category,limit` CSV. Lookup order: an explicit
//! path, then `budgets.csv` in the platform config directory, then the
//! standard limits.

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::import::parse_decimal;
use crate::models::{BudgetLimits, Category};

pub const BUDGETS_FILE_NAME: &str = "budgets.csv";

/// Location of the per-user budgets file, if the platform has a config dir.
pub fn default_budgets_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "spendsense", "SpendSense")
        .map(|dirs| dirs.config_dir().join(BUDGETS_FILE_NAME))
}

pub fn load_budget_limits(explicit: Option<&Path>) -> Result<BudgetLimits> {
    if let Some(path) = explicit {
        if !path.exists() {
            anyhow::bail!("Budgets file not found: {}", path.display());
        }
        return read_budget_limits(path);
    }

    match default_budgets_path() {
        Some(path) if path.exists() => read_budget_limits(&path),
        _ => {
            debug!("no budgets file, using standard limits");
            Ok(BudgetLimits::standard())
        }
    }
}

/// Parse a budgets CSV with a `category,limit` header row. Categories may be
/// given by id (`food`) or display name.
pub fn read_budget_limits(path: &Path) -> Result<BudgetLimits> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open budgets file: {}", path.display()))?;

    let mut entries = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let row_no = i + 1;
        let record = result.with_context(|| format!("Row {row_no}: failed to read record"))?;
        let name = record.get(0).unwrap_or("");
        let category = Category::find_by_name(name)
            .map(|c| c.id)
            .ok_or_else(|| anyhow::anyhow!("Row {row_no}: unknown category '{name}'"))?;
        if category.is_income() {
            anyhow::bail!("Row {row_no}: income cannot carry a budget limit");
        }
        let limit = parse_decimal(record.get(1).unwrap_or(""))
            .with_context(|| format!("Row {row_no}: failed to parse limit"))?;
        if limit <= Decimal::ZERO {
            anyhow::bail!("Row {row_no}: limit for {category} must be greater than 0");
        }
        entries.push((category, limit));
    }

    let limits: BudgetLimits = entries.into_iter().collect();
    if limits.is_empty() {
        warn!(path = %path.display(), "budgets file has no rows, no limits apply");
    } else {
        info!(path = %path.display(), count = limits.len(), "loaded budget limits");
    }
    Ok(limits)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
