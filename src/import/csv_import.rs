use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use crate::models::{Category, CategoryId, DraftTransaction, TransactionType};

/// Column layout of a transaction export: `date,type,category,amount,description`.
#[derive(Debug, Clone)]
pub struct CsvProfile {
    pub date_column: usize,
    pub type_column: usize,
    pub category_column: usize,
    pub amount_column: usize,
    pub description_column: usize,
    pub date_format: String,
    pub has_header: bool,
}

impl Default for CsvProfile {
    fn default() -> Self {
        Self {
            date_column: 0,
            type_column: 1,
            category_column: 2,
            amount_column: 3,
            description_column: 4,
            date_format: "%Y-%m-%d".into(),
            has_header: true,
        }
    }
}

pub struct CsvImporter;

impl CsvImporter {
    /// Read all rows of a CSV file as strings.
    pub fn read_rows(path: &Path, profile: &CsvProfile) -> Result<Vec<Vec<String>>> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(profile.has_header)
            .from_path(path)
            .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;

        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result.context("Failed to read CSV record")?;
            rows.push(record.iter().map(|s| s.to_string()).collect());
        }
        Ok(rows)
    }

    /// Parse rows into drafts with explicit dates. Blank rows are skipped.
    pub fn parse(rows: &[Vec<String>], profile: &CsvProfile) -> Result<Vec<DraftTransaction>> {
        let mut drafts = Vec::new();

        for (i, row) in rows.iter().enumerate() {
            let field = |col: usize| row.get(col).map(|s| s.trim()).unwrap_or("");
            let row_no = i + 1;

            let date_str = field(profile.date_column);
            if date_str.is_empty() {
                continue;
            }
            let date = parse_date(date_str, &profile.date_format)
                .with_context(|| format!("Row {row_no}: failed to parse date '{date_str}'"))?;

            let kind = TransactionType::parse(field(profile.type_column)).ok_or_else(|| {
                anyhow::anyhow!(
                    "Row {row_no}: unknown transaction type '{}'",
                    field(profile.type_column)
                )
            })?;

            let category = match field(profile.category_column) {
                "" if kind == TransactionType::Income => CategoryId::Income,
                "" => CategoryId::Other,
                name => Category::find_by_name(name)
                    .map(|c| c.id)
                    .ok_or_else(|| anyhow::anyhow!("Row {row_no}: unknown category '{name}'"))?,
            };

            let amount = parse_decimal(field(profile.amount_column))
                .with_context(|| format!("Row {row_no}: failed to parse amount"))?
                .abs();

            drafts.push(DraftTransaction {
                kind,
                description: field(profile.description_column).to_string(),
                amount,
                category,
                date,
                date_extracted: true,
            });
        }

        Ok(drafts)
    }
}

fn parse_date(s: &str, fmt: &str) -> Result<NaiveDate> {
    // Try the specified format first
    if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
        return Ok(d);
    }
    for fallback in &["%Y-%m-%d", "%m/%d/%Y", "%m-%d-%Y", "%m/%d/%y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fallback) {
            return Ok(d);
        }
    }
    anyhow::bail!("Could not parse date: {}", s)
}

/// Parse a money string, tolerating `$`, thousands separators and
/// accounting-style parentheses.
pub(crate) fn parse_decimal(s: &str) -> Result<Decimal> {
    let cleaned = s
        .replace(['$', ','], "")
        .replace('(', "-")
        .replace(')', "")
        .trim()
        .to_string();
    if cleaned.is_empty() {
        return Ok(Decimal::ZERO);
    }
    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_str(&cleaned.replace('"', "")))
        .context(format!("Failed to parse '{}' as decimal", s))
}

#[cfg(test)]
#[path = "csv_import_tests.rs"]
mod tests;
