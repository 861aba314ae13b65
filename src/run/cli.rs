use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::Path;

use crate::analytics::{monthly_trend, DerivedState};
use crate::clock::{Clock, FixedClock, SystemClock};
use crate::config::load_budget_limits;
use crate::extract::extract_transaction;
use crate::import::{CsvImporter, CsvProfile};
use crate::ledger::Ledger;
use crate::models::{Category, DraftTransaction, Origin, Period};
use crate::util::{format_amount, format_percent, truncate};

const TREND_MONTHS: usize = 6;

pub fn as_cli(args: &[String]) -> Result<()> {
    let Some(command) = args.get(1) else {
        print_usage();
        return Ok(());
    };
    match command.as_str() {
        "extract" | "x" => cli_extract(&args[2..]),
        "report" | "r" => cli_report(&args[2..]),
        "categories" => {
            cli_categories();
            Ok(())
        }
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("spendsense {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("SpendSense - turn spoken or scanned text into transactions and budget insights");
    println!();
    println!("Usage: spendsense [--verbose] <command>");
    println!();
    println!("Commands:");
    println!("  extract voice <text>          Extract a draft from a voice transcript");
    println!("  extract receipt <text>        Extract a draft from receipt text");
    println!("    -f <file>                   Read the text from a file instead");
    println!("  report <transactions.csv>     Print spending analytics for a month");
    println!("    --month <YYYY-MM>           Month to report on (default: current)");
    println!("    --budgets <file.csv>        Budget limits (category,limit)");
    println!("  categories                    List categories");
    println!("  --verbose, -v                 Log extraction and analytics decisions");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2).find(|w| w[0] == flag).map(|w| w[1].as_str())
}

fn cli_extract(args: &[String]) -> Result<()> {
    let origin = args
        .first()
        .and_then(|s| Origin::parse(s))
        .ok_or_else(|| anyhow::anyhow!("Usage: spendsense extract voice|receipt <text | -f file>"))?;

    let text = match flag_value(args, "-f") {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read text file: {path}"))?,
        None => args[1..].join(" "),
    };
    if text.trim().is_empty() {
        anyhow::bail!("No text to extract from");
    }

    let draft = extract_transaction(&text, origin, &SystemClock);
    print_draft(&draft);
    Ok(())
}

fn print_draft(draft: &DraftTransaction) {
    let date_note = if draft.date_extracted { "" } else { " (today)" };
    println!("Draft transaction");
    println!("{}", "─".repeat(40));
    println!("  Type:        {}", draft.kind);
    println!("  Amount:      {}", format_amount(draft.amount));
    println!("  Category:    {}", draft.category.info().name);
    println!("  Description: {}", draft.description);
    println!("  Date:        {}{date_note}", draft.date);
}

fn cli_report(args: &[String]) -> Result<()> {
    let file_path = args
        .first()
        .filter(|a| !a.starts_with('-'))
        .ok_or_else(|| {
            anyhow::anyhow!("Usage: spendsense report <transactions.csv> [--month YYYY-MM] [--budgets file]")
        })?;
    let path = Path::new(file_path);
    if !path.exists() {
        anyhow::bail!("File not found: {file_path}");
    }

    let period = match flag_value(args, "--month") {
        Some(m) => Period::parse(m).ok_or_else(|| anyhow::anyhow!("Invalid month '{m}', expected YYYY-MM"))?,
        None => Period::from_date(SystemClock.today()),
    };
    let limits = load_budget_limits(flag_value(args, "--budgets").map(Path::new))?;

    let profile = CsvProfile::default();
    let rows = CsvImporter::read_rows(path, &profile)?;
    let drafts = CsvImporter::parse(&rows, &profile)?;

    let first_day = NaiveDate::from_ymd_opt(period.year(), period.month(), 1)
        .ok_or_else(|| anyhow::anyhow!("Invalid month: {period}"))?;
    let mut ledger = Ledger::new(limits, FixedClock(first_day));
    ledger.accept_all(drafts).context("Transactions rejected")?;

    print_report(ledger.derived(), ledger.transactions().len());

    println!();
    println!("Monthly Trend:");
    for month in monthly_trend(ledger.transactions(), period, TREND_MONTHS) {
        println!(
            "  {}   in {:>12}   out {:>12}",
            month.period,
            format_amount(month.income),
            format_amount(month.expense),
        );
    }
    Ok(())
}

fn print_report(derived: &DerivedState, txn_count: usize) {
    let pattern = &derived.pattern;
    println!("SpendSense - {}", derived.period);
    println!("{}", "─".repeat(40));
    println!("  Income:       {}", format_amount(pattern.total_income));
    println!("  Expenses:     {}", format_amount(pattern.total_spending));
    println!("  Net:          {}", format_amount(pattern.total_income - pattern.total_spending));
    println!("  Savings Rate: {}", format_percent(pattern.savings_rate));
    println!("  Total Txns:   {txn_count}");

    if !pattern.current_month_by_category.is_empty() {
        println!();
        println!("Spending by Category:");
        for (category, amount) in &pattern.current_month_by_category {
            let last = pattern
                .last_month_by_category
                .get(category)
                .copied()
                .unwrap_or_default();
            println!(
                "  {:<24} {:>12}   last month {:>12}",
                category.info().name,
                format_amount(*amount),
                format_amount(last),
            );
        }
    }

    if !derived.budget_usage.is_empty() {
        println!();
        println!("Budgets:");
        for usage in &derived.budget_usage {
            let limit = usage.limit.map(format_amount).unwrap_or_else(|| "-".into());
            let flag = if usage.is_over() { "  OVER" } else { "" };
            println!(
                "  {:<24} {:>12} / {:>12}  {:>7}{flag}",
                usage.category.info().name,
                format_amount(usage.spent),
                limit,
                format_percent(usage.percent_used),
            );
        }
    }

    if !derived.insights.is_empty() {
        println!();
        println!("Insights:");
        for insight in &derived.insights {
            println!("  [{}] {}: {}", insight.kind, insight.title, insight.message);
        }
    }

    if !derived.recommendations.is_empty() {
        println!();
        println!("Recommendations:");
        for rec in &derived.recommendations {
            println!("  ({}) {}", rec.priority, truncate(&rec.message, 100));
        }
    }

    println!();
    match &derived.forecast {
        Some(f) => println!(
            "Forecast: {} next month ({} confidence, {}, avg {})",
            format_amount(f.projected_amount),
            f.confidence.as_str(),
            f.trend.as_str(),
            format_amount(f.average),
        ),
        None => println!("Forecast: not enough data"),
    }
}

fn cli_categories() {
    println!("{:<14} {:<24} {:<8} Icon", "ID", "Name", "Color");
    println!("{}", "─".repeat(55));
    for cat in Category::all() {
        println!("{:<14} {:<24} {:<8} {}", cat.id.as_str(), cat.name, cat.color, cat.icon);
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
