use rust_decimal::Decimal;

use super::aggregate::aggregate;
use crate::models::{Period, Transaction};

/// Below this many transactions in total, no forecast is attempted.
pub const MIN_TRANSACTIONS_FOR_FORECAST: usize = 10;

/// Number of trailing months the forecast looks at.
pub const FORECAST_WINDOW_MONTHS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
            Self::Stable => "stable",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Forecast {
    /// Next month's expected spending. Never negative.
    pub projected_amount: Decimal,
    pub confidence: Confidence,
    pub trend: Trend,
    /// Mean of the history the forecast was built from.
    pub average: Decimal,
    /// Half the change from the oldest to the newest month.
    pub trend_amount: Decimal,
}

/// Project next month's spending from monthly expense totals, oldest first.
///
/// Returns `None` when fewer than ten transactions exist in total or there is
/// no history at all.
pub fn forecast(history: &[Decimal], total_transaction_count: usize) -> Option<Forecast> {
    if total_transaction_count < MIN_TRANSACTIONS_FOR_FORECAST {
        return None;
    }
    let (oldest, newest) = (history.first()?, history.last()?);

    let sum = history
        .iter()
        .fold(Decimal::ZERO, |acc, month| acc.saturating_add(*month));
    let average = sum / Decimal::from(history.len());
    let trend_amount = newest.saturating_sub(*oldest) / Decimal::TWO;
    let projected_amount = average.saturating_add(trend_amount).max(Decimal::ZERO);

    let confidence = if history.len() == FORECAST_WINDOW_MONTHS {
        Confidence::Medium
    } else {
        Confidence::Low
    };
    let trend = if trend_amount > Decimal::ZERO {
        Trend::Increasing
    } else if trend_amount < Decimal::ZERO {
        Trend::Decreasing
    } else {
        Trend::Stable
    };

    Some(Forecast {
        projected_amount,
        confidence,
        trend,
        average,
        trend_amount,
    })
}

/// Expense totals for the `months` periods ending with `period`, oldest first.
/// Months without transactions count as zero.
pub fn monthly_expense_history(
    transactions: &[Transaction],
    period: Period,
    months: usize,
) -> Vec<Decimal> {
    period
        .trailing(months)
        .into_iter()
        .map(|p| aggregate(transactions, p).total_expense)
        .collect()
}

#[cfg(test)]
#[path = "forecast_tests.rs"]
mod tests;
