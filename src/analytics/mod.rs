//! Spending analytics: monthly aggregates, insights, recommendations and a
//! short-horizon forecast. Everything here is a pure function of the
//! transaction list, the budget limits and a reference month.

mod aggregate;
mod forecast;
mod history;
mod insights;
mod recommend;

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::debug;

pub use aggregate::{aggregate, Aggregates};
pub use forecast::{
    forecast, monthly_expense_history, Confidence, Forecast, Trend, FORECAST_WINDOW_MONTHS,
    MIN_TRANSACTIONS_FOR_FORECAST,
};
pub use history::{budget_usage, monthly_trend, BudgetUsage, MonthlyTotals};
pub use insights::{
    generate_insights, Insight, InsightKind, CONCENTRATION_THRESHOLD_PERCENT,
    TREND_THRESHOLD_PERCENT,
};
pub use recommend::{
    generate_recommendations, Priority, Recommendation, RecommendationKind,
    ENTERTAINMENT_SPENDING_THRESHOLD, FOOD_SPENDING_THRESHOLD, SAVINGS_TARGET_PERCENT,
};

use crate::models::{BudgetLimits, CategoryId, Period, Transaction};

/// Summary of this month against last month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpendingPattern {
    pub current_month_by_category: BTreeMap<CategoryId, Decimal>,
    pub last_month_by_category: BTreeMap<CategoryId, Decimal>,
    pub total_spending: Decimal,
    pub total_income: Decimal,
    pub savings_rate: Decimal,
}

/// Everything derived from the transaction list. Replaced wholesale on
/// every recomputation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedState {
    pub period: Period,
    pub pattern: SpendingPattern,
    pub insights: Vec<Insight>,
    pub recommendations: Vec<Recommendation>,
    pub budget_usage: Vec<BudgetUsage>,
    pub forecast: Option<Forecast>,
}

/// Recompute all derived state for `period`.
pub fn recompute(transactions: &[Transaction], limits: &BudgetLimits, period: Period) -> DerivedState {
    let current = aggregate(transactions, period);
    let previous = aggregate(transactions, period.previous());
    let savings_rate = current.savings_rate();

    let insights = generate_insights(&current, &previous, limits);
    let recommendations = generate_recommendations(&current, limits, savings_rate);
    let usage = budget_usage(&current, limits);
    let history = monthly_expense_history(transactions, period, FORECAST_WINDOW_MONTHS);
    let forecast = forecast(&history, transactions.len());

    debug!(
        period = %period,
        transactions = transactions.len(),
        insights = insights.len(),
        recommendations = recommendations.len(),
        has_forecast = forecast.is_some(),
        "recomputed spending analytics"
    );

    DerivedState {
        period,
        pattern: SpendingPattern {
            total_spending: current.total_expense,
            total_income: current.total_income,
            savings_rate,
            current_month_by_category: current.by_category,
            last_month_by_category: previous.by_category,
        },
        insights,
        recommendations,
        budget_usage: usage,
        forecast,
    }
}
