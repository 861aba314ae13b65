use rust_decimal::Decimal;

use super::aggregate::{percent_of, round1, Aggregates};
use crate::models::{BudgetLimits, CategoryId};

/// Month-over-month change (percent) beyond which a trend is reported.
pub const TREND_THRESHOLD_PERCENT: i64 = 20;

/// Share of monthly spending (percent) above which one category is flagged.
pub const CONCENTRATION_THRESHOLD_PERCENT: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightKind {
    Warning,
    Info,
    Success,
}

impl InsightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Success => "success",
        }
    }
}

impl std::fmt::Display for InsightKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insight {
    pub kind: InsightKind,
    pub title: String,
    pub message: String,
    pub related_category: Option<CategoryId>,
    /// The percentage quoted in the message, rounded to one decimal.
    pub numeric_context: Option<Decimal>,
}

/// Compare this month's spending against budgets, last month and itself.
///
/// Output order is fixed: overspend warnings, then trend insights, then
/// concentration warnings, each in category declaration order.
pub fn generate_insights(
    current: &Aggregates,
    previous: &Aggregates,
    limits: &BudgetLimits,
) -> Vec<Insight> {
    let mut insights = Vec::new();
    insights.extend(overspend_warnings(current, limits));
    insights.extend(trend_insights(current, previous));
    insights.extend(concentration_warnings(current));
    insights
}

fn overspend_warnings<'a>(
    current: &'a Aggregates,
    limits: &'a BudgetLimits,
) -> impl Iterator<Item = Insight> + 'a {
    current.by_category.iter().filter_map(|(&category, &spent)| {
        let limit = limits.get(category)?;
        if spent <= limit {
            return None;
        }
        let over = round1(percent_of(spent - limit, limit));
        Some(Insight {
            kind: InsightKind::Warning,
            title: "Budget Overspending".into(),
            message: format!("You've exceeded your {category} budget by {over:.1}%"),
            related_category: Some(category),
            numeric_context: Some(over),
        })
    })
}

fn trend_insights<'a>(
    current: &'a Aggregates,
    previous: &'a Aggregates,
) -> impl Iterator<Item = Insight> + 'a {
    let threshold = Decimal::from(TREND_THRESHOLD_PERCENT);
    current.by_category.iter().filter_map(move |(&category, &spent)| {
        let last = previous.spent(category);
        let change = percent_of(spent - last, last);
        let shown = round1(change.abs());
        if change > threshold {
            Some(Insight {
                kind: InsightKind::Info,
                title: "Spending Increase".into(),
                message: format!(
                    "{category} spending increased by {shown:.1}% compared to last month"
                ),
                related_category: Some(category),
                numeric_context: Some(round1(change)),
            })
        } else if change < -threshold {
            Some(Insight {
                kind: InsightKind::Success,
                title: "Spending Decrease".into(),
                message: format!(
                    "{category} spending decreased by {shown:.1}% compared to last month"
                ),
                related_category: Some(category),
                numeric_context: Some(round1(change)),
            })
        } else {
            None
        }
    })
}

fn concentration_warnings(current: &Aggregates) -> impl Iterator<Item = Insight> + '_ {
    let threshold = Decimal::from(CONCENTRATION_THRESHOLD_PERCENT);
    current.by_category.iter().filter_map(move |(&category, &spent)| {
        let share = round1(percent_of(spent, current.total_expense));
        (share > threshold).then(|| Insight {
            kind: InsightKind::Warning,
            title: "High Category Spending".into(),
            message: format!(
                "{category} accounts for {share:.1}% of your total spending this month"
            ),
            related_category: Some(category),
            numeric_context: Some(share),
        })
    })
}

#[cfg(test)]
#[path = "insights_tests.rs"]
mod tests;
