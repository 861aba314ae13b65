use rust_decimal::Decimal;

use super::aggregate::{aggregate, percent_of, Aggregates};
use crate::models::{BudgetLimits, CategoryId, Period, Transaction};

/// Spending against the budget for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetUsage {
    pub category: CategoryId,
    pub spent: Decimal,
    pub limit: Option<Decimal>,
    /// `spent / limit * 100`, or `0` without a limit.
    pub percent_used: Decimal,
}

impl BudgetUsage {
    pub fn is_over(&self) -> bool {
        self.limit.is_some_and(|limit| self.spent > limit)
    }
}

/// Budget usage for every expense category with spending this period.
pub fn budget_usage(current: &Aggregates, limits: &BudgetLimits) -> Vec<BudgetUsage> {
    CategoryId::expense_categories()
        .filter_map(|category| {
            let spent = current.spent(category);
            if spent <= Decimal::ZERO {
                return None;
            }
            let limit = limits.get(category);
            Some(BudgetUsage {
                category,
                spent,
                limit,
                percent_used: limit.map_or(Decimal::ZERO, |l| percent_of(spent, l)),
            })
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyTotals {
    pub period: Period,
    pub income: Decimal,
    pub expense: Decimal,
}

/// Income and expense per month for the `months` periods ending with
/// `period`, oldest first.
pub fn monthly_trend(transactions: &[Transaction], period: Period, months: usize) -> Vec<MonthlyTotals> {
    period
        .trailing(months)
        .into_iter()
        .map(|p| {
            let agg = aggregate(transactions, p);
            MonthlyTotals {
                period: p,
                income: agg.total_income,
                expense: agg.total_expense,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
