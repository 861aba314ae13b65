use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{CategoryId, Period, Transaction, TransactionType};

/// Per-month totals. Amounts are positive; income and expense are kept apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregates {
    pub period: Period,
    /// Expense totals per category. Categories with no spending are absent.
    pub by_category: BTreeMap<CategoryId, Decimal>,
    pub total_income: Decimal,
    pub total_expense: Decimal,
}

impl Aggregates {
    pub fn empty(period: Period) -> Self {
        Self {
            period,
            by_category: BTreeMap::new(),
            total_income: Decimal::ZERO,
            total_expense: Decimal::ZERO,
        }
    }

    pub fn spent(&self, category: CategoryId) -> Decimal {
        self.by_category
            .get(&category)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    pub fn balance(&self) -> Decimal {
        self.total_income.saturating_sub(self.total_expense)
    }

    /// Share of income not spent, as a percentage. `0` with no income.
    pub fn savings_rate(&self) -> Decimal {
        percent_of(self.balance(), self.total_income)
    }
}

/// Sum the transactions dated within `period`. Sums saturate at
/// `Decimal::MAX` instead of overflowing.
pub fn aggregate(transactions: &[Transaction], period: Period) -> Aggregates {
    transactions
        .iter()
        .filter(|t| period.contains(t.date))
        .fold(Aggregates::empty(period), |mut agg, t| {
            match t.kind {
                TransactionType::Income => {
                    agg.total_income = agg.total_income.saturating_add(t.amount);
                }
                TransactionType::Expense => {
                    agg.total_expense = agg.total_expense.saturating_add(t.amount);
                    let spent = agg.by_category.entry(t.category).or_insert(Decimal::ZERO);
                    *spent = spent.saturating_add(t.amount);
                }
            }
            agg
        })
}

/// `part / whole * 100`, or `0` when `whole` is zero.
pub(crate) fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::ZERO)
}

/// Round half away from zero to one decimal place, for display.
pub(crate) fn round1(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}
