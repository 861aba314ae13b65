use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::CategoryId;

/// Monthly spending ceilings per category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetLimits {
    limits: BTreeMap<CategoryId, Decimal>,
}

impl BudgetLimits {
    pub fn new() -> Self {
        Self::default()
    }

    /// The limits a fresh install starts with.
    pub fn standard() -> Self {
        let mut limits = BTreeMap::new();
        limits.insert(CategoryId::Food, Decimal::from(500));
        limits.insert(CategoryId::Transport, Decimal::from(300));
        limits.insert(CategoryId::Entertainment, Decimal::from(200));
        limits.insert(CategoryId::Shopping, Decimal::from(400));
        limits.insert(CategoryId::Health, Decimal::from(300));
        limits.insert(CategoryId::Education, Decimal::from(500));
        limits.insert(CategoryId::Utilities, Decimal::from(200));
        limits.insert(CategoryId::Other, Decimal::from(300));
        Self { limits }
    }

    pub fn get(&self, category: CategoryId) -> Option<Decimal> {
        self.limits.get(&category).copied()
    }

    /// Callers are responsible for rejecting non-positive amounts; see
    /// `Ledger::set_budget_limit`.
    pub(crate) fn set(&mut self, category: CategoryId, amount: Decimal) {
        self.limits.insert(category, amount);
    }

    pub(crate) fn remove(&mut self, category: CategoryId) -> Option<Decimal> {
        self.limits.remove(&category)
    }

    pub fn len(&self) -> usize {
        self.limits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }
}

impl FromIterator<(CategoryId, Decimal)> for BudgetLimits {
    /// Non-positive ceilings are dropped.
    fn from_iter<I: IntoIterator<Item = (CategoryId, Decimal)>>(iter: I) -> Self {
        let limits = iter
            .into_iter()
            .filter(|(_, amount)| *amount > Decimal::ZERO)
            .collect();
        Self { limits }
    }
}
