//! In-memory transaction collection with its derived analytics.
//!
//! Every mutation is followed by a full, synchronous recomputation, so the
//! derived state a caller reads always matches the current transactions and
//! budget limits.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, info};

use crate::analytics::{recompute, DerivedState};
use crate::clock::Clock;
use crate::models::{
    BudgetLimits, CategoryId, DraftTransaction, Period, Transaction, TransactionEdit, TransactionId,
};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Amount must be greater than 0 (got {0})")]
    InvalidAmount(Decimal),

    #[error("Amount must be below {} (got {0})", MAX_TRANSACTION_AMOUNT)]
    AmountTooLarge(Decimal),

    #[error("Description is required")]
    EmptyDescription,

    #[error("Transaction not found: {0}")]
    NotFound(TransactionId),

    #[error("Budget limit for {0} must be greater than 0 (got {1})")]
    InvalidBudgetLimit(CategoryId, Decimal),

    /// A draft in a batch failed validation. `row` is 1-based.
    #[error("Row {row}: {source}")]
    BatchRejected {
        row: usize,
        source: Box<LedgerError>,
    },
}

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Upper bound on a single transaction. Keeps running totals far from
/// `Decimal::MAX`.
pub const MAX_TRANSACTION_AMOUNT: i64 = 1_000_000_000;

pub struct Ledger<C: Clock> {
    transactions: Vec<Transaction>,
    limits: BudgetLimits,
    clock: C,
    next_id: u64,
    derived: DerivedState,
}

impl<C: Clock> Ledger<C> {
    pub fn new(limits: BudgetLimits, clock: C) -> Self {
        let derived = recompute(&[], &limits, Period::from_date(clock.today()));
        Self {
            transactions: Vec::new(),
            limits,
            clock,
            next_id: 1,
            derived,
        }
    }

    // ── Mutations ─────────────────────────────────────────────

    /// Accept a confirmed draft. The draft's extracted date is kept; a
    /// defaulted one is replaced by today.
    pub fn accept(&mut self, draft: DraftTransaction) -> Result<TransactionId> {
        validate(draft.amount, &draft.description)?;
        let id = TransactionId(self.next_id);
        self.next_id += 1;
        let txn = draft.accept(id, self.clock.today());
        info!(id = %id, kind = %txn.kind, amount = %txn.amount, category = %txn.category, "transaction added");
        self.transactions.push(txn);
        self.refresh();
        Ok(id)
    }

    /// Accept a batch of drafts with a single recomputation. Nothing is
    /// added unless every draft is valid.
    pub fn accept_all(&mut self, drafts: Vec<DraftTransaction>) -> Result<Vec<TransactionId>> {
        for (i, draft) in drafts.iter().enumerate() {
            validate(draft.amount, &draft.description).map_err(|e| LedgerError::BatchRejected {
                row: i + 1,
                source: Box::new(e),
            })?;
        }

        let today = self.clock.today();
        let mut ids = Vec::with_capacity(drafts.len());
        for draft in drafts {
            let id = TransactionId(self.next_id);
            self.next_id += 1;
            self.transactions.push(draft.accept(id, today));
            ids.push(id);
        }
        info!(count = ids.len(), "transactions added");
        self.refresh();
        Ok(ids)
    }

    pub fn update(&mut self, id: TransactionId, edit: TransactionEdit) -> Result<()> {
        let pos = self.position(id)?;
        let updated = edit.apply_to(&self.transactions[pos]);
        validate(updated.amount, &updated.description)?;
        self.transactions[pos] = updated;
        info!(id = %id, "transaction updated");
        self.refresh();
        Ok(())
    }

    pub fn delete(&mut self, id: TransactionId) -> Result<Transaction> {
        let pos = self.position(id)?;
        let removed = self.transactions.remove(pos);
        info!(id = %id, "transaction deleted");
        self.refresh();
        Ok(removed)
    }

    pub fn set_budget_limit(&mut self, category: CategoryId, amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidBudgetLimit(category, amount));
        }
        self.limits.set(category, amount);
        info!(category = %category, limit = %amount, "budget limit set");
        self.refresh();
        Ok(())
    }

    pub fn remove_budget_limit(&mut self, category: CategoryId) -> Option<Decimal> {
        let removed = self.limits.remove(category);
        if removed.is_some() {
            info!(category = %category, "budget limit removed");
            self.refresh();
        }
        removed
    }

    /// Re-derive analytics, e.g. after the clock has moved into a new month.
    pub fn refresh(&mut self) {
        let period = Period::from_date(self.clock.today());
        self.derived = recompute(&self.transactions, &self.limits, period);
        debug!(period = %period, count = self.transactions.len(), "ledger refreshed");
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn budget_limits(&self) -> &BudgetLimits {
        &self.limits
    }

    pub fn derived(&self) -> &DerivedState {
        &self.derived
    }

    pub fn by_category(&self, category: CategoryId) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter().filter(move |t| t.category == category)
    }

    pub fn in_period(&self, period: Period) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter().filter(move |t| period.contains(t.date))
    }

    pub fn total_income(&self) -> Decimal {
        self.transactions
            .iter()
            .filter(|t| t.is_income())
            .fold(Decimal::ZERO, |acc, t| acc.saturating_add(t.amount))
    }

    pub fn total_expenses(&self) -> Decimal {
        self.transactions
            .iter()
            .filter(|t| t.is_expense())
            .fold(Decimal::ZERO, |acc, t| acc.saturating_add(t.amount))
    }

    pub fn balance(&self) -> Decimal {
        self.transactions
            .iter()
            .fold(Decimal::ZERO, |acc, t| acc.saturating_add(t.signed_amount()))
    }

    fn position(&self, id: TransactionId) -> Result<usize> {
        self.transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or(LedgerError::NotFound(id))
    }
}

fn validate(amount: Decimal, description: &str) -> Result<()> {
    if amount <= Decimal::ZERO {
        return Err(LedgerError::InvalidAmount(amount));
    }
    if amount >= Decimal::from(MAX_TRANSACTION_AMOUNT) {
        return Err(LedgerError::AmountTooLarge(amount));
    }
    if description.trim().is_empty() {
        return Err(LedgerError::EmptyDescription);
    }
    Ok(())
}
