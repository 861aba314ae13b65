mod budget;
mod category;
mod period;
mod transaction;

pub use budget::BudgetLimits;
pub use category::{Category, CategoryId};
pub use period::Period;
pub use transaction::{DraftTransaction, Origin, Transaction, TransactionEdit, TransactionId, TransactionType};

#[cfg(test)]
mod tests;
