use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::CategoryId;

/// Identity assigned when a draft is accepted into a ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransactionId(pub u64);

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" | "credit" => Some(Self::Income),
            "expense" | "debit" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where a piece of raw text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// A spoken utterance transcribed to text.
    Utterance,
    /// Text recovered from a photographed receipt.
    Document,
}

impl Origin {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "voice" | "utterance" | "speech" => Some(Self::Utterance),
            "receipt" | "document" | "ocr" => Some(Self::Document),
            _ => None,
        }
    }
}

/// Amounts are always non-negative; `kind` carries the direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub id: TransactionId,
    pub kind: TransactionType,
    pub description: String,
    pub amount: Decimal,
    pub category: CategoryId,
    pub date: NaiveDate,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Amount with the direction applied: income positive, expense negative.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}

/// An extracted transaction awaiting confirmation. Every field is filled,
/// falling back to defaults when the text didn't say.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftTransaction {
    pub kind: TransactionType,
    pub description: String,
    pub amount: Decimal,
    pub category: CategoryId,
    pub date: NaiveDate,
    /// True when `date` was read from the text rather than defaulted to today.
    pub date_extracted: bool,
}

impl DraftTransaction {
    /// Turn the draft into a transaction. An extracted date wins over the
    /// acceptance date.
    pub fn accept(self, id: TransactionId, accepted_on: NaiveDate) -> Transaction {
        let date = if self.date_extracted {
            self.date
        } else {
            accepted_on
        };
        Transaction {
            id,
            kind: self.kind,
            description: self.description,
            amount: self.amount,
            category: self.category,
            date,
        }
    }
}

/// Field replacements for an existing transaction. `None` leaves the field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionEdit {
    pub kind: Option<TransactionType>,
    pub description: Option<String>,
    pub amount: Option<Decimal>,
    pub category: Option<CategoryId>,
    pub date: Option<NaiveDate>,
}

impl TransactionEdit {
    pub(crate) fn apply_to(self, txn: &Transaction) -> Transaction {
        Transaction {
            id: txn.id,
            kind: self.kind.unwrap_or(txn.kind),
            description: self.description.unwrap_or_else(|| txn.description.clone()),
            amount: self.amount.unwrap_or(txn.amount),
            category: self.category.unwrap_or(txn.category),
            date: self.date.unwrap_or(txn.date),
        }
    }
}
