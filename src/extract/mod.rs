//! Turns raw text into a draft transaction.
//!
//! Every field has a fallback, so extraction can't fail: sparse or garbled
//! input yields a low-information draft (zero amount, `other`, placeholder
//! description, today's date) for the user to correct before accepting.

mod amount;
mod date;
mod description;

pub use amount::{extract_amount, extract_spoken_amount, AmountMatch, DEFAULT_AMOUNT};
pub use date::extract_date;
pub use description::{receipt_description, voice_description, RECEIPT_PLACEHOLDER, VOICE_PLACEHOLDER};

use tracing::debug;

use crate::categorize::Categorizer;
use crate::clock::Clock;
use crate::models::{CategoryId, DraftTransaction, Origin, TransactionType};

/// Spoken words that mark money coming in.
const INCOME_WORDS: &[&str] = &["income", "earned", "salary", "payment"];

/// Build a draft transaction from raw text.
pub fn extract_transaction(raw: &str, origin: Origin, clock: &dyn Clock) -> DraftTransaction {
    let amount = match origin {
        Origin::Utterance => extract_spoken_amount(raw),
        Origin::Document => extract_amount(raw),
    };

    let (date, date_extracted) = match extract_date(raw) {
        Some(d) => (d, true),
        None => (clock.today(), false),
    };

    let kind = match origin {
        Origin::Utterance if is_income(raw) => TransactionType::Income,
        _ => TransactionType::Expense,
    };

    let category = match kind {
        TransactionType::Income => CategoryId::Income,
        TransactionType::Expense => Categorizer::for_origin(origin).categorize_or_default(raw),
    };

    let description = match origin {
        Origin::Utterance => voice_description(raw, amount.as_ref().map(|a| a.span.clone())),
        Origin::Document => receipt_description(raw),
    };

    let draft = DraftTransaction {
        kind,
        description,
        amount: amount.map(|a| a.value).unwrap_or(DEFAULT_AMOUNT),
        category,
        date,
        date_extracted,
    };
    debug!(
        ?origin,
        kind = %draft.kind,
        amount = %draft.amount,
        category = %draft.category,
        date = %draft.date,
        date_extracted,
        "extracted draft transaction"
    );
    draft
}

fn is_income(text: &str) -> bool {
    let lower = text.to_lowercase();
    INCOME_WORDS.iter().any(|w| lower.contains(w))
}

#[cfg(test)]
mod tests;
