use std::ops::Range;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use rust_decimal::Decimal;

/// Amount used when nothing in the text looks like money.
pub const DEFAULT_AMOUNT: Decimal = Decimal::ZERO;

/// Amounts at or above this are treated as OCR noise (phone numbers, zip codes).
const MAX_AMOUNT: i64 = 10_000;

/// A money value found in text, along with the exact text it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountMatch {
    pub value: Decimal,
    /// The currency symbol and digits as they appeared, e.g. `"$25"`.
    pub matched: String,
    /// Byte range of `matched` within the searched text.
    pub span: Range<usize>,
}

struct Patterns {
    /// `total`, `amount`, `sum`, `due`, in priority order.
    labeled: Vec<Regex>,
    /// A `$` followed by a number, anywhere.
    bare: Option<Regex>,
    /// A number with an optional `$`, as people say it out loud.
    spoken: Option<Regex>,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        // Invalid patterns compile to None and are skipped.
        let labeled = ["total", "amount", "sum", "due"]
            .iter()
            .filter_map(|label| {
                Regex::new(&format!(
                    r"(?i){label}.*?(?P<amount>\$?(?P<value>\d+(?:\.\d+)?))"
                ))
                .ok()
            })
            .collect();
        Patterns {
            labeled,
            bare: Regex::new(r"(?P<amount>\$(?P<value>\d+(?:\.\d+)?))").ok(),
            spoken: Regex::new(r"(?P<amount>\$?(?P<value>\d+(?:\.\d{2})?))").ok(),
        }
    })
}

/// Extract the most likely amount from receipt-style text.
///
/// Labeled totals are tried first, in priority order, then the last bare
/// `$` amount. Every occurrence of a label is considered, not only the
/// first: within one pattern the last in-range match is used, since
/// receipts print the total after the line items and "Subtotal" also
/// contains "total". Out-of-range matches are skipped rather than ending the
/// search for that label, so a phone number after "Amount" doesn't hide the
/// real amount.
pub fn extract_amount(text: &str) -> Option<AmountMatch> {
    let p = patterns();
    p.labeled
        .iter()
        .chain(p.bare.iter())
        .find_map(|re| last_in_range(re, text))
}

/// Extract an amount from a spoken utterance.
///
/// Runs the same label and `$` chain as receipts, so "Paid $30 for dinner
/// and $3 tip" yields the last `$` amount, 3. Only when that finds nothing
/// does it take the first plain number ("spent 25 dollars").
pub fn extract_spoken_amount(text: &str) -> Option<AmountMatch> {
    extract_amount(text).or_else(|| {
        patterns()
            .spoken
            .as_ref()
            .and_then(|re| re.captures_iter(text).find_map(|caps| to_match(&caps)))
    })
}

fn last_in_range(re: &Regex, text: &str) -> Option<AmountMatch> {
    re.captures_iter(text)
        .filter_map(|caps| to_match(&caps))
        .last()
}

fn to_match(caps: &regex::Captures<'_>) -> Option<AmountMatch> {
    let value = caps
        .name("value")
        .and_then(|m| Decimal::from_str(m.as_str()).ok())?;
    if !in_range(value) {
        return None;
    }
    let amount = caps.name("amount")?;
    Some(AmountMatch {
        value,
        matched: amount.as_str().to_string(),
        span: amount.range(),
    })
}

fn in_range(value: Decimal) -> bool {
    value > Decimal::ZERO && value < Decimal::from(MAX_AMOUNT)
}

#[cfg(test)]
#[path = "amount_tests.rs"]
mod tests;
