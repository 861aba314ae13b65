use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;

pub const RECEIPT_PLACEHOLDER: &str = "Receipt scan";
pub const VOICE_PLACEHOLDER: &str = "Voice transaction";

/// How many leading lines of a receipt may hold the merchant name.
const HEADER_LINES: usize = 3;

/// Words that carry no meaning in a spoken description.
const STOP_WORDS: &[&str] = &[
    "dollars", "dollar", "spent", "paid", "cost", "price", "for", "on", "the", "a", "an",
];

fn stop_words() -> Option<&'static Regex> {
    static STOP: OnceLock<Option<Regex>> = OnceLock::new();
    STOP.get_or_init(|| Regex::new(&format!(r"(?i)\b(?:{})\b", STOP_WORDS.join("|"))).ok())
        .as_ref()
}

/// Pick a merchant-like line from the top of a receipt.
///
/// Accepts the first of the leading non-empty lines that is 4 to 49
/// characters long and doesn't start with a digit.
pub fn receipt_description(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(HEADER_LINES)
        .find(|line| {
            let len = line.chars().count();
            len > 3 && len < 50 && !line.starts_with(|c: char| c.is_ascii_digit())
        })
        .map(str::to_string)
        .unwrap_or_else(|| RECEIPT_PLACEHOLDER.to_string())
}

/// Clean a spoken utterance into a description: cut the amount at the byte
/// range it was matched at, then drop filler words.
pub fn voice_description(text: &str, amount_span: Option<Range<usize>>) -> String {
    let without_amount = match amount_span {
        Some(span) if text.get(span.clone()).is_some() => {
            format!("{}{}", &text[..span.start], &text[span.end..])
        }
        _ => text.to_string(),
    };

    let stripped = match stop_words() {
        Some(re) => re.replace_all(&without_amount, "").into_owned(),
        None => without_amount,
    };

    let cleaned = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
    if cleaned.is_empty() {
        VOICE_PLACEHOLDER.to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
#[path = "description_tests.rs"]
mod tests;
