use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

/// Which number in a match holds which date part.
#[derive(Clone, Copy)]
enum Layout {
    MonthDayYear,
    YearMonthDay,
}

fn patterns() -> &'static [(Regex, Layout)] {
    static PATTERNS: OnceLock<Vec<(Regex, Layout)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            (r"\b(\d{1,2})/(\d{1,2})/(\d{2,4})\b", Layout::MonthDayYear),
            (r"\b(\d{1,2})-(\d{1,2})-(\d{2,4})\b", Layout::MonthDayYear),
            (r"\b(\d{4})-(\d{1,2})-(\d{1,2})\b", Layout::YearMonthDay),
        ]
        .into_iter()
        .filter_map(|(pattern, layout)| Regex::new(pattern).ok().map(|re| (re, layout)))
        .collect()
    })
}

/// Find a calendar date in `text`.
///
/// Slash and dash dates are read month-first (`03/15/24` is 15 March 2024),
/// so a day-first date like `15/03/24` fails month validation.
///
/// Patterns are tried in order (slash, dash, ISO) and only the first match of
/// each is considered. A match that doesn't form a real date is skipped in
/// favour of the next pattern, even if a later match of the same pattern
/// would have been valid.
pub fn extract_date(text: &str) -> Option<NaiveDate> {
    patterns().iter().find_map(|(re, layout)| {
        let caps = re.captures(text)?;
        let nums: Vec<u32> = (1..=3)
            .filter_map(|i| caps.get(i)?.as_str().parse().ok())
            .collect();
        let &[a, b, c] = nums.as_slice() else {
            return None;
        };
        let (year, month, day) = match layout {
            Layout::MonthDayYear => (c, a, b),
            Layout::YearMonthDay => (a, b, c),
        };
        validate(year, month, day)
    })
}

fn validate(year: u32, month: u32, day: u32) -> Option<NaiveDate> {
    let year = if year < 100 { year + 2000 } else { year };
    // Month is checked zero-based, the way calendar widgets store it.
    let month0 = month.checked_sub(1)?;
    if month0 > 11 || !(1..=31).contains(&day) {
        return None;
    }
    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month0 + 1, day)
}

#[cfg(test)]
#[path = "date_tests.rs"]
mod tests;
