#![allow(clippy::unwrap_used)]

use super::*;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_slash_date_two_digit_year() {
    assert_eq!(extract_date("03/15/24"), Some(ymd(2024, 3, 15)));
}

#[test]
fn test_slash_date_four_digit_year() {
    assert_eq!(extract_date("Date: 3/5/2023 12:41"), Some(ymd(2023, 3, 5)));
}

#[test]
fn test_dash_date() {
    assert_eq!(extract_date("12-25-23"), Some(ymd(2023, 12, 25)));
}

#[test]
fn test_iso_date() {
    assert_eq!(extract_date("2024-03-15"), Some(ymd(2024, 3, 15)));
}

#[test]
fn test_iso_date_not_read_as_dash_date() {
    assert_eq!(extract_date("Printed 2024-01-02 10:00"), Some(ymd(2024, 1, 2)));
}

#[test]
fn test_invalid_month_and_day() {
    assert_eq!(extract_date("13/40/24"), None);
}

#[test]
fn test_impossible_calendar_day() {
    assert_eq!(extract_date("02/30/24"), None);
}

#[test]
fn test_slash_pattern_has_priority() {
    assert_eq!(extract_date("03/15/24 printed 2024-01-02"), Some(ymd(2024, 3, 15)));
}

#[test]
fn test_invalid_match_falls_through_to_next_pattern() {
    assert_eq!(extract_date("13/40/24 and 2024-01-02"), Some(ymd(2024, 1, 2)));
}

#[test]
fn test_only_first_match_of_each_pattern_is_considered() {
    assert_eq!(extract_date("13/40/24 then 01/02/24"), None);
}

#[test]
fn test_phone_number_is_not_a_date() {
    assert_eq!(extract_date("Store #12 Tel 555-1234"), None);
}

#[test]
fn test_no_date() {
    assert_eq!(extract_date(""), None);
    assert_eq!(extract_date("lunch with Sam"), None);
}

#[test]
fn test_validate_bounds() {
    assert_eq!(validate(24, 0, 10), None);
    assert_eq!(validate(24, 12, 0), None);
    assert_eq!(validate(24, 12, 31), Some(ymd(2024, 12, 31)));
    assert_eq!(validate(1999, 1, 1), Some(ymd(1999, 1, 1)));
}

#[test]
fn test_slash_and_dash_dates_are_month_first() {
    assert_eq!(extract_date("04/05/24"), Some(ymd(2024, 4, 5)));
    assert_eq!(extract_date("04-05-2024"), Some(ymd(2024, 4, 5)));
    assert_eq!(extract_date("15/03/24"), None);
}
