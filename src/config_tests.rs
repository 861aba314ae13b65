#![allow(clippy::unwrap_used)]

use super::*;
use crate::models::CategoryId;
use rust_decimal_macros::dec;
use std::io::Write;

fn make_budgets_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_read_budget_limits() {
    let file = make_budgets_file("category,limit\nfood,450\nTransport,\"$1,200.00\"\n");
    let limits = read_budget_limits(file.path()).unwrap();
    assert_eq!(limits.len(), 2);
    assert_eq!(limits.get(CategoryId::Food), Some(dec!(450)));
    assert_eq!(limits.get(CategoryId::Transport), Some(dec!(1200.00)));
    assert_eq!(limits.get(CategoryId::Shopping), None);
}

#[test]
fn test_read_budget_limits_unknown_category() {
    let file = make_budgets_file("category,limit\nfood,450\npets,20\n");
    let err = read_budget_limits(file.path()).unwrap_err();
    assert!(err.to_string().contains("Row 2"), "{err}");
}

#[test]
fn test_read_budget_limits_rejects_non_positive() {
    let file = make_budgets_file("category,limit\nfood,0\n");
    assert!(read_budget_limits(file.path()).is_err());
}

#[test]
fn test_read_budget_limits_rejects_income() {
    let file = make_budgets_file("category,limit\nincome,100\n");
    assert!(read_budget_limits(file.path()).is_err());
}

#[test]
fn test_load_explicit_path() {
    let file = make_budgets_file("category,limit\nhealth,75\n");
    let limits = load_budget_limits(Some(file.path())).unwrap();
    assert_eq!(limits.get(CategoryId::Health), Some(dec!(75)));
    assert_eq!(limits.len(), 1);
}

#[test]
fn test_load_explicit_path_missing() {
    let err = load_budget_limits(Some(Path::new("/nonexistent/budgets.csv"))).unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[test]
fn test_read_budget_limits_accepts_display_names() {
    let file = make_budgets_file("category,limit\nFood & Dining,320\nhealthcare,90\n");
    let limits = read_budget_limits(file.path()).unwrap();
    assert_eq!(limits.get(CategoryId::Food), Some(dec!(320)));
    assert_eq!(limits.get(CategoryId::Health), Some(dec!(90)));
}

#[test]
fn test_read_budget_limits_header_only() {
    let file = make_budgets_file("category,limit\n");
    assert!(read_budget_limits(file.path()).unwrap().is_empty());
}
