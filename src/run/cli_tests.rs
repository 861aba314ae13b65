#![allow(clippy::unwrap_used)]

use super::*;
use std::io::Write;

fn args(list: &[&str]) -> Vec<String> {
    std::iter::once("spendsense")
        .chain(list.iter().copied())
        .map(String::from)
        .collect()
}

fn make_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_unknown_command() {
    let err = as_cli(&args(&["frobnicate"])).unwrap_err();
    assert!(err.to_string().contains("Unknown command"));
}

#[test]
fn test_no_command_prints_usage() {
    assert!(as_cli(&args(&[])).is_ok());
}

#[test]
fn test_extract_requires_origin() {
    assert!(as_cli(&args(&["extract", "camera", "Total $5"])).is_err());
}

#[test]
fn test_extract_requires_text() {
    assert!(as_cli(&args(&["extract", "voice"])).is_err());
}

#[test]
fn test_extract_voice() {
    assert!(as_cli(&args(&["extract", "voice", "Spent", "$25", "on", "lunch"])).is_ok());
}

#[test]
fn test_extract_receipt_from_file() {
    let file = make_file("Corner Cafe\n03/15/24\nTotal: $42.50\n");
    let path = file.path().to_str().unwrap();
    assert!(as_cli(&args(&["extract", "receipt", "-f", path])).is_ok());
}

#[test]
fn test_report() {
    let txns = make_file(
        "date,type,category,amount,description\n\
         2024-03-01,income,,3000,Salary\n\
         2024-03-02,expense,food,600,Groceries\n\
         2024-02-10,expense,food,300,Groceries\n",
    );
    let budgets = make_file("category,limit\nfood,500\n");
    let result = as_cli(&args(&[
        "report",
        txns.path().to_str().unwrap(),
        "--month",
        "2024-03",
        "--budgets",
        budgets.path().to_str().unwrap(),
    ]));
    assert!(result.is_ok(), "{result:?}");
}

#[test]
fn test_report_bad_month() {
    let txns = make_file("date,type,category,amount,description\n");
    let result = as_cli(&args(&["report", txns.path().to_str().unwrap(), "--month", "2024-13"]));
    assert!(result.is_err());
}

#[test]
fn test_report_missing_file() {
    assert!(as_cli(&args(&["report", "/nonexistent/txns.csv"])).is_err());
}
