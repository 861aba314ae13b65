#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn make_txn(kind: TransactionType, amount: Decimal) -> Transaction {
    Transaction {
        id: TransactionId(1),
        kind,
        description: "Test".into(),
        amount,
        category: CategoryId::Food,
        date: date(2024, 1, 15),
    }
}

fn make_draft(date_extracted: bool) -> DraftTransaction {
    DraftTransaction {
        kind: TransactionType::Expense,
        description: "Lunch".into(),
        amount: dec!(12.50),
        category: CategoryId::Food,
        date: date(2024, 3, 15),
        date_extracted,
    }
}

// ── Transaction ───────────────────────────────────────────────

#[test]
fn test_income() {
    let txn = make_txn(TransactionType::Income, dec!(100.00));
    assert!(txn.is_income());
    assert!(!txn.is_expense());
}

#[test]
fn test_expense() {
    let txn = make_txn(TransactionType::Expense, dec!(50.00));
    assert!(!txn.is_income());
    assert!(txn.is_expense());
}

#[test]
fn test_signed_amount() {
    assert_eq!(make_txn(TransactionType::Expense, dec!(42.99)).signed_amount(), dec!(-42.99));
    assert_eq!(make_txn(TransactionType::Income, dec!(42.99)).signed_amount(), dec!(42.99));
    assert_eq!(make_txn(TransactionType::Expense, Decimal::ZERO).signed_amount(), Decimal::ZERO);
}

#[test]
fn test_transaction_type_parse() {
    assert_eq!(TransactionType::parse("income"), Some(TransactionType::Income));
    assert_eq!(TransactionType::parse("EXPENSE"), Some(TransactionType::Expense));
    assert_eq!(TransactionType::parse(" debit "), Some(TransactionType::Expense));
    assert_eq!(TransactionType::parse("transfer"), None);
}

#[test]
fn test_origin_parse() {
    assert_eq!(Origin::parse("voice"), Some(Origin::Utterance));
    assert_eq!(Origin::parse("Receipt"), Some(Origin::Document));
    assert_eq!(Origin::parse("fax"), None);
}

// ── DraftTransaction ──────────────────────────────────────────

#[test]
fn test_accept_keeps_extracted_date() {
    let txn = make_draft(true).accept(TransactionId(7), date(2024, 4, 1));
    assert_eq!(txn.id, TransactionId(7));
    assert_eq!(txn.date, date(2024, 3, 15));
    assert_eq!(txn.amount, dec!(12.50));
}

#[test]
fn test_accept_uses_acceptance_date_when_defaulted() {
    let txn = make_draft(false).accept(TransactionId(7), date(2024, 4, 1));
    assert_eq!(txn.date, date(2024, 4, 1));
}

#[test]
fn test_edit_replaces_only_given_fields() {
    let txn = make_txn(TransactionType::Expense, dec!(10));
    let edit = TransactionEdit {
        amount: Some(dec!(11)),
        category: Some(CategoryId::Shopping),
        ..Default::default()
    };
    let updated = edit.apply_to(&txn);
    assert_eq!(updated.id, txn.id);
    assert_eq!(updated.amount, dec!(11));
    assert_eq!(updated.category, CategoryId::Shopping);
    assert_eq!(updated.description, "Test");
    assert_eq!(updated.date, txn.date);
}

// ── Category ──────────────────────────────────────────────────

#[test]
fn test_category_parse() {
    assert_eq!(CategoryId::parse("food"), Some(CategoryId::Food));
    assert_eq!(CategoryId::parse("UTILITIES"), Some(CategoryId::Utilities));
    assert_eq!(CategoryId::parse("groceries"), None);
}

#[test]
fn test_category_roundtrip() {
    for c in CategoryId::all() {
        let s = c.as_str();
        assert_eq!(CategoryId::parse(s), Some(*c), "Roundtrip failed for {s}");
    }
}

#[test]
fn test_category_table_matches_enum_order() {
    for c in CategoryId::all() {
        assert_eq!(c.info().id, *c);
    }
    assert_eq!(Category::all().len(), CategoryId::all().len());
}

#[test]
fn test_category_declaration_order() {
    assert!(CategoryId::Food < CategoryId::Transport);
    assert!(CategoryId::Utilities < CategoryId::Income);
    assert!(CategoryId::Income < CategoryId::Other);
}

#[test]
fn test_expense_categories_exclude_income() {
    let cats: Vec<_> = CategoryId::expense_categories().collect();
    assert_eq!(cats.len(), 8);
    assert!(!cats.contains(&CategoryId::Income));
    assert!(cats.contains(&CategoryId::Other));
}

#[test]
fn test_category_find_by_name() {
    assert_eq!(Category::find_by_name("food & dining").unwrap().id, CategoryId::Food);
    assert_eq!(Category::find_by_name("Healthcare").unwrap().id, CategoryId::Health);
    assert_eq!(Category::find_by_name("health").unwrap().id, CategoryId::Health);
    assert!(Category::find_by_name("Pets").is_none());
}

#[test]
fn test_category_display() {
    assert_eq!(format!("{}", CategoryId::Food.info()), "Food & Dining");
    assert_eq!(format!("{}", CategoryId::Food), "food");
}

// ── BudgetLimits ──────────────────────────────────────────────

#[test]
fn test_standard_limits() {
    let limits = BudgetLimits::standard();
    assert_eq!(limits.get(CategoryId::Food), Some(dec!(500)));
    assert_eq!(limits.get(CategoryId::Utilities), Some(dec!(200)));
    assert_eq!(limits.get(CategoryId::Income), None);
    assert_eq!(limits.len(), 8);
}

#[test]
fn test_limits_from_iter_drops_non_positive() {
    let limits: BudgetLimits = vec![
        (CategoryId::Food, dec!(100)),
        (CategoryId::Shopping, Decimal::ZERO),
        (CategoryId::Health, dec!(-5)),
    ]
    .into_iter()
    .collect();
    assert_eq!(limits.len(), 1);
    assert_eq!(limits.get(CategoryId::Food), Some(dec!(100)));
}

#[test]
fn test_limits_set_and_remove() {
    let mut limits = BudgetLimits::new();
    assert!(limits.is_empty());
    limits.set(CategoryId::Food, dec!(250));
    assert_eq!(limits.get(CategoryId::Food), Some(dec!(250)));
    assert_eq!(limits.remove(CategoryId::Food), Some(dec!(250)));
    assert!(limits.is_empty());
}

// ── Period ────────────────────────────────────────────────────

#[test]
fn test_period_parse_and_display() {
    let p = Period::parse("2024-03").unwrap();
    assert_eq!(p.year(), 2024);
    assert_eq!(p.month(), 3);
    assert_eq!(p.to_string(), "2024-03");
    assert!(Period::parse("2024-13").is_none());
    assert!(Period::parse("2024").is_none());
    assert!(Period::parse("march").is_none());
}

#[test]
fn test_period_previous_wraps_year() {
    let jan = Period::new(2024, 1).unwrap();
    assert_eq!(jan.previous(), Period::new(2023, 12).unwrap());
    let jun = Period::new(2024, 6).unwrap();
    assert_eq!(jun.previous(), Period::new(2024, 5).unwrap());
}

#[test]
fn test_period_contains() {
    let p = Period::new(2024, 2).unwrap();
    assert!(p.contains(date(2024, 2, 29)));
    assert!(!p.contains(date(2023, 2, 1)));
    assert!(!p.contains(date(2024, 3, 1)));
    assert_eq!(Period::from_date(date(2024, 2, 29)), p);
}

#[test]
fn test_period_trailing() {
    let p = Period::new(2024, 2).unwrap();
    let months: Vec<String> = p.trailing(3).iter().map(|p| p.to_string()).collect();
    assert_eq!(months, vec!["2023-12", "2024-01", "2024-02"]);
    assert!(p.trailing(0).is_empty());
}
