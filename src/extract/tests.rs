#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::clock::FixedClock;

fn clock() -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
}

fn voice(text: &str) -> DraftTransaction {
    extract_transaction(text, Origin::Utterance, &clock())
}

fn receipt(text: &str) -> DraftTransaction {
    extract_transaction(text, Origin::Document, &clock())
}

// ── Utterances ────────────────────────────────────────────────

#[test]
fn test_spoken_description_excludes_chosen_amount() {
    let draft = voice("Paid $30 for dinner and $3 tip");
    assert_eq!(draft.amount, dec!(3));
    assert_eq!(draft.description, "$30 dinner and tip");
    assert!(!draft.description.contains("$3 "));
    assert!(!draft.description.ends_with("$3"));
}

#[test]
fn test_spoken_expense() {
    let draft = voice("Spent $25 on lunch");
    assert_eq!(draft.kind, TransactionType::Expense);
    assert_eq!(draft.amount, dec!(25));
    assert_eq!(draft.category, CategoryId::Food);
    assert_eq!(draft.description, "lunch");
    let lower = draft.description.to_lowercase();
    assert!(!lower.contains("25"));
    assert!(!lower.contains("spent"));
    assert!(!lower.split_whitespace().any(|w| w == "on"));
}

#[test]
fn test_spoken_income() {
    let draft = voice("Received $2000 salary");
    assert_eq!(draft.kind, TransactionType::Income);
    assert_eq!(draft.amount, dec!(2000));
    assert_eq!(draft.category, CategoryId::Income);
    assert_eq!(draft.description, "Received salary");
}

#[test]
fn test_spoken_income_words() {
    for text in ["earned 50 tutoring", "got my payment 300", "side income 80"] {
        assert_eq!(voice(text).kind, TransactionType::Income, "{text}");
    }
}

#[test]
fn test_spoken_date_is_extracted() {
    let draft = voice("paid 40 for gas on 03/15/24");
    assert_eq!(draft.date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    assert!(draft.date_extracted);
    assert_eq!(draft.category, CategoryId::Transport);
}

#[test]
fn test_spoken_without_date_uses_today() {
    let draft = voice("coffee 4.50");
    assert_eq!(draft.date, clock().today());
    assert!(!draft.date_extracted);
    assert_eq!(draft.amount, dec!(4.50));
}

// ── Receipts ──────────────────────────────────────────────────

#[test]
fn test_receipt_scan() {
    let text = "CORNER CAFE\n03/15/24\nLatte $4.50\nMuffin $3.25\nTotal: $7.75\nCash $10.00";
    let draft = receipt(text);
    assert_eq!(draft.kind, TransactionType::Expense);
    assert_eq!(draft.amount, dec!(7.75));
    assert_eq!(draft.category, CategoryId::Food);
    assert_eq!(draft.description, "CORNER CAFE");
    assert_eq!(draft.date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    assert!(draft.date_extracted);
}

#[test]
fn test_receipt_is_never_income() {
    let draft = receipt("Payment received\nTotal $50");
    assert_eq!(draft.kind, TransactionType::Expense);
    assert_ne!(draft.category, CategoryId::Income);
}

#[test]
fn test_receipt_invalid_date_falls_back_to_today() {
    let draft = receipt("SHOP\n13/40/24\nTotal $5");
    assert_eq!(draft.date, clock().today());
    assert!(!draft.date_extracted);
}

// ── Defaults ──────────────────────────────────────────────────

#[test]
fn test_empty_input_yields_defaults() {
    for origin in [Origin::Utterance, Origin::Document] {
        let draft = extract_transaction("", origin, &clock());
        assert_eq!(draft.amount, Decimal::ZERO);
        assert_eq!(draft.category, CategoryId::Other);
        assert_eq!(draft.date, clock().today());
        assert_eq!(draft.kind, TransactionType::Expense);
    }
    assert_eq!(voice("").description, VOICE_PLACEHOLDER);
    assert_eq!(receipt("").description, RECEIPT_PLACEHOLDER);
}

#[test]
fn test_any_input_produces_a_usable_draft() {
    let inputs = [
        "",
        "   \n\t",
        "$$$ ... ///",
        "99999999999999999999999999999999999 dollars",
        "total total total",
        "0/0/0 0-0-0 0000-00-00",
        "日本語のレシート ¥500",
        "the a an for on",
    ];
    for text in inputs {
        for origin in [Origin::Utterance, Origin::Document] {
            let draft = extract_transaction(text, origin, &clock());
            assert!(draft.amount >= Decimal::ZERO, "{text:?}");
            assert!(CategoryId::all().contains(&draft.category), "{text:?}");
            assert!(!draft.description.is_empty(), "{text:?}");
        }
    }
}

#[test]
fn test_extraction_is_deterministic() {
    let text = "Uber ride $18.40 on 2024-05-02";
    assert_eq!(voice(text), voice(text));
    assert_eq!(receipt(text), receipt(text));
}
