//! SpendSense turns voice transcripts and receipt text into draft
//! transactions, and derives budget insights, recommendations and a
//! spending forecast from a transaction list.

pub mod analytics;
pub mod categorize;
pub mod clock;
pub mod config;
pub mod extract;
pub mod import;
pub mod ledger;
pub mod models;
pub mod run;

mod util;
