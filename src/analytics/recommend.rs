use rust_decimal::Decimal;

use super::aggregate::Aggregates;
use crate::models::{BudgetLimits, CategoryId};

/// Savings rate (percent of income) below which saving more is suggested.
pub const SAVINGS_TARGET_PERCENT: i64 = 20;

/// Monthly food spending above which meal planning is suggested.
pub const FOOD_SPENDING_THRESHOLD: i64 = 600;

/// Monthly entertainment spending above which cheaper options are suggested.
pub const ENTERTAINMENT_SPENDING_THRESHOLD: i64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationKind {
    Reduce,
    Save,
}

impl RecommendationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reduce => "reduce",
            Self::Save => "save",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub message: String,
    pub priority: Priority,
    pub related_category: Option<CategoryId>,
    /// For over-budget categories: how much to cut to get back under the limit.
    pub suggested_cut: Option<Decimal>,
}

/// Suggestions derived from this month's aggregates.
///
/// Order: one high-priority cut per over-budget category, the savings nudge,
/// then the fixed food and entertainment rules.
pub fn generate_recommendations(
    current: &Aggregates,
    limits: &BudgetLimits,
    savings_rate: Decimal,
) -> Vec<Recommendation> {
    let mut recs: Vec<Recommendation> = current
        .by_category
        .iter()
        .filter_map(|(&category, &spent)| {
            let limit = limits.get(category)?;
            let cut = spent - limit;
            (cut > Decimal::ZERO).then(|| Recommendation {
                kind: RecommendationKind::Reduce,
                message: format!(
                    "Consider reducing {category} expenses by ${cut:.2} to stay within budget"
                ),
                priority: Priority::High,
                related_category: Some(category),
                suggested_cut: Some(cut),
            })
        })
        .collect();

    if savings_rate < Decimal::from(SAVINGS_TARGET_PERCENT) {
        recs.push(Recommendation {
            kind: RecommendationKind::Save,
            message: format!(
                "Consider increasing your savings rate. Aim for at least {SAVINGS_TARGET_PERCENT}% of your income."
            ),
            priority: Priority::Medium,
            related_category: None,
            suggested_cut: None,
        });
    }

    if current.spent(CategoryId::Food) > Decimal::from(FOOD_SPENDING_THRESHOLD) {
        recs.push(Recommendation {
            kind: RecommendationKind::Reduce,
            message: "Try meal planning and cooking at home to reduce food expenses".into(),
            priority: Priority::Medium,
            related_category: Some(CategoryId::Food),
            suggested_cut: None,
        });
    }

    if current.spent(CategoryId::Entertainment) > Decimal::from(ENTERTAINMENT_SPENDING_THRESHOLD) {
        recs.push(Recommendation {
            kind: RecommendationKind::Reduce,
            message: "Look for free or low-cost entertainment options".into(),
            priority: Priority::Low,
            related_category: Some(CategoryId::Entertainment),
            suggested_cut: None,
        });
    }

    recs
}

#[cfg(test)]
#[path = "recommend_tests.rs"]
mod tests;
