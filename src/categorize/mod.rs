use tracing::debug;

use crate::models::{CategoryId, Origin};

/// Category used when no keyword matches.
pub const FALLBACK_CATEGORY: CategoryId = CategoryId::Other;

/// Keyword table for spoken input. Declaration order is the tie-break:
/// "gas" resolves to transport before utilities gets a look.
const UTTERANCE_KEYWORDS: &[(CategoryId, &[&str])] = &[
    (
        CategoryId::Food,
        &["food", "restaurant", "dinner", "lunch", "breakfast", "meal", "groceries", "coffee"],
    ),
    (
        CategoryId::Transport,
        &["transport", "gas", "fuel", "uber", "taxi", "bus", "train", "parking"],
    ),
    (
        CategoryId::Entertainment,
        &["entertainment", "movie", "concert", "game", "fun", "party"],
    ),
    (
        CategoryId::Shopping,
        &["shopping", "clothes", "shoes", "store", "mall", "purchase"],
    ),
    (
        CategoryId::Health,
        &["health", "medical", "doctor", "pharmacy", "medicine", "hospital"],
    ),
    (
        CategoryId::Education,
        &["education", "school", "course", "book", "tuition", "training"],
    ),
    (
        CategoryId::Utilities,
        &["utility", "electricity", "water", "gas", "internet", "phone"],
    ),
    (CategoryId::Other, &["other", "misc", "miscellaneous"]),
];

/// Keyword table for receipt text.
const DOCUMENT_KEYWORDS: &[(CategoryId, &[&str])] = &[
    (
        CategoryId::Food,
        &["restaurant", "cafe", "diner", "pizza", "burger", "coffee", "food", "meal"],
    ),
    (
        CategoryId::Transport,
        &["gas", "fuel", "uber", "taxi", "parking", "transport"],
    ),
    (
        CategoryId::Shopping,
        &["store", "shop", "mall", "retail", "clothing", "shoes"],
    ),
    (
        CategoryId::Health,
        &["pharmacy", "medical", "drug", "health", "doctor"],
    ),
    (
        CategoryId::Entertainment,
        &["movie", "cinema", "theater", "concert", "game"],
    ),
    (
        CategoryId::Utilities,
        &["electric", "water", "gas", "internet", "phone", "utility"],
    ),
];

/// First-match-wins keyword classifier over an ordered table.
pub struct Categorizer {
    rules: &'static [(CategoryId, &'static [&'static str])],
}

impl Categorizer {
    pub fn for_origin(origin: Origin) -> Self {
        let rules = match origin {
            Origin::Utterance => UTTERANCE_KEYWORDS,
            Origin::Document => DOCUMENT_KEYWORDS,
        };
        Self { rules }
    }

    /// The first category with any keyword contained in `text`, or `None`.
    pub fn categorize(&self, text: &str) -> Option<CategoryId> {
        let lower = text.to_lowercase();

        for (category, keywords) in self.rules {
            if let Some(keyword) = keywords.iter().find(|k| lower.contains(*k)) {
                debug!(category = %category, keyword, "keyword matched");
                return Some(*category);
            }
        }

        None
    }

    /// Like `categorize`, falling back to `other`.
    pub fn categorize_or_default(&self, text: &str) -> CategoryId {
        self.categorize(text).unwrap_or(FALLBACK_CATEGORY)
    }
}
