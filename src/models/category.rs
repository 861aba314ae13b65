/// Category identifiers in declaration order. The derived `Ord` follows this
/// order, so maps keyed by `CategoryId` iterate the way the category table reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CategoryId {
    Food,
    Transport,
    Entertainment,
    Shopping,
    Health,
    Education,
    Utilities,
    Income,
    Other,
}

impl CategoryId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Entertainment => "entertainment",
            Self::Shopping => "shopping",
            Self::Health => "health",
            Self::Education => "education",
            Self::Utilities => "utilities",
            Self::Income => "income",
            Self::Other => "other",
        }
    }

    /// Unknown names map to `None` rather than `Other`; callers decide the fallback.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "food" => Some(Self::Food),
            "transport" => Some(Self::Transport),
            "entertainment" => Some(Self::Entertainment),
            "shopping" => Some(Self::Shopping),
            "health" => Some(Self::Health),
            "education" => Some(Self::Education),
            "utilities" => Some(Self::Utilities),
            "income" => Some(Self::Income),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn all() -> &'static [CategoryId] {
        &[
            Self::Food,
            Self::Transport,
            Self::Entertainment,
            Self::Shopping,
            Self::Health,
            Self::Education,
            Self::Utilities,
            Self::Income,
            Self::Other,
        ]
    }

    /// Every category an expense may be filed under.
    pub fn expense_categories() -> impl Iterator<Item = CategoryId> {
        Self::all().iter().copied().filter(|c| !c.is_income())
    }

    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }

    pub fn info(&self) -> &'static Category {
        // CATEGORIES is laid out in the same order as the enum.
        &CATEGORIES[*self as usize]
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Static reference data for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &CATEGORIES
    }

    /// Find a category by display name or id (case-insensitive).
    pub fn find_by_name(name: &str) -> Option<&'static Category> {
        let lower = name.trim().to_lowercase();
        CATEGORIES
            .iter()
            .find(|c| c.name.to_lowercase() == lower || c.id.as_str() == lower)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

static CATEGORIES: [Category; 9] = [
    Category {
        id: CategoryId::Food,
        name: "Food & Dining",
        color: "#ef4444",
        icon: "🍽️",
    },
    Category {
        id: CategoryId::Transport,
        name: "Transportation",
        color: "#3b82f6",
        icon: "🚗",
    },
    Category {
        id: CategoryId::Entertainment,
        name: "Entertainment",
        color: "#8b5cf6",
        icon: "🎬",
    },
    Category {
        id: CategoryId::Shopping,
        name: "Shopping",
        color: "#f59e0b",
        icon: "🛍️",
    },
    Category {
        id: CategoryId::Health,
        name: "Healthcare",
        color: "#10b981",
        icon: "🏥",
    },
    Category {
        id: CategoryId::Education,
        name: "Education",
        color: "#06b6d4",
        icon: "📚",
    },
    Category {
        id: CategoryId::Utilities,
        name: "Utilities",
        color: "#84cc16",
        icon: "⚡",
    },
    Category {
        id: CategoryId::Income,
        name: "Income",
        color: "#22c55e",
        icon: "💰",
    },
    Category {
        id: CategoryId::Other,
        name: "Other",
        color: "#6b7280",
        icon: "📝",
    },
];
