use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct NotificationId(pub String);

impl NotificationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NotificationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NotificationId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Important,
    Work,
    Social,
    Promo,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Important => write!(f, "important"),
            Category::Work => write!(f, "work"),
            Category::Social => write!(f, "social"),
            Category::Promo => write!(f, "promo"),
        }
    }
}

/// Active category tab. `All` is a filter value only, never a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Important,
    Work,
    Social,
    Promo,
}

impl CategoryFilter {
    pub const ALL_TABS: [CategoryFilter; 5] = [
        CategoryFilter::All,
        CategoryFilter::Important,
        CategoryFilter::Work,
        CategoryFilter::Social,
        CategoryFilter::Promo,
    ];

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Important => category == Category::Important,
            CategoryFilter::Work => category == Category::Work,
            CategoryFilter::Social => category == Category::Social,
            CategoryFilter::Promo => category == Category::Promo,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Important => "Important",
            CategoryFilter::Work => "Work",
            CategoryFilter::Social => "Social",
            CategoryFilter::Promo => "Promotions",
        }
    }

    pub fn icon(&self) -> IconHint {
        match self {
            CategoryFilter::All => IconHint::Bell,
            CategoryFilter::Important => IconHint::AlertCircle,
            CategoryFilter::Work => IconHint::Calendar,
            CategoryFilter::Social => IconHint::MessageSquare,
            CategoryFilter::Promo => IconHint::Tag,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        match category {
            Category::Important => CategoryFilter::Important,
            Category::Work => CategoryFilter::Work,
            Category::Social => CategoryFilter::Social,
            Category::Promo => CategoryFilter::Promo,
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Important => write!(f, "important"),
            CategoryFilter::Work => write!(f, "work"),
            CategoryFilter::Social => write!(f, "social"),
            CategoryFilter::Promo => write!(f, "promo"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum IconHint {
    Bell,
    AlertCircle,
    Calendar,
    MessageSquare,
    Tag,
    Mail,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: NotificationId,
    pub app: String,
    pub sender: String,
    pub title: String,
    pub message: String,
    pub time: String,
    pub category: Category,
    pub is_read: bool,
    pub icon: IconHint,
}

impl Notification {
    /// `needle` must already be lowercased.
    pub fn matches_query(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.message.to_lowercase().contains(needle)
            || self.sender.to_lowercase().contains(needle)
    }
}

/// A notification before the store has assigned it an id.
#[derive(Debug, Clone)]
pub struct NewNotification {
    pub app: String,
    pub sender: String,
    pub title: String,
    pub message: String,
    pub time: String,
    pub category: Category,
    pub icon: IconHint,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryTab {
    pub id: CategoryFilter,
    pub name: String,
    pub icon: IconHint,
}

impl From<CategoryFilter> for CategoryTab {
    fn from(filter: CategoryFilter) -> Self {
        Self {
            id: filter,
            name: filter.display_name().to_string(),
            icon: filter.icon(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Notification {
        Notification {
            id: NotificationId::new("7"),
            app: "Slack".to_string(),
            sender: "Design Team".to_string(),
            title: "New Comment".to_string(),
            message: "Alex commented on your design".to_string(),
            time: "2 days ago".to_string(),
            category: Category::Work,
            is_read: false,
            icon: IconHint::MessageSquare,
        }
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Important.to_string(), "important");
        assert_eq!(Category::Work.to_string(), "work");
        assert_eq!(Category::Social.to_string(), "social");
        assert_eq!(Category::Promo.to_string(), "promo");
    }

    #[test]
    fn test_filter_all_matches_every_category() {
        for category in [Category::Important, Category::Work, Category::Social, Category::Promo] {
            assert!(CategoryFilter::All.matches(category));
            assert!(CategoryFilter::from(category).matches(category));
        }
        assert!(!CategoryFilter::Work.matches(Category::Promo));
    }

    #[test]
    fn test_tabs_in_display_order() {
        let names: Vec<_> = CategoryFilter::ALL_TABS
            .iter()
            .map(|tab| tab.display_name())
            .collect();
        assert_eq!(names, ["All", "Important", "Work", "Social", "Promotions"]);
        assert_eq!(CategoryFilter::Promo.icon(), IconHint::Tag);
    }

    #[test]
    fn test_category_rejects_all() {
        assert!(serde_json::from_str::<Category>("\"all\"").is_err());
        assert_eq!(
            serde_json::from_str::<CategoryFilter>("\"all\"").unwrap(),
            CategoryFilter::All
        );
    }

    #[test]
    fn test_notification_serializes_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["id"], "7");
        assert_eq!(json["isRead"], false);
        assert_eq!(json["category"], "work");
        assert_eq!(json["icon"], "message_square");
    }

    #[test]
    fn test_matches_query_checks_title_message_sender() {
        let n = sample();
        assert!(n.matches_query("comment"));
        assert!(n.matches_query("alex"));
        assert!(n.matches_query("design team"));
        assert!(!n.matches_query("slack"));
    }
}
