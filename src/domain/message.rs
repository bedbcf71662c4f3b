use chrono::{DateTime, Utc};

/// One entry in the session transcript. Messages are append-only and live
/// only as long as the session; nothing is persisted.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: u64,
    pub text: String,
    pub is_bot: bool,
    pub timestamp: DateTime<Utc>,
    pub category: Option<Category>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Tip,
    Fact,
    Guide,
    Question,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Tip => "tip",
            Category::Fact => "fact",
            Category::Guide => "guide",
            Category::Question => "question",
        }
    }
}
