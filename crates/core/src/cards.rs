use serde::{Deserialize, Serialize};
use std::fmt;

/// One action card. Identity is structural; a pool may hold duplicates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub text: String,
    #[serde(default)]
    pub penalty_sips: u32,
}

impl Card {
    pub fn new(text: impl Into<String>, penalty_sips: u32) -> Self {
        Self {
            text: text.into(),
            penalty_sips,
        }
    }

    pub fn category(&self) -> Category {
        crate::categorize(&self.text)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Single,
    TimeBased,
    #[serde(rename = "duel-1v1")]
    Duel1v1,
    GroupDuel,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Single,
        Category::TimeBased,
        Category::Duel1v1,
        Category::GroupDuel,
    ];

    /// Categories that receive a minimum quota when a deck is drawn.
    pub const MINORITY: [Category; 3] = [
        Category::TimeBased,
        Category::Duel1v1,
        Category::GroupDuel,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Category::Single => "single",
            Category::TimeBased => "time-based",
            Category::Duel1v1 => "duel-1v1",
            Category::GroupDuel => "group-duel",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.tag() == tag)
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Category::Single => 0,
            Category::TimeBased => 1,
            Category::Duel1v1 => 2,
            Category::GroupDuel => 3,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_roundtrip_through_from_tag() {
        for category in Category::ALL {
            assert_eq!(Category::from_tag(category.tag()), Some(category));
        }
        assert_eq!(Category::from_tag("solo"), None);
    }

    #[test]
    fn serde_uses_display_tags() {
        let json = serde_json::to_string(&Category::Duel1v1).expect("serialize");
        assert_eq!(json, "\"duel-1v1\"");
        let back: Category = serde_json::from_str("\"time-based\"").expect("deserialize");
        assert_eq!(back, Category::TimeBased);
    }

    #[test]
    fn missing_penalty_defaults_to_zero() {
        let card: Card = serde_json::from_str(r#"{"text":"Bois"}"#).expect("card");
        assert_eq!(card, Card::new("Bois", 0));
    }
}
