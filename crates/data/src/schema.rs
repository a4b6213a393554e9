use serde::{Deserialize, Serialize};

pub use piccolo_core::{Card, CardPool, Category, DifficultyCards, GameConfig, PenaltyTarget};

/// Per-category card counts for one difficulty key.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DifficultySummary {
    pub key: String,
    pub single: usize,
    pub time_based: usize,
    pub duel: usize,
    pub group: usize,
}

impl DifficultySummary {
    pub fn total(&self) -> usize {
        self.single + self.time_based + self.duel + self.group
    }

    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Single => self.single,
            Category::TimeBased => self.time_based,
            Category::Duel1v1 => self.duel,
            Category::GroupDuel => self.group,
        }
    }
}
