use crate::{Card, Category, TargetPayload};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum CardAction {
    Target(TargetPayload),
    Timer { secs: u32 },
}

/// Everything a front-end needs to draw the current card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardView {
    pub index: usize,
    pub total: usize,
    pub category: Category,
    pub text: String,
    pub penalty_sips: u32,
    pub action: CardAction,
}

impl CardView {
    pub fn new(index: usize, total: usize, card: &Card, action: CardAction) -> Self {
        Self {
            index,
            total,
            category: card.category(),
            text: card.text.clone(),
            penalty_sips: card.penalty_sips,
            action,
        }
    }

    /// One-based position, e.g. `3 / 20`.
    pub fn counter_text(&self) -> String {
        format!("{} / {}", self.index + 1, self.total)
    }

    pub fn target(&self) -> Option<&TargetPayload> {
        match &self.action {
            CardAction::Target(target) => Some(target),
            CardAction::Timer { .. } => None,
        }
    }
}
