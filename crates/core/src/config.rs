use serde::{Deserialize, Serialize};

pub const DEFAULT_CARD_COUNT: usize = 20;
pub const DEFAULT_MIN_QUOTA_RATIO: f64 = 0.10;
pub const DEFAULT_MIN_PLAYERS: usize = 2;

/// Who pays when a card is refused.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PenaltyTarget {
    /// A player drawn at refuse time, independent of the card's displayed target.
    #[default]
    RandomPlayer,
    /// The player shown on the card; falls back to a random player for cards
    /// without a single named target.
    Displayed,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub card_count: usize,
    pub min_quota_ratio: f64,
    pub default_timer_secs: u32,
    pub min_players: usize,
    pub penalty_target: PenaltyTarget,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            card_count: DEFAULT_CARD_COUNT,
            min_quota_ratio: DEFAULT_MIN_QUOTA_RATIO,
            default_timer_secs: crate::DEFAULT_TIMER_SECS,
            min_players: DEFAULT_MIN_PLAYERS,
            penalty_target: PenaltyTarget::RandomPlayer,
        }
    }
}

impl GameConfig {
    pub fn selector(&self) -> crate::BalancedSelector {
        crate::BalancedSelector::new(self.min_quota_ratio)
    }
}
