use crate::{Card, Category, RngState, DEFAULT_MIN_QUOTA_RATIO};
use serde::{Deserialize, Serialize};

/// Non-fatal notes about a draw that could not be fully balanced.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SelectionWarning {
    PoolTooSmall {
        requested: usize,
        available: usize,
    },
    QuotaShort {
        category: Category,
        wanted: usize,
        available: usize,
    },
}

#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub cards: Vec<Card>,
    pub warnings: Vec<SelectionWarning>,
}

/// Draws a deck that carries a minimum share of timed, duel and group cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalancedSelector {
    min_quota_ratio: f64,
}

impl Default for BalancedSelector {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_QUOTA_RATIO)
    }
}

impl BalancedSelector {
    pub fn new(min_quota_ratio: f64) -> Self {
        let min_quota_ratio = if min_quota_ratio.is_finite() {
            min_quota_ratio.max(0.0)
        } else {
            DEFAULT_MIN_QUOTA_RATIO
        };
        Self { min_quota_ratio }
    }

    /// `max(1, ceil(target * ratio))`; zero only for an empty target.
    pub fn quota(&self, target: usize) -> usize {
        if target == 0 {
            return 0;
        }
        let scaled = (target as f64 * self.min_quota_ratio).ceil() as usize;
        scaled.max(1)
    }

    pub fn select(&self, pool: &[Card], requested: usize, rng: &mut RngState) -> Selection {
        let mut warnings = Vec::new();
        if requested > pool.len() {
            warnings.push(SelectionWarning::PoolTooSmall {
                requested,
                available: pool.len(),
            });
        }
        let target = requested.min(pool.len());
        let quota = self.quota(target);

        let mut reserves: [Vec<Card>; 4] = Default::default();
        for card in pool {
            reserves[card.category().index()].push(card.clone());
        }

        let mut result = Vec::with_capacity(target);
        let mut minority = Category::MINORITY;
        // quotas can outnumber a tiny target; vary which category loses out
        rng.shuffle(&mut minority);
        for category in minority {
            let reserve = &mut reserves[category.index()];
            if reserve.len() < quota {
                warnings.push(SelectionWarning::QuotaShort {
                    category,
                    wanted: quota,
                    available: reserve.len(),
                });
            }
            let budget = target - result.len();
            let take = quota.min(reserve.len()).min(budget);
            for _ in 0..take {
                let idx = rng.index(reserve.len());
                result.push(reserve.swap_remove(idx));
            }
        }

        let mut leftovers: Vec<Card> = reserves.into_iter().flatten().collect();
        rng.shuffle(&mut leftovers);
        let remaining = target - result.len();
        result.extend(leftovers.into_iter().take(remaining));
        rng.shuffle(&mut result);

        for warning in &warnings {
            log::warn!("degenerate card selection: {warning:?}");
        }
        Selection {
            cards: result,
            warnings,
        }
    }
}

/// Balanced draw with the default 10% quota.
pub fn select_balanced(pool: &[Card], requested: usize, rng: &mut RngState) -> Vec<Card> {
    BalancedSelector::default().select(pool, requested, rng).cards
}
