use crate::{Category, RngState};
use serde::{Deserialize, Serialize};

/// Who a card is addressed to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum TargetPayload {
    None,
    Player(String),
    /// `second` is empty when the roster only holds one player.
    Duel {
        first: String,
        second: Option<String>,
    },
    Teams {
        team1: Vec<String>,
        team2: Vec<String>,
    },
}

impl TargetPayload {
    /// The one player a card names, if it names exactly one.
    pub fn single_player(&self) -> Option<&str> {
        match self {
            TargetPayload::Player(name) => Some(name.as_str()),
            _ => None,
        }
    }
}

pub fn resolve_target(category: Category, roster: &[String], rng: &mut RngState) -> TargetPayload {
    match category {
        Category::TimeBased => TargetPayload::None,
        Category::Single => match rng.choose(roster) {
            Some(name) => TargetPayload::Player(name.clone()),
            None => TargetPayload::None,
        },
        Category::Duel1v1 => {
            let mut picked = pick_distinct(roster, 2, rng).into_iter();
            match picked.next() {
                Some(first) => TargetPayload::Duel {
                    first,
                    second: picked.next(),
                },
                None => TargetPayload::None,
            }
        }
        Category::GroupDuel => {
            let (team1, team2) = split_teams(roster, rng);
            TargetPayload::Teams { team1, team2 }
        }
    }
}

/// Up to `count` distinct players, uniformly without replacement.
pub fn pick_distinct(roster: &[String], count: usize, rng: &mut RngState) -> Vec<String> {
    let mut pool = roster.to_vec();
    rng.shuffle(&mut pool);
    pool.truncate(count);
    pool
}

/// Shuffled roster cut at `ceil(n / 2)`; the first team takes the odd player.
pub fn split_teams(roster: &[String], rng: &mut RngState) -> (Vec<String>, Vec<String>) {
    let mut shuffled = roster.to_vec();
    rng.shuffle(&mut shuffled);
    let mid = shuffled.len().div_ceil(2);
    let team2 = shuffled.split_off(mid);
    (shuffled, team2)
}
