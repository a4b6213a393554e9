use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Setup,
    Playing,
    Finished,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Standing {
    pub player: String,
    pub sips: u32,
}

/// Insertion-ordered roster with one sip counter per player. Players and
/// scores are only ever added or removed together; the board is only built
/// through `add`, never deserialized.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ScoreBoard {
    players: Vec<String>,
    scores: HashMap<String, u32>,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.scores.contains_key(name)
    }

    pub fn score(&self, name: &str) -> Option<u32> {
        self.scores.get(name).copied()
    }

    /// Returns false when the name is already seated.
    pub fn add(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.players.push(name.to_string());
        self.scores.insert(name.to_string(), 0);
        true
    }

    pub fn remove(&mut self, name: &str) -> bool {
        if self.scores.remove(name).is_none() {
            return false;
        }
        self.players.retain(|player| player != name);
        true
    }

    /// Adds sips to a player's total and returns the new total.
    pub fn add_sips(&mut self, name: &str, sips: u32) -> Option<u32> {
        let entry = self.scores.get_mut(name)?;
        *entry = entry.saturating_add(sips);
        Some(*entry)
    }

    pub fn reset_scores(&mut self) {
        for score in self.scores.values_mut() {
            *score = 0;
        }
    }

    pub fn clear(&mut self) {
        self.players.clear();
        self.scores.clear();
    }

    /// Highest total first; ties keep roster order.
    pub fn standings(&self) -> Vec<Standing> {
        let mut out: Vec<Standing> = self
            .players
            .iter()
            .map(|player| Standing {
                player: player.clone(),
                sips: self.scores.get(player).copied().unwrap_or(0),
            })
            .collect();
        out.sort_by(|a, b| b.sips.cmp(&a.sips));
        out
    }
}
