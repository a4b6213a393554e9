use crate::{Card, SessionError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 3;

const CASUAL_KEYS: [&str; 3] = ["easy", "medium", "hard"];
const CASUAL_KEYS_FR: [&str; 3] = ["facile", "moyen", "difficile"];

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GameType {
    #[default]
    Casual,
    Caliente,
}

impl GameType {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "casual" => Some(GameType::Casual),
            "caliente" | "spicy" => Some(GameType::Caliente),
            _ => None,
        }
    }
}

/// Lookup key into the pool, derived from game type and level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyKey {
    game_type: GameType,
    level: u8,
}

impl DifficultyKey {
    pub fn new(game_type: GameType, level: u8) -> Result<Self, SessionError> {
        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&level) {
            return Err(SessionError::InvalidDifficulty(level));
        }
        Ok(Self { game_type, level })
    }

    pub fn game_type(&self) -> GameType {
        self.game_type
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn key(&self) -> String {
        match self.game_type {
            GameType::Casual => CASUAL_KEYS[usize::from(self.level - 1)].to_string(),
            GameType::Caliente => format!("spicy{}", self.level),
        }
    }

    /// Key used by the French source dataset.
    pub fn source_key(&self) -> String {
        match self.game_type {
            GameType::Casual => CASUAL_KEYS_FR[usize::from(self.level - 1)].to_string(),
            GameType::Caliente => format!("caliente{}", self.level),
        }
    }
}

impl fmt::Display for DifficultyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DifficultyCards {
    #[serde(default)]
    pub action: Vec<Card>,
}

/// `difficulties[key].action`, as shipped in the card data file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardPool {
    pub difficulties: HashMap<String, DifficultyCards>,
}

impl CardPool {
    pub fn actions(&self, key: &DifficultyKey) -> Result<&[Card], SessionError> {
        self.difficulties
            .get(&key.key())
            .or_else(|| self.difficulties.get(&key.source_key()))
            .map(|entry| entry.action.as_slice())
            .ok_or_else(|| SessionError::UnknownDifficulty(key.key()))
    }

    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.difficulties.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn total_actions(&self) -> usize {
        self.difficulties.values().map(|entry| entry.action.len()).sum()
    }
}
