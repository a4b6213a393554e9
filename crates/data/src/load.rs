use crate::schema::{CardPool, Category, DifficultySummary, GameConfig};
use anyhow::{bail, Context};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub const CARDS_FILE: &str = "cards.json";
pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug)]
pub struct PoolLoadReport {
    pub pool: CardPool,
    pub warnings: Vec<String>,
}

pub fn load_card_pool(path: &Path) -> anyhow::Result<CardPool> {
    Ok(load_card_pool_report(path)?.pool)
}

/// Loads the pool and reports suspicious entries without rejecting them.
pub fn load_card_pool_report(path: &Path) -> anyhow::Result<PoolLoadReport> {
    let pool: CardPool = load_json(path)?;
    if pool.difficulties.is_empty() {
        bail!("{}: no difficulties defined", path.display());
    }
    let warnings = pool_warnings(&pool);
    for warning in &warnings {
        log::warn!("{}: {}", path.display(), warning);
    }
    log::info!(
        "loaded {} action cards across {} difficulties from {}",
        pool.total_actions(),
        pool.difficulties.len(),
        path.display()
    );
    Ok(PoolLoadReport { pool, warnings })
}

/// Reads the game settings. A missing file means defaults.
pub fn load_game_config(path: &Path) -> anyhow::Result<GameConfig> {
    if !path.exists() {
        log::debug!("{} not found, using default settings", path.display());
        return Ok(GameConfig::default());
    }
    let config: GameConfig = load_json(path)?;
    validate_config(&config).with_context(|| format!("validate {}", path.display()))?;
    Ok(config)
}

pub fn validate_config(config: &GameConfig) -> anyhow::Result<()> {
    if config.card_count == 0 {
        bail!("card_count must be positive");
    }
    if !(0.0..=1.0).contains(&config.min_quota_ratio) {
        bail!(
            "min_quota_ratio must be within 0..=1, got {}",
            config.min_quota_ratio
        );
    }
    if config.min_players == 0 {
        bail!("min_players must be at least 1");
    }
    Ok(())
}

pub fn summarize_pool(pool: &CardPool) -> Vec<DifficultySummary> {
    let mut out: Vec<DifficultySummary> = pool
        .difficulties
        .iter()
        .map(|(key, entry)| {
            let mut summary = DifficultySummary {
                key: key.clone(),
                ..DifficultySummary::default()
            };
            for card in &entry.action {
                match card.category() {
                    Category::Single => summary.single += 1,
                    Category::TimeBased => summary.time_based += 1,
                    Category::Duel1v1 => summary.duel += 1,
                    Category::GroupDuel => summary.group += 1,
                }
            }
            summary
        })
        .collect();
    out.sort_by(|a, b| a.key.cmp(&b.key));
    out
}

fn pool_warnings(pool: &CardPool) -> Vec<String> {
    let mut warnings = Vec::new();
    for key in pool.keys() {
        let cards = &pool.difficulties[key].action;
        if cards.is_empty() {
            warnings.push(format!("difficulty {key} has no action cards"));
        }
        for (idx, card) in cards.iter().enumerate() {
            if card.text.trim().is_empty() {
                warnings.push(format!("difficulty {key} card {idx} has empty text"));
            }
        }
    }
    warnings
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Card, DifficultyCards};
    use std::collections::HashMap;

    fn pool_of(entries: &[(&str, Vec<Card>)]) -> CardPool {
        let difficulties: HashMap<String, DifficultyCards> = entries
            .iter()
            .map(|(key, cards)| {
                (
                    key.to_string(),
                    DifficultyCards {
                        action: cards.clone(),
                    },
                )
            })
            .collect();
        CardPool { difficulties }
    }

    #[test]
    fn warns_on_empty_difficulty_and_blank_text() {
        let pool = pool_of(&[
            ("easy", vec![Card::new("Bois", 1), Card::new("  ", 1)]),
            ("hard", Vec::new()),
        ]);
        let warnings = pool_warnings(&pool);
        assert_eq!(
            warnings,
            vec![
                "difficulty easy card 1 has empty text".to_string(),
                "difficulty hard has no action cards".to_string(),
            ]
        );
    }

    #[test]
    fn summary_counts_categories_sorted_by_key() {
        let pool = pool_of(&[
            (
                "medium",
                vec![
                    Card::new("Bois", 1),
                    Card::new("Danse pendant 10 secondes", 1),
                    Card::new("Duel de regards", 1),
                    Card::new("Tout le monde boit", 1),
                    Card::new("Tout le monde trinque", 1),
                ],
            ),
            ("easy", vec![Card::new("Bois", 1)]),
        ]);
        let summary = summarize_pool(&pool);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].key, "easy");
        assert_eq!(summary[0].total(), 1);
        assert_eq!(summary[1].single, 1);
        assert_eq!(summary[1].time_based, 1);
        assert_eq!(summary[1].duel, 1);
        assert_eq!(summary[1].count(Category::GroupDuel), 2);
    }

    #[test]
    fn config_validation_rejects_bad_values() {
        let mut config = GameConfig::default();
        assert!(validate_config(&config).is_ok());
        config.min_quota_ratio = 1.5;
        assert!(validate_config(&config).is_err());
        config.min_quota_ratio = 0.1;
        config.card_count = 0;
        assert!(validate_config(&config).is_err());
        config.card_count = 10;
        config.min_players = 0;
        let err = validate_config(&config).expect_err("min players");
        assert!(err.to_string().contains("min_players"));
    }
}
