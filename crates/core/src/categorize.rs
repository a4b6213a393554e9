//! Text rules that turn a card into a [`Category`] and a countdown length.

use crate::Category;
use regex::Regex;
use std::sync::LazyLock;

pub const DEFAULT_TIMER_SECS: u32 = 30;

static TIMED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:pendant|\bfor)\s+([0-9]+)\s*(seconde|minute|s|m)")
        .expect("timed pattern")
});

static DUEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(vs|versus|contre|duel|battle|challenge|race|qui|compare|plus|meilleur)")
        .expect("duel pattern")
});

static GROUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(chaque joueur|tous les|group|team|équipe|ensemble|tout le monde)")
        .expect("group pattern")
});

/// Classifies a card by its text. First matching rule wins:
/// timed, then duel, then group, else single.
pub fn categorize(text: &str) -> Category {
    if TIMED.is_match(text) {
        Category::TimeBased
    } else if DUEL.is_match(text) {
        Category::Duel1v1
    } else if GROUP.is_match(text) {
        Category::GroupDuel
    } else {
        Category::Single
    }
}

/// Seconds named by a "pendant N unit" (or "for N unit") phrase, if the text has one.
pub fn parse_timer(text: &str) -> Option<u32> {
    let caps = TIMED.captures(text)?;
    // digits only, so a parse failure means overflow
    let value = caps[1].parse::<u32>().unwrap_or(u32::MAX);
    let unit = caps[2].chars().next()?.to_lowercase().next()?;
    if unit == 'm' {
        Some(value.saturating_mul(60))
    } else {
        Some(value)
    }
}

pub fn timer_duration(text: &str) -> u32 {
    timer_duration_or(text, DEFAULT_TIMER_SECS)
}

pub fn timer_duration_or(text: &str, default_secs: u32) -> u32 {
    parse_timer(text).unwrap_or(default_secs)
}
