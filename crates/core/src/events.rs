use crate::Category;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    PlayerAdded { name: String },
    PlayerRemoved { name: String },
    SessionStarted {
        key: String,
        requested: usize,
        cards: usize,
    },
    CardShown {
        index: usize,
        total: usize,
        category: Category,
    },
    TimerStarted { secs: u32 },
    TimerTicked { remaining: u32 },
    TimerExpired,
    PenaltyApplied {
        player: String,
        sips: u32,
        total: u32,
    },
    SessionFinished,
    SessionReset,
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
