use serde::{Deserialize, Serialize};

/// Cooperative one-second countdown for timed cards. It only drives a display
/// value; nothing in the score or deck depends on it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Countdown {
    total: u32,
    remaining: u32,
    expired: bool,
}

impl Countdown {
    pub fn start(secs: u32) -> Self {
        Self {
            total: secs,
            remaining: secs,
            expired: false,
        }
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        !self.expired
    }

    /// Advances one second and returns the value to display. Ticking past
    /// zero expires the countdown and yields `None` from then on.
    pub fn tick(&mut self) -> Option<u32> {
        if self.expired {
            return None;
        }
        if self.remaining == 0 {
            self.expired = true;
            return None;
        }
        self.remaining -= 1;
        Some(self.remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_to_zero_then_expires() {
        let mut countdown = Countdown::start(2);
        assert_eq!(countdown.remaining(), 2);
        assert_eq!(countdown.tick(), Some(1));
        assert_eq!(countdown.tick(), Some(0));
        assert!(countdown.is_running());
        assert_eq!(countdown.tick(), None);
        assert!(!countdown.is_running());
        assert_eq!(countdown.tick(), None);
        assert_eq!(countdown.total(), 2);
    }

    #[test]
    fn zero_length_expires_on_first_tick() {
        let mut countdown = Countdown::start(0);
        assert_eq!(countdown.tick(), None);
        assert!(!countdown.is_running());
    }
}
