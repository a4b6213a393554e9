use crate::{
    resolve_target, timer_duration_or, Card, CardAction, CardPool, CardView, Category, Countdown,
    DifficultyKey, Event, EventBus, GameConfig, GameType, PenaltyTarget, Phase, RngState,
    ScoreBoard, SelectionWarning, Standing, MIN_DIFFICULTY,
};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("add at least one player")]
    NoPlayers,
    #[error("need at least {need} players, have {have}")]
    NotEnoughPlayers { have: usize, need: usize },
    #[error("difficulty {0} is out of range")]
    InvalidDifficulty(u8),
    #[error("no cards for difficulty {0}")]
    UnknownDifficulty(String),
    #[error("card count must be positive")]
    InvalidCardCount,
    #[error("invalid phase: {0:?}")]
    InvalidPhase(Phase),
    #[error("unknown player {0}")]
    UnknownPlayer(String),
    #[error("card data not loaded")]
    DataUnavailable,
}

impl SessionError {
    /// Errors the player can fix from the setup screen.
    pub fn is_validation(&self) -> bool {
        !matches!(self, SessionError::DataUnavailable)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Accept,
    Refuse,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwipeOutcome {
    /// Player charged and the sips added, on a refused card.
    pub penalty: Option<(String, u32)>,
    pub finished: bool,
}

#[derive(Debug)]
pub struct Session {
    pub config: GameConfig,
    pub rng: RngState,
    board: ScoreBoard,
    game_type: GameType,
    difficulty: u8,
    card_count: usize,
    deck: Vec<Card>,
    cursor: usize,
    phase: Phase,
    shown: Option<CardView>,
    countdown: Option<Countdown>,
    warnings: Vec<SelectionWarning>,
}

impl Session {
    pub fn new(config: GameConfig, rng: RngState) -> Self {
        let card_count = config.card_count;
        Self {
            config,
            rng,
            board: ScoreBoard::new(),
            game_type: GameType::Casual,
            difficulty: MIN_DIFFICULTY,
            card_count,
            deck: Vec::new(),
            cursor: 0,
            phase: Phase::Setup,
            shown: None,
            countdown: None,
            warnings: Vec::new(),
        }
    }

    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::new(config, RngState::from_seed(seed))
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn players(&self) -> &[String] {
        self.board.players()
    }

    pub fn board(&self) -> &ScoreBoard {
        &self.board
    }

    pub fn score(&self, player: &str) -> Option<u32> {
        self.board.score(player)
    }

    pub fn game_type(&self) -> GameType {
        self.game_type
    }

    pub fn difficulty(&self) -> u8 {
        self.difficulty
    }

    pub fn card_count(&self) -> usize {
        self.card_count
    }

    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current_view(&self) -> Option<&CardView> {
        self.shown.as_ref()
    }

    pub fn countdown(&self) -> Option<&Countdown> {
        self.countdown.as_ref()
    }

    /// Selection warnings from the last `start`.
    pub fn warnings(&self) -> &[SelectionWarning] {
        &self.warnings
    }

    pub fn standings(&self) -> Vec<Standing> {
        self.board.standings()
    }

    pub fn difficulty_key(&self) -> Result<DifficultyKey, SessionError> {
        DifficultyKey::new(self.game_type, self.difficulty)
    }

    /// Seats a player. Blank or already seated names are ignored. The roster
    /// is frozen while a game is running.
    pub fn add_player(
        &mut self,
        name: &str,
        events: &mut EventBus,
    ) -> Result<bool, SessionError> {
        self.ensure_not_playing()?;
        let name = name.trim();
        if name.is_empty() || !self.board.add(name) {
            return Ok(false);
        }
        events.push(Event::PlayerAdded {
            name: name.to_string(),
        });
        Ok(true)
    }

    pub fn remove_player(
        &mut self,
        name: &str,
        events: &mut EventBus,
    ) -> Result<bool, SessionError> {
        self.ensure_not_playing()?;
        if !self.board.remove(name) {
            return Ok(false);
        }
        events.push(Event::PlayerRemoved {
            name: name.to_string(),
        });
        Ok(true)
    }

    pub fn set_game_type(&mut self, game_type: GameType) -> Result<(), SessionError> {
        self.ensure_not_playing()?;
        self.game_type = game_type;
        Ok(())
    }

    pub fn set_difficulty(&mut self, level: u8) -> Result<(), SessionError> {
        self.ensure_not_playing()?;
        DifficultyKey::new(self.game_type, level)?;
        self.difficulty = level;
        Ok(())
    }

    pub fn set_card_count(&mut self, count: usize) -> Result<(), SessionError> {
        self.ensure_not_playing()?;
        if count == 0 {
            return Err(SessionError::InvalidCardCount);
        }
        self.card_count = count;
        Ok(())
    }

    /// Validates the setup, draws a balanced deck and shows its first card.
    /// Only allowed from setup or after a finished game; on error nothing
    /// changes.
    pub fn start(
        &mut self,
        pool: Option<&CardPool>,
        requested: usize,
        events: &mut EventBus,
    ) -> Result<(), SessionError> {
        self.ensure_not_playing()?;
        if self.board.is_empty() {
            return Err(SessionError::NoPlayers);
        }
        if self.board.len() < self.config.min_players {
            return Err(SessionError::NotEnoughPlayers {
                have: self.board.len(),
                need: self.config.min_players,
            });
        }
        if requested == 0 {
            return Err(SessionError::InvalidCardCount);
        }
        let Some(pool) = pool else {
            log::error!("cannot start session: card data not loaded");
            return Err(SessionError::DataUnavailable);
        };
        let key = self.difficulty_key()?;
        let actions = pool.actions(&key)?;

        let selection = self.config.selector().select(actions, requested, &mut self.rng);
        log::info!(
            "session started: key={} requested={} drawn={} seed={}",
            key,
            requested,
            selection.cards.len(),
            self.rng.seed()
        );
        self.board.reset_scores();
        self.deck = selection.cards;
        self.warnings = selection.warnings;
        self.cursor = 0;
        self.phase = Phase::Playing;
        events.push(Event::SessionStarted {
            key: key.key(),
            requested,
            cards: self.deck.len(),
        });
        self.show_current(events);
        Ok(())
    }

    /// Moves past the current card; reaching the end finishes the session.
    pub fn advance(&mut self, events: &mut EventBus) -> Result<(), SessionError> {
        if self.phase != Phase::Playing {
            return Err(SessionError::InvalidPhase(self.phase));
        }
        self.cursor = (self.cursor + 1).min(self.deck.len());
        self.show_current(events);
        Ok(())
    }

    pub fn apply_penalty(
        &mut self,
        player: &str,
        sips: u32,
        events: &mut EventBus,
    ) -> Result<u32, SessionError> {
        let total = self
            .board
            .add_sips(player, sips)
            .ok_or_else(|| SessionError::UnknownPlayer(player.to_string()))?;
        events.push(Event::PenaltyApplied {
            player: player.to_string(),
            sips,
            total,
        });
        Ok(total)
    }

    /// Resolves the current card. A refusal charges the card's penalty before
    /// the next card is shown.
    pub fn swipe(
        &mut self,
        swipe: Swipe,
        events: &mut EventBus,
    ) -> Result<SwipeOutcome, SessionError> {
        if self.phase != Phase::Playing {
            return Err(SessionError::InvalidPhase(self.phase));
        }
        let mut penalty = None;
        if swipe == Swipe::Refuse {
            let sips = self.deck[self.cursor].penalty_sips;
            if let Some(player) = self.penalized_player() {
                self.apply_penalty(&player, sips, events)?;
                penalty = Some((player, sips));
            }
        }
        self.advance(events)?;
        Ok(SwipeOutcome {
            penalty,
            finished: self.phase == Phase::Finished,
        })
    }

    /// One second of the active countdown. Returns the value to display.
    pub fn tick(&mut self, events: &mut EventBus) -> Option<u32> {
        let countdown = self.countdown.as_mut()?;
        match countdown.tick() {
            Some(remaining) => {
                events.push(Event::TimerTicked { remaining });
                Some(remaining)
            }
            None => {
                self.countdown = None;
                events.push(Event::TimerExpired);
                None
            }
        }
    }

    /// Back to an empty setup: roster, scores, deck and options are cleared.
    pub fn reset(&mut self, events: &mut EventBus) {
        self.board.clear();
        self.deck.clear();
        self.warnings.clear();
        self.cursor = 0;
        self.shown = None;
        self.countdown = None;
        self.game_type = GameType::Casual;
        self.difficulty = MIN_DIFFICULTY;
        self.card_count = self.config.card_count;
        self.phase = Phase::Setup;
        events.push(Event::SessionReset);
    }

    fn ensure_not_playing(&self) -> Result<(), SessionError> {
        if self.phase == Phase::Playing {
            return Err(SessionError::InvalidPhase(self.phase));
        }
        Ok(())
    }

    fn penalized_player(&mut self) -> Option<String> {
        if self.config.penalty_target == PenaltyTarget::Displayed {
            let shown = self
                .shown
                .as_ref()
                .and_then(CardView::target)
                .and_then(|target| target.single_player())
                .filter(|player| self.board.contains(player));
            if let Some(player) = shown {
                return Some(player.to_string());
            }
        }
        self.rng.choose(self.board.players()).cloned()
    }

    fn show_current(&mut self, events: &mut EventBus) {
        // a new card always replaces the previous countdown
        self.countdown = None;
        let Some(card) = self.deck.get(self.cursor) else {
            self.shown = None;
            self.phase = Phase::Finished;
            log::info!("session finished after {} cards", self.deck.len());
            events.push(Event::SessionFinished);
            return;
        };
        let category = card.category();
        let action = match category {
            Category::TimeBased => {
                let secs = timer_duration_or(&card.text, self.config.default_timer_secs);
                self.countdown = Some(Countdown::start(secs));
                CardAction::Timer { secs }
            }
            _ => CardAction::Target(resolve_target(
                category,
                self.board.players(),
                &mut self.rng,
            )),
        };
        let view = CardView::new(self.cursor, self.deck.len(), card, action);
        events.push(Event::CardShown {
            index: self.cursor,
            total: self.deck.len(),
            category,
        });
        if let CardAction::Timer { secs } = view.action {
            events.push(Event::TimerStarted { secs });
        }
        self.shown = Some(view);
    }
}
