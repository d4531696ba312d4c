use crate::events::Event;

/// Level plan: level `n` deals `n` decks, and exhausting the supply either
/// moves on to the next level or, at the final one, ends the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Levels {
    current: u32,
    final_level: u32,
    game_over: bool,
}

impl Levels {
    /// Starts at level 1. A `final_level` of 0 is treated as 1.
    pub fn new(final_level: u32) -> Self {
        Self { current: 1, final_level: final_level.max(1), game_over: false }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn final_level(&self) -> u32 {
        self.final_level
    }

    pub fn is_final(&self) -> bool {
        self.current >= self.final_level
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Number of decks dealt at `level`.
    pub fn decks_for_level(level: u32) -> usize {
        level as usize
    }

    /// The supply ran out: finish the current level and say what comes next.
    /// Once the game is over, further calls keep answering `RoundEnded`.
    pub fn on_supply_exhausted(&mut self) -> Event {
        if self.game_over || self.is_final() {
            if !self.game_over {
                log::info!("level {} finished, game over", self.current);
            }
            self.game_over = true;
            return Event::RoundEnded;
        }
        log::info!("level {} finished, moving to level {}", self.current, self.current + 1);
        self.current += 1;
        Event::RoundReset
    }
}

impl Default for Levels {
    fn default() -> Self {
        Self::new(2)
    }
}
