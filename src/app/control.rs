use std::time::{Duration, Instant};

/// Decides which graphics frames also advance the game.
/// The game advances at most once per `game_frame_duration`,
/// measured from the last update; a slow frame never causes
/// a burst of catch-up updates.
pub struct Control {
    game_frame_duration: Duration,
    last_update: Instant,

    // counting game frames performed since the last reset
    game_frame_num: usize,
}

impl Control {
    pub fn new(game_frame_duration: Duration, now: Instant) -> Self {
        Self {
            game_frame_duration,
            last_update: now,
            game_frame_num: 0,
        }
    }

    pub fn game_frame_num(&self) -> usize {
        self.game_frame_num
    }

    // called once per graphics frame in update()
    pub fn can_update(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_update) < self.game_frame_duration {
            return false;
        }
        self.last_update = now;
        self.game_frame_num += 1;
        true
    }

    /// Start a fresh interval, the next update happens one
    /// full game frame after `now`
    pub fn reset(&mut self, now: Instant) {
        self.last_update = now;
        self.game_frame_num = 0;
    }
}
