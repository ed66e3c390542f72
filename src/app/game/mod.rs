pub use state::GameState;

use crate::app::{
    app_error::{AppError, AppResult},
    control::Control,
    keyboard_control::Controls,
    prefs::Prefs,
    renderer::Renderer,
};
use ggez::{event::EventHandler, input::keyboard::KeyCode, Context};
use log::{debug, info};
use rand::prelude::*;
use state::Tick;
use std::time::Instant;

mod direction_queue;
mod state;

pub struct Game {
    control: Control,
    controls: Controls,
    game_state: GameState,
    renderer: Renderer,

    rng: ThreadRng,
}

impl Game {
    pub fn new(prefs: &Prefs, controls: Controls, renderer: Renderer) -> Self {
        let mut rng = thread_rng();
        let game_state = GameState::new(prefs.grid_dim(), &mut rng);
        info!(
            "new game on a {}x{} board at {} ticks per second",
            prefs.grid_dim().cols,
            prefs.grid_dim().rows,
            prefs.ticks_per_second,
        );

        Self {
            control: Control::new(prefs.tick_duration(), Instant::now()),
            controls,
            game_state,
            renderer,

            rng,
        }
    }

    fn restart(&mut self, now: Instant) {
        self.game_state.restart(&mut self.rng);
        self.control.reset(now);
        info!("restart");
    }

    /// Everything update() does for one graphics frame, `is_pressed`
    /// reports which keys are held during that frame
    fn frame(&mut self, is_pressed: impl Fn(KeyCode) -> bool + Copy, now: Instant) {
        if self.game_state.is_game_over() {
            if self.controls.restart_held(is_pressed) {
                self.restart(now);
            }
            return;
        }

        if let Some(dir) = self.controls.held_dir(is_pressed) {
            self.game_state.steer(dir);
        }

        if self.control.can_update(now) {
            self.advance();
        }
    }

    fn advance(&mut self) {
        match self.game_state.tick(&mut self.rng) {
            Tick::Moved | Tick::Frozen => (),
            Tick::Ate => debug!(
                "ate at {:?}, next food at {:?}",
                self.game_state.head(),
                self.game_state.food()
            ),
            Tick::Crashed => info!(
                "game over: crashed at {:?} after {} game frames, score {}",
                self.game_state.head().translate(self.game_state.dir()),
                self.control.game_frame_num(),
                self.game_state.score(),
            ),
            Tick::BoardFilled => {
                info!("game over: board filled, score {}", self.game_state.score())
            }
        }
    }
}

impl EventHandler<AppError> for Game {
    fn update(&mut self, ctx: &mut Context) -> AppResult {
        let keyboard = &ctx.keyboard;
        self.frame(|key| keyboard.is_key_pressed(key), Instant::now());
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> AppResult {
        self.renderer.draw(ctx, &self.game_state)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        app::{palette::Palette, renderer::DEFAULT_FONT},
        basic::{Dir, GridPoint, Point},
    };
    use std::time::Duration;

    const TICK: Duration = Duration::from_millis(100);

    fn nothing_held(_: KeyCode) -> bool {
        false
    }

    /// A 32x24 game whose snake sits at `snake` heading `dir`,
    /// with the timer starting at `start`
    fn game_at(snake: &[GridPoint], dir: Dir, start: Instant) -> Game {
        let prefs = Prefs::default();
        let renderer = Renderer::new(
            Point { x: prefs.canvas_width, y: prefs.canvas_height },
            prefs.cell_dim(),
            Palette::default(),
            DEFAULT_FONT.to_string(),
        );
        let mut game = Game::new(&prefs, Controls::default(), renderer);
        game.control = Control::new(TICK, start);
        game.game_state = GameState::with_snake(prefs.grid_dim(), snake, dir, GridPoint { x: 20, y: 20 });
        game
    }

    #[test]
    fn test_frames_between_ticks_only_queue_input() {
        let start = Instant::now();
        let mut game = game_at(&[GridPoint { x: 5, y: 5 }], Dir::R, start);

        game.frame(|key| key == KeyCode::S, start + TICK / 2);
        assert_eq!(game.game_state.head(), GridPoint { x: 5, y: 5 });
        assert_eq!(game.game_state.queue().len(), 1);

        game.frame(nothing_held, start + TICK);
        assert_eq!(game.game_state.head(), GridPoint { x: 5, y: 6 });
        assert_eq!(game.game_state.dir(), Dir::D);
    }

    #[test]
    fn test_direction_keys_ignored_while_game_over() {
        let start = Instant::now();
        let mut game = game_at(&[GridPoint { x: 0, y: 0 }], Dir::L, start);

        game.frame(nothing_held, start + TICK);
        assert!(game.game_state.is_game_over());

        game.frame(|key| key == KeyCode::S, start + TICK * 2);
        game.frame(|key| key == KeyCode::W, start + TICK * 3);
        assert!(game.game_state.is_game_over());
        assert!(game.game_state.queue().is_empty());
        assert_eq!(game.game_state.head(), GridPoint { x: 0, y: 0 });
    }

    #[test]
    fn test_restart_resets_timer() {
        let start = Instant::now();
        let mut game = game_at(&[GridPoint { x: 0, y: 0 }], Dir::L, start);
        game.frame(nothing_held, start + TICK);
        assert!(game.game_state.is_game_over());

        let restart_at = start + TICK * 10;
        game.frame(|key| key == KeyCode::Escape, restart_at);
        assert!(!game.game_state.is_game_over());
        assert_eq!(game.control.game_frame_num(), 0);
        let center = GridPoint { x: 16, y: 12 };
        assert_eq!(game.game_state.head(), center);

        // a full interval has long passed since the crash, but not since the restart
        game.frame(nothing_held, restart_at + TICK / 2);
        assert_eq!(game.game_state.head(), center);

        game.frame(nothing_held, restart_at + TICK);
        assert_eq!(game.game_state.head(), GridPoint { x: 17, y: 12 });
    }
}
