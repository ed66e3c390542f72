use crate::{
    app::game::direction_queue::DirectionQueue,
    basic::{Dir, GridDim, GridPoint},
};
use rand::Rng;
use std::collections::VecDeque;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum State {
    Playing,
    GameOver,
}

/// What a single game frame did
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Tick {
    Moved,
    Ate,
    Crashed,
    /// The snake covers the whole board, there is nowhere left to put food
    BoardFilled,
    /// Nothing happens while the game is over
    Frozen,
}

/// Whether a head moving to `new_head` would leave the board or run
/// into the snake (including the tail cell that is about to move)
pub fn collides<'a>(
    new_head: GridPoint,
    snake: impl IntoIterator<Item = &'a GridPoint>,
    dim: GridDim,
) -> bool {
    !dim.contains(new_head) || snake.into_iter().any(|&segment| segment == new_head)
}

pub struct GameState {
    dim: GridDim,
    // head first, never empty
    snake: VecDeque<GridPoint>,
    dir: Dir,
    queue: DirectionQueue,
    food: GridPoint,
    state: State,
}

impl GameState {
    pub const START_DIR: Dir = Dir::R;

    pub fn new(dim: GridDim, rng: &mut impl Rng) -> Self {
        let mut game_state = Self {
            dim,
            snake: VecDeque::new(),
            dir: Self::START_DIR,
            queue: DirectionQueue::new(),
            // replaced immediately by restart()
            food: dim.center(),
            state: State::Playing,
        };
        game_state.restart(rng);
        game_state
    }

    /// Single segment in the middle of the board moving right
    pub fn restart(&mut self, rng: &mut impl Rng) {
        self.snake.clear();
        self.snake.push_back(self.dim.center());
        self.dir = Self::START_DIR;
        self.queue.clear();
        self.state = State::Playing;
        // a single segment never fills a valid board
        self.spawn_food(rng);
    }

    /// Queue a change of direction to be applied on a later game frame
    pub fn steer(&mut self, new_dir: Dir) -> bool {
        if self.state == State::GameOver {
            return false;
        }
        self.queue.enqueue(self.dir, new_dir)
    }

    pub fn tick(&mut self, rng: &mut impl Rng) -> Tick {
        if self.state == State::GameOver {
            return Tick::Frozen;
        }

        if let Some(new_dir) = self.queue.pop() {
            self.dir = new_dir;
        }

        let new_head = self.head().translate(self.dir);
        if collides(new_head, &self.snake, self.dim) {
            self.state = State::GameOver;
            return Tick::Crashed;
        }

        self.snake.push_front(new_head);
        if new_head != self.food {
            self.snake.pop_back();
            return Tick::Moved;
        }

        if self.spawn_food(rng) {
            Tick::Ate
        } else {
            self.state = State::GameOver;
            Tick::BoardFilled
        }
    }

    /// Place food on a uniformly random cell not covered by the snake.
    /// Cells are drawn until a free one is found, which is fast on a
    /// sparse board but has no upper bound on the number of attempts.
    /// Returns false, leaving the food where it was, when the snake
    /// covers every cell.
    fn spawn_food(&mut self, rng: &mut impl Rng) -> bool {
        if self.snake.len() >= self.dim.cell_count() {
            return false;
        }
        loop {
            let food = GridPoint::random_in(self.dim, rng);
            if !self.snake.contains(&food) {
                self.food = food;
                return true;
            }
        }
    }

    pub fn head(&self) -> GridPoint {
        self.snake[0]
    }

    pub fn snake(&self) -> impl Iterator<Item = GridPoint> + '_ {
        self.snake.iter().copied()
    }

    pub fn dir(&self) -> Dir {
        self.dir
    }

    pub fn food(&self) -> GridPoint {
        self.food
    }

    pub fn is_game_over(&self) -> bool {
        self.state == State::GameOver
    }

    /// Apples eaten since the last restart
    pub fn score(&self) -> usize {
        self.snake.len() - 1
    }
}

#[cfg(test)]
impl GameState {
    pub(super) fn len(&self) -> usize {
        self.snake.len()
    }

    pub(super) fn queue(&self) -> &DirectionQueue {
        &self.queue
    }

    pub(super) fn state(&self) -> State {
        self.state
    }

    pub(super) fn with_snake(dim: GridDim, snake: &[GridPoint], dir: Dir, food: GridPoint) -> Self {
        assert!(!snake.is_empty());
        Self {
            dim,
            snake: snake.iter().copied().collect(),
            dir,
            queue: DirectionQueue::new(),
            food,
            state: State::Playing,
        }
    }
}
