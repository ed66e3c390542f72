use crate::basic::Dir;
use std::collections::VecDeque;

/// Direction changes requested by the player that have not been
/// applied yet, oldest first. One is applied per game frame.
#[derive(Clone, Debug, Default)]
pub struct DirectionQueue {
    queue: VecDeque<Dir>,
}

impl DirectionQueue {
    // How many moves ahead a player can make (this allows quick 180° turns)
    pub const LIMIT: usize = 3;

    pub fn new() -> Self {
        Self {
            queue: VecDeque::with_capacity(Self::LIMIT),
        }
    }

    /// Returns whether `new_dir` was queued. `current` is the
    /// direction the snake is moving in right now.
    pub fn enqueue(&mut self, current: Dir, new_dir: Dir) -> bool {
        // deny 180deg turns and repeated entries
        let accept = match self.queue.back() {
            None => new_dir != -current,
            Some(&last_dir) => {
                self.queue.len() < Self::LIMIT && new_dir != last_dir && new_dir != -last_dir
            }
        };
        if accept {
            self.queue.push_back(new_dir);
        }
        accept
    }

    pub fn pop(&mut self) -> Option<Dir> {
        self.queue.pop_front()
    }

    pub fn clear(&mut self) {
        self.queue.clear()
    }
}

#[cfg(test)]
impl DirectionQueue {
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Dir> + '_ {
        self.queue.iter().copied()
    }
}
