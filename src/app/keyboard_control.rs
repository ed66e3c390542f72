use crate::basic::Dir;
use ggez::input::keyboard::KeyCode::{self, *};

#[derive(Copy, Clone, Debug)]
pub struct Controls {
    pub u: KeyCode,
    pub d: KeyCode,
    pub l: KeyCode,
    pub r: KeyCode,
    pub restart: KeyCode,
}

impl Default for Controls {
    fn default() -> Self {
        Self { u: W, d: S, l: A, r: D, restart: Escape }
    }
}

impl Controls {
    /// The direction requested by the held keys, `is_pressed` is
    /// queried once per key. When several are held the first of
    /// up, down, left, right wins.
    pub fn held_dir(&self, is_pressed: impl Fn(KeyCode) -> bool) -> Option<Dir> {
        [(self.u, Dir::U), (self.d, Dir::D), (self.l, Dir::L), (self.r, Dir::R)]
            .into_iter()
            .find(|&(key, _)| is_pressed(key))
            .map(|(_, dir)| dir)
    }

    pub fn restart_held(&self, is_pressed: impl Fn(KeyCode) -> bool) -> bool {
        is_pressed(self.restart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_dir() {
        let controls = Controls::default();
        assert_eq!(controls.held_dir(|_| false), None);
        assert_eq!(controls.held_dir(|k| k == A), Some(Dir::L));
        assert_eq!(controls.held_dir(|k| k == D), Some(Dir::R));
        // priority order
        assert_eq!(controls.held_dir(|k| k == D || k == S), Some(Dir::D));
        assert_eq!(controls.held_dir(|k| k == W || k == A), Some(Dir::U));
        assert_eq!(controls.held_dir(|k| k == Escape), None);
    }

    #[test]
    fn test_restart_held() {
        let controls = Controls::default();
        assert!(controls.restart_held(|k| k == Escape));
        assert!(!controls.restart_held(|k| k == W));
    }
}
