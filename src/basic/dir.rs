use std::ops::Neg;

use crate::basic::GridPoint;
use Dir::*;

// defined in clockwise order starting at U
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Dir {
    U,
    R,
    D,
    L,
}

impl Neg for Dir {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            U => D,
            R => L,
            D => U,
            L => R,
        }
    }
}

impl Dir {
    /// Unit step in grid coordinates, y grows downwards
    pub fn delta(self) -> GridPoint {
        match self {
            U => GridPoint { x: 0, y: -1 },
            R => GridPoint { x: 1, y: 0 },
            D => GridPoint { x: 0, y: 1 },
            L => GridPoint { x: -1, y: 0 },
        }
    }
}

#[cfg(test)]
impl Dir {
    // clockwise order starting from U
    pub fn iter() -> impl Iterator<Item = Self> {
        [U, R, D, L].iter().copied()
    }
}

#[test]
fn test_dir_reversal() {
    for dir in Dir::iter() {
        assert_ne!(dir, -dir);
        assert_eq!(-(-dir), dir);
        assert_eq!(dir.delta() + (-dir).delta(), GridPoint { x: 0, y: 0 });
    }
}
