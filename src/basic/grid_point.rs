use crate::basic::{CellDim, Dir, Point};
use rand::Rng;
use std::fmt::{Debug, Error, Formatter};

/// A cell of the playfield, valid cells are in `[0, cols) x [0, rows)`
#[derive(Eq, PartialEq, Copy, Clone, Add, Sub, Hash)]
pub struct GridPoint {
    pub x: isize,
    pub y: isize,
}

impl Debug for GridPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}

impl GridPoint {
    /// Top-left corner of the cell on the canvas
    pub fn to_point(self, cell_dim: CellDim) -> Point {
        Point {
            x: self.x as f32 * cell_dim.side,
            y: self.y as f32 * cell_dim.side,
        }
    }

    #[must_use]
    pub fn translate(self, dir: Dir) -> Self {
        self + dir.delta()
    }

    pub fn random_in(dim: GridDim, rng: &mut impl Rng) -> Self {
        Self {
            x: rng.gen_range(0..dim.cols),
            y: rng.gen_range(0..dim.rows),
        }
    }
}

/// Size of the playfield in cells
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct GridDim {
    pub cols: isize,
    pub rows: isize,
}

impl GridDim {
    /// Number of whole cells that fit in a canvas of the given pixel size
    pub fn from_pixels(width: f32, height: f32, cell_dim: CellDim) -> Self {
        Self {
            cols: (width / cell_dim.side) as isize,
            rows: (height / cell_dim.side) as isize,
        }
    }

    pub fn contains(self, point: GridPoint) -> bool {
        (0..self.cols).contains(&point.x) && (0..self.rows).contains(&point.y)
    }

    pub fn center(self) -> GridPoint {
        GridPoint { x: self.cols / 2, y: self.rows / 2 }
    }

    pub fn cell_count(self) -> usize {
        (self.cols * self.rows) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    const DIM: GridDim = GridDim { cols: 32, rows: 24 };

    #[test]
    fn test_contains() {
        assert!(DIM.contains(GridPoint { x: 0, y: 0 }));
        assert!(DIM.contains(GridPoint { x: 31, y: 23 }));
        assert!(!DIM.contains(GridPoint { x: -1, y: 0 }));
        assert!(!DIM.contains(GridPoint { x: 0, y: -1 }));
        assert!(!DIM.contains(GridPoint { x: 32, y: 5 }));
        assert!(!DIM.contains(GridPoint { x: 5, y: 24 }));
    }

    #[test]
    fn test_from_pixels() {
        let dim = GridDim::from_pixels(640., 480., CellDim::from(20.));
        assert_eq!(dim, DIM);
        assert_eq!(dim.center(), GridPoint { x: 16, y: 12 });
        assert_eq!(dim.cell_count(), 768);
    }

    #[test]
    fn test_random_in_stays_on_board() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(DIM.contains(GridPoint::random_in(DIM, &mut rng)));
        }
    }

    #[test]
    fn test_to_point() {
        let p = GridPoint { x: 3, y: 2 }.to_point(CellDim::from(20.));
        assert_eq!(p, Point { x: 60., y: 40. });
    }
}
