pub use cell_dim::CellDim;
pub use dir::Dir;
pub use grid_point::{GridDim, GridPoint};
pub use point::Point;

mod cell_dim;
mod dir;
mod grid_point;
mod point;
