/// Pixel size of a single square grid cell
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CellDim {
    pub side: f32,
}

impl From<f32> for CellDim {
    fn from(side: f32) -> Self {
        Self { side }
    }
}
