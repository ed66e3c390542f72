use crate::basic::{CellDim, GridDim};
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug)]
pub struct PrefsError(pub Box<Prefs>, pub &'static str);

impl Display for PrefsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "invalid preferences: {}", self.1)?;
        writeln!(f, "prefs: {:?}", self.0)
    }
}

#[derive(Clone, Debug)]
pub struct Prefs {
    /// Logical canvas size in pixels, the window only scales it
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub cell_side: f32,

    pub ticks_per_second: f64,

    /// TTF font used for text, the one bundled with ggez when None
    pub font_path: Option<PathBuf>,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            canvas_width: 640.,
            canvas_height: 480.,
            cell_side: 20.,

            ticks_per_second: 6.,

            font_path: None,
        }
    }
}

// builder
impl Prefs {
    pub fn canvas(mut self, width: f32, height: f32) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    pub fn cell_side(mut self, side: f32) -> Self {
        self.cell_side = side;
        self
    }

    pub fn ticks_per_second(mut self, tps: f64) -> Self {
        self.ticks_per_second = tps;
        self
    }

    pub fn font_path(mut self, path: Option<PathBuf>) -> Self {
        self.font_path = path;
        self
    }
}

impl Prefs {
    pub fn validate(self) -> Result<Self, PrefsError> {
        let error = |prefs: Self, msg| Err(PrefsError(Box::new(prefs), msg));

        if !self.canvas_width.is_finite() || !self.canvas_height.is_finite() {
            return error(self, "canvas size must be finite");
        }
        if !(self.cell_side > 0.) || !self.cell_side.is_finite() {
            return error(self, "cell side must be positive");
        }
        if !(self.ticks_per_second > 0.)
            || !self.ticks_per_second.is_finite()
            || Duration::try_from_secs_f64(1. / self.ticks_per_second).is_err()
        {
            return error(self, "ticks per second must be a positive number");
        }
        let dim = self.grid_dim();
        if dim.cols < 1 || dim.rows < 1 {
            return error(self, "canvas must fit at least one cell in each direction");
        }
        if dim.cols.checked_mul(dim.rows).is_none() {
            return error(self, "board has too many cells");
        }
        Ok(self)
    }

    pub fn cell_dim(&self) -> CellDim {
        CellDim::from(self.cell_side)
    }

    pub fn grid_dim(&self) -> GridDim {
        GridDim::from_pixels(self.canvas_width, self.canvas_height, self.cell_dim())
    }

    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs_f64(1. / self.ticks_per_second)
    }
}
