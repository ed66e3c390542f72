use crate::app::prefs::PrefsError;
use ggez::GameError;
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    io,
};

/// What went wrong while starting the game
#[derive(Debug)]
pub enum Cause {
    Graphics(GameError),
    Prefs(PrefsError),
    Io(io::Error),
}

impl Display for Cause {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Cause::Graphics(e) => write!(f, "graphics: {}", e),
            Cause::Prefs(e) => write!(f, "{}", e),
            Cause::Io(e) => write!(f, "io: {}", e),
        }
    }
}

/// A startup failure plus the steps that led to it, outermost last
#[derive(Debug)]
#[must_use]
pub struct AppError {
    cause: Cause,
    context: Vec<String>,
}

macro_rules! impl_from_cause {
    ($source:ty => $variant:ident) => {
        impl From<$source> for AppError {
            fn from(e: $source) -> Self {
                Self { cause: Cause::$variant(e), context: vec![] }
            }
        }
    };
}

impl_from_cause!(GameError => Graphics);
impl_from_cause!(PrefsError => Prefs);
impl_from_cause!(io::Error => Io);

impl AppError {
    pub fn while_doing(mut self, step: impl Into<String>) -> Self {
        self.context.push(step.into());
        self
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cause)?;
        for step in &self.context {
            write!(f, "\n  while {}", step)?;
        }
        Ok(())
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Cause::Graphics(e) => Some(e),
            Cause::Io(e) => Some(e),
            Cause::Prefs(_) => None,
        }
    }
}

pub type AppResult<T = ()> = Result<T, AppError>;

pub trait WhileDoing {
    fn while_doing(self, step: impl Into<String>) -> Self;
}

impl<T> WhileDoing for AppResult<T> {
    fn while_doing(self, step: impl Into<String>) -> Self {
        self.map_err(|e| e.while_doing(step))
    }
}
