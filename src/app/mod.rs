pub use app_error::{AppError, AppResult, WhileDoing};
pub use game::Game;
pub use keyboard_control::Controls;
pub use palette::Palette;
pub use prefs::Prefs;
pub use renderer::{Renderer, DEFAULT_FONT};

use ggez::{graphics::FontData, Context};
use log::info;
use std::path::Path;

mod app_error;
mod control;
mod game;
mod keyboard_control;
mod message;
mod palette;
mod prefs;
mod renderer;

/// Name under which a user-supplied font is registered
const CUSTOM_FONT: &str = "custom";

/// Register the font at `path` with the graphics context and return
/// the name to draw text with, ggez's bundled font when there is no path
pub fn load_font(ctx: &mut Context, path: Option<&Path>) -> AppResult<String> {
    let path = match path {
        None => return Ok(DEFAULT_FONT.to_string()),
        Some(path) => path,
    };

    let bytes = std::fs::read(path)
        .map_err(AppError::from)
        .while_doing(format!("reading font {}", path.display()))?;
    let font_data = FontData::from_vec(bytes)
        .map_err(AppError::from)
        .while_doing(format!("parsing font {}", path.display()))?;
    ctx.gfx.add_font(CUSTOM_FONT, font_data);

    info!("loaded font {}", path.display());
    Ok(CUSTOM_FONT.to_string())
}
