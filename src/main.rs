#[macro_use]
extern crate derive_more;

use crate::app::{AppError, AppResult, Controls, Game, Palette, Prefs, Renderer, WhileDoing};
use crate::basic::Point;
use clap::Parser;
use ggez::conf::{WindowMode, WindowSetup};
use ggez::event::run;
use ggez::ContextBuilder;
use log::{error, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::path::PathBuf;
use std::process;

mod app;
mod basic;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Classic snake on a square grid")]
struct Cli {
    /// Logical canvas width in pixels
    #[arg(long, default_value = "640")]
    width: f32,

    /// Logical canvas height in pixels
    #[arg(long, default_value = "480")]
    height: f32,

    /// Side of a grid cell in pixels
    #[arg(long, default_value = "20")]
    cell_size: f32,

    /// Game speed
    #[arg(long, default_value = "6")]
    ticks_per_second: f64,

    /// TTF font for the game over text
    #[arg(long)]
    font: Option<PathBuf>,

    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

impl Cli {
    fn prefs(&self) -> Prefs {
        Prefs::default()
            .canvas(self.width, self.height)
            .cell_side(self.cell_size)
            .ticks_per_second(self.ticks_per_second)
            .font_path(self.font.clone())
    }
}

fn start(cli: Cli) -> AppResult {
    let prefs = cli.prefs().validate()?;

    let wm = WindowMode::default()
        .dimensions(prefs.canvas_width, prefs.canvas_height)
        .resizable(true);
    let ws = WindowSetup::default().title("Snake Game");

    let (mut ctx, event_loop) = ContextBuilder::new("grid_snake", "grid_snake")
        .window_mode(wm)
        .window_setup(ws)
        .build()
        .map_err(AppError::from)
        .while_doing("building context")?;

    let font = app::load_font(&mut ctx, prefs.font_path.as_deref())?;
    let renderer = Renderer::new(
        Point { x: prefs.canvas_width, y: prefs.canvas_height },
        prefs.cell_dim(),
        Palette::default(),
        font,
    );
    let game = Game::new(&prefs, Controls::default(), renderer);

    info!("starting");
    run(ctx, event_loop, game)
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = TermLogger::init(
        cli.log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("failed to initialize logger: {}", e);
    }

    if let Err(e) = start(cli) {
        error!("{}", e);
        process::exit(1);
    }
}
