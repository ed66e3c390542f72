use crate::{
    app::{
        game::GameState,
        message::{layout_messages, Message, Position},
        palette::Palette,
    },
    basic::{CellDim, GridPoint, Point},
};
use ggez::{
    graphics::{Canvas, Color, DrawParam, Quad, Rect},
    Context, GameResult,
};

/// Name under which ggez registers its bundled font
pub const DEFAULT_FONT: &str = "LiberationMono-Regular";

/// Draws the board on a canvas of fixed logical size, the
/// window only scales the result
pub struct Renderer {
    canvas_dim: Point,
    cell_dim: CellDim,
    palette: Palette,
    /// Name of a font already registered with the graphics context
    font: String,
}

impl Renderer {
    pub fn new(canvas_dim: Point, cell_dim: CellDim, palette: Palette, font: String) -> Self {
        Self {
            canvas_dim,
            cell_dim,
            palette,
            font,
        }
    }

    fn cell_rect(&self, cell: GridPoint) -> Rect {
        let Point { x, y } = cell.to_point(self.cell_dim);
        let side = self.cell_dim.side;
        Rect::new(x, y, side, side)
    }

    fn draw_cell(&self, canvas: &mut Canvas, cell: GridPoint, color: Color) {
        canvas.draw(&Quad, DrawParam::default().dest_rect(self.cell_rect(cell)).color(color))
    }

    fn game_over_messages(&self) -> [Message; 2] {
        let color = self.palette.text_color;
        [
            Message::new("Game Over!", Position::Center, Message::LARGE_FONT_SIZE, color),
            Message::new(
                "Hit Escape to start again",
                Position::Below { gap: 20. },
                Message::SMALL_FONT_SIZE,
                color,
            ),
        ]
    }

    pub fn draw(&self, ctx: &mut Context, game_state: &GameState) -> GameResult {
        let mut canvas = Canvas::from_frame(ctx, self.palette.background_color);
        canvas.set_screen_coordinates(Rect::new(0., 0., self.canvas_dim.x, self.canvas_dim.y));

        if game_state.is_game_over() {
            for drawable in layout_messages(&self.game_over_messages(), &self.font, self.canvas_dim, ctx)? {
                drawable.draw(&mut canvas);
            }
        }

        for segment in game_state.snake() {
            self.draw_cell(&mut canvas, segment, self.palette.snake_color);
        }
        self.draw_cell(&mut canvas, game_state.food(), self.palette.food_color);

        canvas.finish(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_rect() {
        let renderer = Renderer::new(
            Point { x: 640., y: 480. },
            CellDim::from(20.),
            Palette::default(),
            DEFAULT_FONT.to_string(),
        );
        assert_eq!(renderer.cell_rect(GridPoint { x: 0, y: 0 }), Rect::new(0., 0., 20., 20.));
        assert_eq!(renderer.cell_rect(GridPoint { x: 31, y: 23 }), Rect::new(620., 460., 20., 20.));
    }
}
