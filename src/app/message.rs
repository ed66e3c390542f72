use crate::basic::Point;
use ggez::graphics::{Canvas, Color, DrawParam, PxScale, Text};
use ggez::{Context, GameResult};

pub enum Position {
    /// Centered on the canvas
    Center,
    /// Horizontally centered, `gap` pixels under the previous message
    Below { gap: f32 },
}

pub struct Message {
    pub text: String,

    pub position: Position,
    pub font_size: f32,
    pub color: Color,
}

impl Message {
    pub const LARGE_FONT_SIZE: f32 = 48.;
    pub const SMALL_FONT_SIZE: f32 = 24.;

    pub fn new(text: impl Into<String>, position: Position, font_size: f32, color: Color) -> Self {
        Self {
            text: text.into(),
            position,
            font_size,
            color,
        }
    }

    /// Top-left corner of a message of size `size`, `previous_bottom`
    /// is the lowest y of the message laid out before this one
    fn dest(&self, size: Point, canvas_dim: Point, previous_bottom: Option<f32>) -> Point {
        let x = canvas_dim.x / 2. - size.x / 2.;
        let y = match (&self.position, previous_bottom) {
            (Position::Below { gap }, Some(bottom)) => bottom + gap,
            (Position::Below { .. }, None) | (Position::Center, _) => {
                canvas_dim.y / 2. - size.y / 2.
            }
        };
        Point { x, y }
    }
}

pub struct MessageDrawable {
    pub text: Text,
    pub dest: Point,
    pub size: Point,
    pub color: Color,
}

impl MessageDrawable {
    pub fn draw(&self, canvas: &mut Canvas) {
        let dp = DrawParam::default().dest(self.dest).color(self.color);

        canvas.draw(&self.text, dp)
    }

    fn bottom(&self) -> f32 {
        self.dest.y + self.size.y
    }
}

/// Measure and position messages top to bottom in the given order
pub fn layout_messages(
    messages: &[Message],
    font: &str,
    canvas_dim: Point,
    ctx: &Context,
) -> GameResult<Vec<MessageDrawable>> {
    let mut drawables: Vec<MessageDrawable> = Vec::with_capacity(messages.len());
    for message in messages {
        let mut text = Text::new(message.text.as_str());
        text.set_font(font).set_scale(PxScale::from(message.font_size));

        let measured = text.measure(ctx)?;
        let size = Point { x: measured.x, y: measured.y };
        let previous_bottom = drawables.last().map(MessageDrawable::bottom);
        let dest = message.dest(size, canvas_dim, previous_bottom);

        drawables.push(MessageDrawable {
            text,
            dest,
            size,
            color: message.color,
        });
    }
    Ok(drawables)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANVAS: Point = Point { x: 640., y: 480. };

    #[test]
    fn test_center() {
        let message = Message::new("Game Over!", Position::Center, 48., Color::WHITE);
        let dest = message.dest(Point { x: 200., y: 60. }, CANVAS, None);
        assert_eq!(dest, Point { x: 220., y: 210. });
    }

    #[test]
    fn test_below_previous() {
        let message = Message::new("again", Position::Below { gap: 20. }, 24., Color::WHITE);
        // previous message centered with height 60 ends at 270
        let dest = message.dest(Point { x: 300., y: 30. }, CANVAS, Some(270.));
        assert_eq!(dest, Point { x: 170., y: 290. });
    }

    #[test]
    fn test_below_nothing_is_centered() {
        let message = Message::new("alone", Position::Below { gap: 20. }, 24., Color::WHITE);
        let dest = message.dest(Point { x: 100., y: 20. }, CANVAS, None);
        assert_eq!(dest, Point { x: 270., y: 230. });
    }
}
