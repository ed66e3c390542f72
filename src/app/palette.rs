use ggez::graphics::Color;

#[derive(Copy, Clone, Debug)]
pub struct Palette {
    pub background_color: Color,
    pub snake_color: Color,
    pub food_color: Color,
    pub text_color: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self::classic()
    }
}

impl Palette {
    pub fn classic() -> Self {
        Self {
            background_color: Color::BLACK,
            snake_color: Color::WHITE,
            food_color: Color::from_rgb(255, 0, 0),
            text_color: Color::WHITE,
        }
    }
}
