use ggez::mint::Point2;

/// Pixel position on the logical canvas
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl From<Point> for Point2<f32> {
    fn from(Point { x, y }: Point) -> Self {
        Point2 { x, y }
    }
}

#[test]
fn test_into_mint() {
    let p: Point2<f32> = Point { x: 1.5, y: -2. }.into();
    assert_eq!((p.x, p.y), (1.5, -2.));
}
