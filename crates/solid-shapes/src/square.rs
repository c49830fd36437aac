use std::fmt;

use crate::rectangle::Rectangle;
use crate::Shape;

/// A square. Its only degree of freedom is the side length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Square {
    side: u32,
}

impl Square {
    pub fn new(side: u32) -> Self {
        Square { side }
    }

    pub fn side(&self) -> u32 {
        self.side
    }

    /// Returns a copy with a different side length.
    pub fn with_side(self, side: u32) -> Self {
        Square { side }
    }
}

impl Shape for Square {
    fn width(&self) -> u32 {
        self.side
    }

    fn height(&self) -> u32 {
        self.side
    }
}

impl From<Square> for Rectangle {
    fn from(square: Square) -> Self {
        Rectangle::new(square.side, square.side)
    }
}

impl TryFrom<Rectangle> for Square {
    type Error = Rectangle;

    /// Succeeds only for rectangles with equal sides; otherwise hands the
    /// rectangle back.
    fn try_from(rectangle: Rectangle) -> Result<Self, Self::Error> {
        if rectangle.is_square() {
            Ok(Square::new(rectangle.width()))
        } else {
            Err(rectangle)
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square(side={})", self.side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sides_move_together() {
        let s = Square::new(4).with_side(6);
        assert_eq!(s.width(), 6);
        assert_eq!(s.height(), 6);
        assert_eq!(s.area(), 36);
        assert_eq!(s.to_string(), "Square(side=6)");
    }

    #[test]
    fn default_square_is_empty() {
        assert_eq!(Square::default().area(), 0);
    }

    #[test]
    fn conversions() {
        let r: Rectangle = Square::new(3).into();
        assert_eq!(r, Rectangle::new(3, 3));
        assert_eq!(Square::try_from(r), Ok(Square::new(3)));
        assert_eq!(
            Square::try_from(Rectangle::new(3, 4)),
            Err(Rectangle::new(3, 4))
        );
    }

    #[test]
    fn resizing_a_square_as_a_rectangle_yields_a_rectangle() {
        let r = Rectangle::from(Square::new(4)).with_width(5);
        assert_eq!(r, Rectangle::new(5, 4));
        assert_eq!(r.area(), 20);
    }
}
