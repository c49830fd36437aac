use std::fmt;

use crate::Shape;

/// A rectangle with independent sides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rectangle {
    width: u32,
    height: u32,
}

impl Rectangle {
    pub fn new(width: u32, height: u32) -> Self {
        Rectangle { width, height }
    }

    /// Returns a copy with a different width.
    pub fn with_width(self, width: u32) -> Self {
        Rectangle { width, ..self }
    }

    /// Returns a copy with a different height.
    pub fn with_height(self, height: u32) -> Self {
        Rectangle { height, ..self }
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

impl Shape for Rectangle {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rectangle(width={}, height={})", self.width, self.height)
    }
}
