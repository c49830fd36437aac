//! Rectangles and squares that can stand in for each other.
//!
//! Every shape exposes the read-only [`Shape`] capability. Resizing never
//! mutates a shape in place: it returns a new value of the variant's own type,
//! so a [`Square`] is never asked to honor an independent width.
//!
//! ```
//! use solid_shapes::{Rectangle, Shape, Square};
//!
//! fn describe(shape: &dyn Shape) -> String {
//!     format!("{}x{} = {}", shape.width(), shape.height(), shape.area())
//! }
//!
//! assert_eq!(describe(&Rectangle::new(5, 2)), "5x2 = 10");
//! assert_eq!(describe(&Square::new(4)), "4x4 = 16");
//! ```

mod rectangle;
mod square;

pub use rectangle::Rectangle;
pub use square::Square;

/// Read-only view of an axis-aligned shape.
///
/// For every implementation, `area() == width() * height()` and
/// `perimeter() == 2 * (width() + height())`.
pub trait Shape {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    fn area(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    fn perimeter(&self) -> u64 {
        2 * (u64::from(self.width()) + u64::from(self.height()))
    }
}
