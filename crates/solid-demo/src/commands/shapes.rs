use std::fmt::Write;

use solid_shapes::{Rectangle, Shape, Square};

/// Describes each shape through the `Shape` capability only.
pub fn describe(shapes: &[&dyn Shape]) -> String {
    let mut out = String::new();
    for shape in shapes {
        let _ = writeln!(
            out,
            "{}x{}: area {}, perimeter {}",
            shape.width(),
            shape.height(),
            shape.area(),
            shape.perimeter()
        );
    }
    out
}

pub fn run() -> String {
    let rectangle = Rectangle::new(5, 2);
    let square = Square::new(4);
    let widened = Rectangle::from(square).with_width(6);

    let mut out = format!("{rectangle}\n{square}\n{widened}\n");
    out.push_str(&describe(&[&rectangle, &square, &widened]));
    out
}
