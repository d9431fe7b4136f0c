//! User-defined shapes go through `calculate_area` unchanged.
//!
//! Usage:
//!   cargo run -p geocalc --example extensibility
//!
//! Defines a rectangle, a regular hexagon and an ellipse outside the crate,
//! validates them the same way the built-in shapes do, and sums their areas
//! alongside a built-in circle and triangle.

use std::f64::consts::PI;

use geocalc::{calculate_area, Circle, Shape, ShapeError, Triangle};

struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    fn new(width: f64, height: f64) -> Result<Self, ShapeError> {
        if !(width > 0.0 && height > 0.0) {
            return Err(ShapeError::out_of_domain("width and height must be positive"));
        }
        Ok(Self { width, height })
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }
    fn describe(&self) -> String {
        format!("Rectangle({}x{})", self.width, self.height)
    }
}

struct RegularHexagon {
    side: f64,
}

impl Shape for RegularHexagon {
    /// (3√3 / 2) · a²
    fn area(&self) -> f64 {
        3.0 * 3f64.sqrt() / 2.0 * self.side * self.side
    }
    fn describe(&self) -> String {
        format!("RegularHexagon(side={})", self.side)
    }
}

struct Ellipse {
    semi_major: f64,
    semi_minor: f64,
}

impl Shape for Ellipse {
    fn area(&self) -> f64 {
        PI * self.semi_major * self.semi_minor
    }
    fn describe(&self) -> String {
        format!("Ellipse(a={}, b={})", self.semi_major, self.semi_minor)
    }
}

fn main() -> Result<(), ShapeError> {
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Rectangle::new(4.0, 6.0)?),
        Box::new(RegularHexagon { side: 5.0 }),
        Box::new(Ellipse {
            semi_major: 3.0,
            semi_minor: 4.0,
        }),
        Box::new(Circle::new(5.0)?),
        Box::new(Triangle::new(3.0, 4.0, 5.0)?),
    ];

    let mut total = 0.0;
    for (i, shape) in shapes.iter().enumerate() {
        let area = calculate_area(shape.as_ref());
        total += area;
        println!("{}. {} area={area:.6}", i + 1, shape.describe());
    }
    println!("total_area={total:.6}");

    match Rectangle::new(-1.0, 2.0) {
        Ok(_) => println!("unexpected: negative rectangle accepted"),
        Err(err) => println!("rejected: {err}"),
    }
    Ok(())
}
