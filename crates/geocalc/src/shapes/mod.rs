//! Shape contract, built-in variants and the free functions over them.
//!
//! Purpose
//! - `Shape` is the capability contract (`area`, `describe`). It is an open
//!   trait: downstream crates add their own shapes and `calculate_area` accepts
//!   them unchanged.
//! - `Circle` and `Triangle` are the built-in variants; `AnyShape` is the closed
//!   union over them for callers that need a single concrete type.
//! - Validation happens once, in the constructors. A constructed value is valid
//!   for its whole lifetime (private fields, no setters).
//!
//! Code cross-refs: `error::ShapeError`, `operand::{Operand, ShapeRecord}`

mod any;
mod circle;
mod triangle;

pub use any::AnyShape;
pub use circle::Circle;
pub use triangle::Triangle;

use crate::error::ShapeError;

/// Anything with a closed-form area.
pub trait Shape {
    fn area(&self) -> f64;
    /// Human-readable one-liner embedding the shape's parameters.
    fn describe(&self) -> String;
}

/// Area of any shape, via trait dispatch (works for `&dyn Shape` too).
#[inline]
pub fn calculate_area<S: Shape + ?Sized>(shape: &S) -> f64 {
    shape.area()
}

/// Build `Triangle::new(a, b, c)` and test it for a right angle.
///
/// Fails exactly like the constructor.
pub fn is_right_triangle(side_a: f64, side_b: f64, side_c: f64) -> Result<bool, ShapeError> {
    Ok(Triangle::new(side_a, side_b, side_c)?.is_right_triangle())
}

/// Legacy helper: `Circle::new(radius)?.area()`.
pub fn circle_area(radius: f64) -> Result<f64, ShapeError> {
    Ok(Circle::new(radius)?.area())
}

/// Legacy helper: `Triangle::new(a, b, c)?.area()`.
pub fn triangle_area(side_a: f64, side_b: f64, side_c: f64) -> Result<f64, ShapeError> {
    Ok(Triangle::new(side_a, side_b, side_c)?.area())
}
