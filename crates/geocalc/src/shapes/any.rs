use std::fmt;

use super::{Circle, Shape, Triangle};

/// Closed union of the built-in shapes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnyShape {
    Circle(Circle),
    Triangle(Triangle),
}

impl AnyShape {
    /// Lower-case variant name, as used in shape records.
    pub fn kind(&self) -> &'static str {
        match self {
            AnyShape::Circle(_) => "circle",
            AnyShape::Triangle(_) => "triangle",
        }
    }

    pub fn as_triangle(&self) -> Option<&Triangle> {
        match self {
            AnyShape::Triangle(t) => Some(t),
            AnyShape::Circle(_) => None,
        }
    }
}

impl Shape for AnyShape {
    fn area(&self) -> f64 {
        match self {
            AnyShape::Circle(c) => c.area(),
            AnyShape::Triangle(t) => t.area(),
        }
    }

    fn describe(&self) -> String {
        match self {
            AnyShape::Circle(c) => c.describe(),
            AnyShape::Triangle(t) => t.describe(),
        }
    }
}

impl From<Circle> for AnyShape {
    fn from(c: Circle) -> Self {
        AnyShape::Circle(c)
    }
}

impl From<Triangle> for AnyShape {
    fn from(t: Triangle) -> Self {
        AnyShape::Triangle(t)
    }
}

impl fmt::Display for AnyShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyShape::Circle(c) => fmt::Display::fmt(c, f),
            AnyShape::Triangle(t) => fmt::Display::fmt(t, f),
        }
    }
}
