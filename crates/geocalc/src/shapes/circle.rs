use std::f64::consts::PI;
use std::fmt;

use super::Shape;
use crate::error::ShapeError;

/// Circle given by its radius.
///
/// Invariant: `radius` is finite and `>= 0`. A zero radius is allowed and has zero area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Result<Self, ShapeError> {
        if !radius.is_finite() {
            return Err(ShapeError::out_of_domain(format!(
                "radius must be a finite number, got {radius}"
            )));
        }
        if radius < 0.0 {
            return Err(ShapeError::out_of_domain(format!(
                "radius must be non-negative, got {radius}"
            )));
        }
        // -0.0 + 0.0 == +0.0, keeps `describe` free of "-0".
        Ok(Self {
            radius: radius + 0.0,
        })
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Circle {
    /// `π · r²`.
    #[inline]
    fn area(&self) -> f64 {
        PI * (self.radius * self.radius)
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle(radius={})", self.radius)
    }
}
