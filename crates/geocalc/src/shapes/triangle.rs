//! Triangle from three side lengths (Heron's formula).
//!
//! Invariants (checked once in `Triangle::new`)
//! - Every side is finite and strictly positive.
//! - Strict triangle inequality for all three pairings; degenerate triangles
//!   (`a + b == c`) are rejected rather than treated as zero-area.
//!
//! Sides are stored in construction order. Area and the right-angle test work
//! on an ascending copy so both are independent of argument order.

use std::fmt;

use nalgebra::Vector2;

use super::Shape;
use crate::cfg::RIGHT_ANGLE_EPS;
use crate::error::ShapeError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    side_a: f64,
    side_b: f64,
    side_c: f64,
}

impl Triangle {
    pub fn new(side_a: f64, side_b: f64, side_c: f64) -> Result<Self, ShapeError> {
        for (name, side) in [("side_a", side_a), ("side_b", side_b), ("side_c", side_c)] {
            if !side.is_finite() {
                return Err(ShapeError::out_of_domain(format!(
                    "{name} must be a finite number, got {side}"
                )));
            }
            if side <= 0.0 {
                return Err(ShapeError::out_of_domain(format!(
                    "{name} must be positive, got {side}"
                )));
            }
        }
        if side_a + side_b <= side_c || side_a + side_c <= side_b || side_b + side_c <= side_a {
            return Err(ShapeError::out_of_domain(format!(
                "sides {side_a}, {side_b}, {side_c} do not form a valid triangle"
            )));
        }
        Ok(Self {
            side_a,
            side_b,
            side_c,
        })
    }

    /// Triangle spanned by three points; sides are the pairwise distances
    /// `|q − p|`, `|r − q|`, `|p − r|`.
    ///
    /// Repeated or exactly collinear points fail like any degenerate triangle.
    /// Nearly collinear points can survive rounding and give a sliver with tiny area.
    pub fn from_vertices(
        p: Vector2<f64>,
        q: Vector2<f64>,
        r: Vector2<f64>,
    ) -> Result<Self, ShapeError> {
        Self::new((q - p).norm(), (r - q).norm(), (p - r).norm())
    }

    #[inline]
    pub fn side_a(&self) -> f64 {
        self.side_a
    }
    #[inline]
    pub fn side_b(&self) -> f64 {
        self.side_b
    }
    #[inline]
    pub fn side_c(&self) -> f64 {
        self.side_c
    }
    /// Sides in construction order.
    #[inline]
    pub fn sides(&self) -> [f64; 3] {
        [self.side_a, self.side_b, self.side_c]
    }

    /// Sides in ascending order; the last one is the candidate hypotenuse.
    fn sorted_sides(&self) -> [f64; 3] {
        let mut s = self.sides();
        s.sort_by(f64::total_cmp);
        s
    }

    /// `|c² − (a² + b²)| < 1e-10` with `c` the longest side.
    ///
    /// The tolerance is absolute, so very large triangles can be misclassified.
    pub fn is_right_triangle(&self) -> bool {
        let [a, b, c] = self.sorted_sides();
        (c * c - (a * a + b * b)).abs() < RIGHT_ANGLE_EPS
    }
}

impl Shape for Triangle {
    fn area(&self) -> f64 {
        let [a, b, c] = self.sorted_sides();
        let s = (a + b + c) / 2.0;
        let radicand = s * (s - a) * (s - b) * (s - c);
        // rounding can push a valid sliver slightly below zero
        radicand.max(0.0).sqrt()
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Triangle(side_a={}, side_b={}, side_c={})",
            self.side_a, self.side_b, self.side_c
        )
    }
}
