//! Dynamic boundary: loosely typed arguments from untyped sources.
//!
//! Purpose
//! - Typed Rust callers pass `f64` and never hit a type error. Values coming
//!   from JSON, CSV cells or command-line words arrive untyped; this module is
//!   the single place where they are checked for being numbers and for naming
//!   a known shape.
//! - All arguments of a record are type-checked before any shape constructor
//!   runs, so a type error always wins over a value error.
//!
//! Code cross-refs: `shapes::{AnyShape, calculate_area}`, `error::ShapeError`

use crate::error::ShapeError;
use crate::shapes::{calculate_area, AnyShape, Circle, Triangle};

/// One untyped argument.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    Number(f64),
    Text(String),
    Bool(bool),
    Missing,
}

impl Operand {
    /// Numeric payload, or a type error naming the argument.
    pub fn as_number(&self, what: &str) -> Result<f64, ShapeError> {
        match self {
            Operand::Number(x) => Ok(*x),
            Operand::Text(s) => Err(ShapeError::type_mismatch(format!(
                "{what} must be a number, got text {s:?}"
            ))),
            Operand::Bool(b) => Err(ShapeError::type_mismatch(format!(
                "{what} must be a number, got boolean {b}"
            ))),
            Operand::Missing => Err(ShapeError::type_mismatch(format!(
                "{what} must be a number, got nothing"
            ))),
        }
    }
}

impl From<f64> for Operand {
    fn from(x: f64) -> Self {
        Operand::Number(x)
    }
}

impl From<bool> for Operand {
    fn from(b: bool) -> Self {
        Operand::Bool(b)
    }
}

impl From<&str> for Operand {
    fn from(s: &str) -> Self {
        Operand::Text(s.to_string())
    }
}

impl From<String> for Operand {
    fn from(s: String) -> Self {
        Operand::Text(s)
    }
}

impl<T: Into<Operand>> From<Option<T>> for Operand {
    fn from(v: Option<T>) -> Self {
        v.map_or(Operand::Missing, Into::into)
    }
}

/// A shape request: kind name plus positional arguments.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeRecord {
    pub kind: String,
    pub args: Vec<Operand>,
}

impl ShapeRecord {
    pub fn new(kind: impl Into<String>, args: Vec<Operand>) -> Self {
        Self {
            kind: kind.into(),
            args,
        }
    }
}

impl AnyShape {
    /// Build a built-in shape from a record.
    ///
    /// `kind` is matched case-insensitively (`circle` takes `radius`,
    /// `triangle` takes three sides). Unknown kinds and wrong arity are type
    /// errors: the record does not describe a shape.
    pub fn from_record(record: &ShapeRecord) -> Result<Self, ShapeError> {
        let kind = record.kind.trim().to_ascii_lowercase();
        match kind.as_str() {
            "circle" => {
                let [radius] = numbers(record, ["radius"])?;
                Ok(Circle::new(radius)?.into())
            }
            "triangle" => {
                let [a, b, c] = numbers(record, ["side_a", "side_b", "side_c"])?;
                Ok(Triangle::new(a, b, c)?.into())
            }
            _ => Err(ShapeError::type_mismatch(format!(
                "{:?} is not a shape (expected circle or triangle)",
                record.kind
            ))),
        }
    }
}

impl TryFrom<&ShapeRecord> for AnyShape {
    type Error = ShapeError;

    fn try_from(record: &ShapeRecord) -> Result<Self, Self::Error> {
        AnyShape::from_record(record)
    }
}

/// `calculate_area` for untyped input.
pub fn calculate_area_record(record: &ShapeRecord) -> Result<f64, ShapeError> {
    let shape = AnyShape::from_record(record)?;
    Ok(calculate_area(&shape))
}

fn numbers<const N: usize>(record: &ShapeRecord, names: [&str; N]) -> Result<[f64; N], ShapeError> {
    if record.args.len() != N {
        return Err(ShapeError::type_mismatch(format!(
            "{} takes {N} argument(s), got {}",
            record.kind.trim(),
            record.args.len()
        )));
    }
    let mut out = [0.0; N];
    for ((slot, arg), name) in out.iter_mut().zip(&record.args).zip(names) {
        *slot = arg.as_number(name)?;
    }
    Ok(out)
}
