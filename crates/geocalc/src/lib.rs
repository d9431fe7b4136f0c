//! Closed-form areas of simple 2D shapes.
//!
//! - `shapes`: the `Shape` contract, `Circle`, `Triangle`, `AnyShape` and the
//!   free functions (`calculate_area`, `is_right_triangle`, legacy helpers).
//! - `operand`: the dynamic boundary for untyped input (JSON, CSV, argv).
//! - `error`: `ShapeError` with its two kinds, type and value.
//!
//! Everything here is a pure function over immutable `Copy` values; all types
//! are `Send + Sync`.

mod cfg;
pub mod error;
pub mod operand;
pub mod shapes;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{ErrorKind, ShapeError};
pub use operand::{calculate_area_record, Operand, ShapeRecord};
pub use shapes::{
    calculate_area, circle_area, is_right_triangle, triangle_area, AnyShape, Circle, Shape,
    Triangle,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{ErrorKind, ShapeError};
    pub use crate::operand::{calculate_area_record, Operand, ShapeRecord};
    pub use crate::shapes::{calculate_area, is_right_triangle, AnyShape, Circle, Shape, Triangle};
}
