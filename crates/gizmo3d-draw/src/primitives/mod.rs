//! Drawing primitives
//!
//! Each primitive is a small config struct with documented defaults. Draw
//! calls take an optional canvas and do nothing when it is absent or the
//! geometry is degenerate.

mod arrow;
mod circle;
mod plane;
mod square;

pub use arrow::ArrowPrimitive;
pub use circle::{CirclePrimitive, CircleStyle};
pub use plane::PlanePrimitive;
pub use square::SquareHandlePrimitive;
