//! Gizmo3D drawing
//!
//! Canvas-agnostic drawing primitives (arrows, rings, wedges, planes and
//! square handles) and a [`GizmoPainter`] that renders a gizmo's handle
//! layout with them. Hosts implement [`Canvas`] for their 2D backend;
//! [`DisplayList`] records calls for tests and offline use.

pub mod canvas;
pub mod painter;
pub mod primitives;

pub use canvas::{Canvas, Color, DisplayList, DrawCommand, LineCap, LineJoin, StrokeStyle, with_alpha};
pub use painter::GizmoPainter;
pub use primitives::{ArrowPrimitive, CirclePrimitive, CircleStyle, PlanePrimitive, SquareHandlePrimitive};
