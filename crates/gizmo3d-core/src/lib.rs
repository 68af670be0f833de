//! Gizmo3D core
//!
//! Interaction engine for on-screen 3D transform gizmos. Given a camera
//! transform, a viewport and a target scene node, a [`Gizmo`] lays out its
//! handles in pixel space, picks the handle under the pointer, tracks drags
//! and emits `Started`/`Delta`/`Ended` events carrying distances, angles or
//! scale factors. Applying those values to the node is left to the host.
//!
//! # Coordinate conventions
//!
//! - Screen space is in pixels, origin top-left, y pointing down.
//! - Angles in events are degrees; a counter-clockwise sweep on screen around
//!   an axis that faces the viewer is a positive rotation.

pub mod axis;
pub mod camera;
pub mod config;
pub mod constants;
pub mod event;
pub mod gizmo;
pub mod node;
pub mod picking;
pub mod projection;
pub mod snap;
pub mod tracker;

pub use axis::{Axis, GizmoKind, TransformMode, resolve_direction};
pub use camera::Camera;
pub use config::{AxisColors, ConfigError, GizmoSettings, KindSettings};
pub use event::{DragDelta, EventLog, GizmoEvent, GizmoListener, Property};
pub use gizmo::{DragSnapshot, Gizmo, GizmoError, SweepWedge};
pub use node::{NodeTransform, SceneNode, SceneNodeRef, TransformNode};
pub use picking::{Handle, HandleLayout, HandleShape, LayoutParams};
pub use projection::{AxisProjection, ScreenAxis, ScreenRing, Viewport, project_axis, project_ring};
pub use snap::{SnapAccumulator, SnapConfig, quantize};
pub use tracker::DragTracker;
