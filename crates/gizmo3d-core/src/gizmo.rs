//! Gizmo state machine
//!
//! A [`Gizmo`] owns the properties of one translation, rotation or scale
//! handle set and turns pointer input into drag events:
//!
//! ```text
//!   Idle --pointer_down on a handle--> Dragging   emits Started(axis)
//!   Dragging --pointer_move--> Dragging            emits Delta(total since start)
//!   Dragging --pointer_up / cancel--> Idle         emits Ended(axis)
//! ```
//!
//! Unbinding or losing the target node, and dropping the gizmo, cancel an
//! active drag, so every `Started` is paired with exactly one `Ended`.
//!
//! The gizmo never writes to the node. Listeners (controllers) apply the
//! deltas; the next sample reads the node's updated transform.

use std::mem;

use glam::{Vec2, Vec3};

use crate::axis::{Axis, GizmoKind, TransformMode};
use crate::config::{GizmoSettings, KindSettings};
use crate::constants::gizmo as constants;
use crate::event::{DragDelta, GizmoEvent, GizmoListener, Property};
use crate::node::{NodeTransform, SceneNodeRef};
use crate::picking::{HandleLayout, LayoutParams};
use crate::projection::Viewport;
use crate::snap::{SnapAccumulator, SnapConfig};
use crate::tracker::{DragStart, DragTracker};

/// Errors from gizmo property setters
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GizmoError {
    #[error("{axis:?} axis is not supported by the {kind:?} gizmo")]
    UnsupportedAxis { axis: Axis, kind: GizmoKind },
    #[error("Cannot change the active axis while dragging {0:?}")]
    DragInProgress(Axis),
}

/// State captured for the lifetime of one drag
#[derive(Debug, Clone)]
struct ActiveDrag {
    axis: Axis,
    mode: TransformMode,
    start_pointer: Vec2,
    baseline: NodeTransform,
    tracker: DragTracker,
    snap: SnapAccumulator,
    last_delta: Option<DragDelta>,
}

#[derive(Debug, Clone, Default)]
enum DragState {
    #[default]
    Idle,
    Dragging(Box<ActiveDrag>),
}

/// Rotation sweep of the current drag in screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepWedge {
    /// Projected ring center
    pub center: Vec2,
    /// Screen angle of the first pointer vector (radians, y down)
    pub start_angle: f32,
    /// Swept screen angle (radians, positive is clockwise on screen)
    pub sweep: f32,
}

/// Read-only view of an active drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSnapshot {
    /// Dragged axis
    pub axis: Axis,
    /// Transform mode captured at drag start
    pub mode: TransformMode,
    /// Pointer at drag start
    pub start_pointer: Vec2,
    /// Node transform at drag start
    pub baseline: NodeTransform,
    /// Last emitted delta, if any
    pub last_delta: Option<DragDelta>,
    /// Sweep of a rotation drag
    pub wedge: Option<SweepWedge>,
}

/// Interactive transform gizmo
pub struct Gizmo {
    kind: GizmoKind,
    gizmo_size: f32,
    transform_mode: TransformMode,
    snap: SnapConfig,
    arrow_start_ratio: f32,
    arrow_end_ratio: f32,
    hit_tolerance: f32,
    target: Option<SceneNodeRef>,
    active: Axis,
    hovered: Axis,
    state: DragState,
    listeners: Vec<Box<dyn GizmoListener>>,
}

impl Gizmo {
    /// Create a gizmo of `kind` with default settings.
    pub fn new(kind: GizmoKind) -> Self {
        Self::with_settings(kind, &KindSettings::for_kind(kind), constants::HIT_TOLERANCE_PX)
    }

    /// Translation gizmo with defaults.
    pub fn translation() -> Self {
        Self::new(GizmoKind::Translation)
    }

    /// Rotation gizmo with defaults.
    pub fn rotation() -> Self {
        Self::new(GizmoKind::Rotation)
    }

    /// Scale gizmo with defaults.
    pub fn scale() -> Self {
        Self::new(GizmoKind::Scale)
    }

    /// Create a gizmo of `kind` from loaded settings.
    pub fn from_settings(kind: GizmoKind, settings: &GizmoSettings) -> Self {
        Self::with_settings(kind, settings.for_kind(kind), settings.hit_tolerance)
    }

    fn with_settings(kind: GizmoKind, settings: &KindSettings, hit_tolerance: f32) -> Self {
        Self {
            kind,
            gizmo_size: settings.gizmo_size,
            transform_mode: settings.transform_mode,
            snap: settings.snap,
            arrow_start_ratio: settings.arrow_start_ratio,
            arrow_end_ratio: settings.arrow_end_ratio,
            hit_tolerance,
            target: None,
            active: Axis::None,
            hovered: Axis::None,
            state: DragState::Idle,
            listeners: Vec::new(),
        }
    }

    /// Register a listener. Listeners are called in registration order.
    pub fn add_listener(&mut self, listener: impl GizmoListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // ============== Pointer input ==============

    /// Handle a pointer press. Starts a drag and returns `true` if a handle
    /// was hit on a live target.
    pub fn pointer_down(&mut self, pointer: Vec2, viewport: &Viewport) -> bool {
        if self.is_dragging() {
            return false;
        }
        let Some(target) = self.target_transform() else {
            return false;
        };
        let axis = self.pick(pointer, viewport, &target);
        if axis == Axis::None {
            return false;
        }

        let start = DragStart {
            axis,
            mode: self.transform_mode,
            pointer,
            baseline: &target,
            gizmo_size: self.gizmo_size,
            viewport,
        };
        let Some(tracker) = DragTracker::begin(self.kind, &start) else {
            tracing::debug!("{:?} axis {:?} is degenerate, drag not started", self.kind, axis);
            return false;
        };

        let previous_active = self.active_axis();
        self.state = DragState::Dragging(Box::new(ActiveDrag {
            axis,
            mode: self.transform_mode,
            start_pointer: pointer,
            baseline: target,
            snap: SnapAccumulator::new(tracker.identity()),
            tracker,
            last_delta: None,
        }));

        tracing::debug!("{:?} drag started on {:?} ({:?})", self.kind, axis, self.transform_mode);
        if previous_active != axis {
            self.notify(Property::ActiveAxis);
        }
        self.emit(GizmoEvent::Started { axis });
        true
    }

    /// Handle pointer motion. While dragging, emits and returns the delta
    /// since drag start; cancels the drag if the target has gone away.
    pub fn pointer_move(&mut self, pointer: Vec2, viewport: &Viewport) -> Option<DragDelta> {
        if !self.is_dragging() {
            return None;
        }
        let Some(target) = self.target_transform() else {
            tracing::debug!("{:?} target lost during drag", self.kind);
            self.cancel();
            return None;
        };

        let DragState::Dragging(drag) = &mut self.state else {
            return None;
        };
        let raw = drag.tracker.update(pointer, viewport, &target);
        let (snapped, snap_active) = drag.snap.apply(raw, &self.snap);
        let delta = DragDelta {
            axis: drag.axis,
            mode: drag.mode,
            value: drag.tracker.clamp(snapped),
            snap_active,
        };
        drag.last_delta = Some(delta);

        tracing::trace!("{:?} delta {:?}: raw {} -> {}", self.kind, delta.axis, raw, delta.value);
        self.emit(GizmoEvent::Delta(delta));
        Some(delta)
    }

    /// Handle a pointer release. Returns `true` if a drag ended.
    pub fn pointer_up(&mut self) -> bool {
        self.finish("finished")
    }

    /// Abort the current drag (pointer capture lost, host reset).
    /// Returns `true` if a drag was cancelled.
    pub fn cancel(&mut self) -> bool {
        self.finish("cancelled")
    }

    fn finish(&mut self, reason: &str) -> bool {
        let DragState::Dragging(drag) = mem::take(&mut self.state) else {
            return false;
        };
        tracing::debug!("{:?} drag {} on {:?}", self.kind, reason, drag.axis);
        self.emit(GizmoEvent::Ended { axis: drag.axis });
        if self.active != drag.axis {
            self.notify(Property::ActiveAxis);
        }
        true
    }

    /// Update the hovered axis from a pointer position and return it.
    ///
    /// Hovering never changes [`Gizmo::active_axis`]. During a drag the
    /// dragged axis is returned and the hovered axis is left alone.
    pub fn hover(&mut self, pointer: Vec2, viewport: &Viewport) -> Axis {
        if let DragState::Dragging(drag) = &self.state {
            return drag.axis;
        }
        let axis = self.hit_test(pointer, viewport);
        if axis != self.hovered {
            self.hovered = axis;
            self.notify(Property::HoveredAxis);
        }
        axis
    }

    /// Axis whose handle is under `pointer`, or `Axis::None`.
    ///
    /// Inert (always `None`) without a live target.
    pub fn hit_test(&self, pointer: Vec2, viewport: &Viewport) -> Axis {
        match self.target_transform() {
            Some(target) => self.pick(pointer, viewport, &target),
            None => Axis::None,
        }
    }

    fn pick(&self, pointer: Vec2, viewport: &Viewport, target: &NodeTransform) -> Axis {
        HandleLayout::compute(&self.layout_params(), viewport, target)
            .map(|layout| layout.pick(pointer, self.hit_tolerance))
            .unwrap_or(Axis::None)
    }

    /// Screen layout of the handles for the target's current transform.
    pub fn handle_layout(&self, viewport: &Viewport) -> Option<HandleLayout> {
        let target = self.target_transform()?;
        HandleLayout::compute(&self.layout_params(), viewport, &target)
    }

    /// Layout inputs derived from the current properties.
    pub fn layout_params(&self) -> LayoutParams {
        LayoutParams {
            kind: self.kind,
            mode: self.transform_mode,
            gizmo_size: self.gizmo_size,
            arrow_start_ratio: self.arrow_start_ratio,
            arrow_end_ratio: self.arrow_end_ratio,
        }
    }

    /// Snapshot of the active drag, if any.
    pub fn drag_snapshot(&self) -> Option<DragSnapshot> {
        let DragState::Dragging(drag) = &self.state else {
            return None;
        };
        let wedge = match &drag.tracker {
            DragTracker::Rotate(tracker) => tracker.start_angle().map(|start_angle| SweepWedge {
                center: tracker.origin(),
                start_angle,
                sweep: tracker.screen_sweep(),
            }),
            DragTracker::Translate(_) | DragTracker::Scale(_) => None,
        };
        Some(DragSnapshot {
            axis: drag.axis,
            mode: drag.mode,
            start_pointer: drag.start_pointer,
            baseline: drag.baseline,
            last_delta: drag.last_delta,
            wedge,
        })
    }

    // ============== Properties ==============

    /// Gizmo kind
    pub fn kind(&self) -> GizmoKind {
        self.kind
    }

    /// Whether a drag is in progress
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Node transform captured at drag start
    pub fn drag_baseline(&self) -> Option<NodeTransform> {
        match &self.state {
            DragState::Dragging(drag) => Some(drag.baseline),
            DragState::Idle => None,
        }
    }

    /// Dragged axis while dragging, otherwise the axis set by the host.
    pub fn active_axis(&self) -> Axis {
        match &self.state {
            DragState::Dragging(drag) => drag.axis,
            DragState::Idle => self.active,
        }
    }

    /// Axis under the pointer at the last [`Gizmo::hover`]
    pub fn hovered_axis(&self) -> Axis {
        self.hovered
    }

    /// Axis to draw highlighted: the active axis, else the hovered one.
    pub fn highlighted_axis(&self) -> Axis {
        match self.active_axis() {
            Axis::None => self.hovered,
            axis => axis,
        }
    }

    /// Set the active axis while idle.
    pub fn set_active_axis(&mut self, axis: Axis) -> Result<(), GizmoError> {
        if let DragState::Dragging(drag) = &self.state {
            return Err(GizmoError::DragInProgress(drag.axis));
        }
        if !self.kind.supports(axis) {
            return Err(GizmoError::UnsupportedAxis {
                axis,
                kind: self.kind,
            });
        }
        if axis != self.active {
            self.active = axis;
            self.notify(Property::ActiveAxis);
        }
        Ok(())
    }

    /// Handle length (translation, scale) or ring radius (rotation) in pixels
    pub fn gizmo_size(&self) -> f32 {
        self.gizmo_size
    }

    /// Set the gizmo size. An active drag keeps the size it started with.
    pub fn set_gizmo_size(&mut self, size: f32) {
        if size != self.gizmo_size {
            self.gizmo_size = size;
            self.notify(Property::GizmoSize);
        }
    }

    /// World or local axes
    pub fn transform_mode(&self) -> TransformMode {
        self.transform_mode
    }

    /// Set the transform mode. An active drag keeps the mode it started with.
    pub fn set_transform_mode(&mut self, mode: TransformMode) {
        if mode != self.transform_mode {
            self.transform_mode = mode;
            self.notify(Property::TransformMode);
        }
    }

    /// Current snap settings
    pub fn snap(&self) -> SnapConfig {
        self.snap
    }

    /// Whether snapping is enabled
    pub fn snap_enabled(&self) -> bool {
        self.snap.enabled
    }

    /// Enable or disable snapping. Applies from the next sample.
    pub fn set_snap_enabled(&mut self, enabled: bool) {
        if enabled != self.snap.enabled {
            self.snap.enabled = enabled;
            self.notify(Property::SnapEnabled);
        }
    }

    /// Snap increment (world units or scale factor step)
    pub fn snap_increment(&self) -> f32 {
        self.snap.increment
    }

    /// Set the snap increment. Non-positive values disable quantization.
    pub fn set_snap_increment(&mut self, increment: f32) {
        if increment != self.snap.increment {
            self.snap.increment = increment;
            self.notify(Property::SnapIncrement);
        }
    }

    /// Snap angle in degrees; the rotation gizmo's name for the snap increment
    pub fn snap_angle(&self) -> f32 {
        self.snap_increment()
    }

    /// Set the snap angle in degrees
    pub fn set_snap_angle(&mut self, degrees: f32) {
        self.set_snap_increment(degrees);
    }

    /// Absolute (true) or relative (false) snapping
    pub fn snap_to_absolute(&self) -> bool {
        self.snap.to_absolute
    }

    /// Choose absolute or relative snapping
    pub fn set_snap_to_absolute(&mut self, to_absolute: bool) {
        if to_absolute != self.snap.to_absolute {
            self.snap.to_absolute = to_absolute;
            self.notify(Property::SnapToAbsolute);
        }
    }

    /// Scale arrow start as a fraction of the gizmo size
    pub fn arrow_start_ratio(&self) -> f32 {
        self.arrow_start_ratio
    }

    /// Set the scale arrow start fraction
    pub fn set_arrow_start_ratio(&mut self, ratio: f32) {
        if ratio != self.arrow_start_ratio {
            self.arrow_start_ratio = ratio;
            self.notify(Property::ArrowStartRatio);
        }
    }

    /// Scale arrow end as a fraction of the gizmo size
    pub fn arrow_end_ratio(&self) -> f32 {
        self.arrow_end_ratio
    }

    /// Set the scale arrow end fraction
    pub fn set_arrow_end_ratio(&mut self, ratio: f32) {
        if ratio != self.arrow_end_ratio {
            self.arrow_end_ratio = ratio;
            self.notify(Property::ArrowEndRatio);
        }
    }

    /// Pointer distance within which a handle is hit (pixels)
    pub fn hit_tolerance(&self) -> f32 {
        self.hit_tolerance
    }

    /// Set the hit tolerance
    pub fn set_hit_tolerance(&mut self, tolerance: f32) {
        if tolerance != self.hit_tolerance {
            self.hit_tolerance = tolerance;
            self.notify(Property::HitTolerance);
        }
    }

    /// Bound scene node
    pub fn target_node(&self) -> Option<&SceneNodeRef> {
        self.target.as_ref()
    }

    /// Bind, rebind or unbind the target node.
    ///
    /// Rebinding the node that is already bound does nothing. Any other
    /// change cancels an active drag first.
    pub fn set_target_node(&mut self, target: Option<SceneNodeRef>) {
        if target == self.target {
            return;
        }
        self.cancel();
        self.target = target;
        tracing::debug!(
            "{:?} gizmo target set to {:?}",
            self.kind,
            self.target.as_ref().map(SceneNodeRef::id)
        );
        self.notify(Property::TargetNode);
    }

    /// Fresh read of the target's world position
    pub fn target_position(&self) -> Option<Vec3> {
        self.target_transform().map(|transform| transform.position)
    }

    fn target_transform(&self) -> Option<NodeTransform> {
        self.target.as_ref()?.transform()
    }

    fn emit(&mut self, event: GizmoEvent) {
        for listener in &mut self.listeners {
            listener.on_event(&event);
        }
    }

    fn notify(&mut self, property: Property) {
        for listener in &mut self.listeners {
            listener.on_property_changed(property);
        }
    }
}

impl Drop for Gizmo {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for Gizmo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gizmo")
            .field("kind", &self.kind)
            .field("gizmo_size", &self.gizmo_size)
            .field("transform_mode", &self.transform_mode)
            .field("snap", &self.snap)
            .field("target", &self.target)
            .field("active_axis", &self.active_axis())
            .field("hovered_axis", &self.hovered)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
