//! Gizmo events and listeners

use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;

use crate::axis::{Axis, GizmoKind, TransformMode};

/// Payload of a delta event
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DragDelta {
    /// Axis being dragged
    pub axis: Axis,
    /// Transform mode captured at drag start
    pub mode: TransformMode,
    /// Total since drag start: distance, angle in degrees, or scale factor
    pub value: f32,
    /// Whether snapping was applied to `value`
    pub snap_active: bool,
}

/// Drag lifecycle event
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum GizmoEvent {
    /// A drag started on `axis`
    Started {
        /// Dragged axis
        axis: Axis,
    },
    /// The pointer moved during a drag
    Delta(DragDelta),
    /// The drag on `axis` finished or was cancelled
    Ended {
        /// Dragged axis
        axis: Axis,
    },
}

impl GizmoEvent {
    /// Axis the event refers to.
    pub fn axis(&self) -> Axis {
        match self {
            GizmoEvent::Started { axis } | GizmoEvent::Ended { axis } => *axis,
            GizmoEvent::Delta(delta) => delta.axis,
        }
    }

    /// Per-kind event name, e.g. `rotationDelta` or `scaleEnded`.
    pub fn signal_name(&self, kind: GizmoKind) -> String {
        let suffix = match self {
            GizmoEvent::Started { .. } => "Started",
            GizmoEvent::Delta(_) => "Delta",
            GizmoEvent::Ended { .. } => "Ended",
        };
        format!("{}{}", kind.signal_prefix(), suffix)
    }
}

/// Observable gizmo properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Property {
    /// Handle length or ring radius
    GizmoSize,
    /// Host-selected or dragged axis
    ActiveAxis,
    /// Axis under the pointer while idle
    HoveredAxis,
    /// World or local axes
    TransformMode,
    /// Snap toggle
    SnapEnabled,
    /// Snap increment (also reported for `snap_angle` on rotation gizmos)
    SnapIncrement,
    /// Absolute or relative snapping
    SnapToAbsolute,
    /// Scale arrow start fraction
    ArrowStartRatio,
    /// Scale arrow end fraction
    ArrowEndRatio,
    /// Pointer distance for hit testing
    HitTolerance,
    /// Bound scene node
    TargetNode,
}

/// Receives gizmo events
///
/// Closures taking `&GizmoEvent` implement this trait directly.
pub trait GizmoListener {
    /// Called for every drag lifecycle event, in order.
    fn on_event(&mut self, event: &GizmoEvent);

    /// Called after a property actually changed value.
    fn on_property_changed(&mut self, _property: Property) {}
}

impl<F> GizmoListener for F
where
    F: FnMut(&GizmoEvent),
{
    fn on_event(&mut self, event: &GizmoEvent) {
        self(event)
    }
}

/// Shared recorder of events and property changes.
///
/// Clones share the same storage, so one clone can be handed to the gizmo
/// while another is inspected.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<GizmoEvent>>>,
    properties: Arc<Mutex<Vec<Property>>>,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of recorded events.
    pub fn events(&self) -> Vec<GizmoEvent> {
        self.events.lock().clone()
    }

    /// Snapshot of recorded property changes.
    pub fn properties(&self) -> Vec<Property> {
        self.properties.lock().clone()
    }

    /// Number of recorded events matching `pred`.
    pub fn count(&self, pred: impl Fn(&GizmoEvent) -> bool) -> usize {
        self.events.lock().iter().filter(|event| pred(event)).count()
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        self.events.lock().clear();
        self.properties.lock().clear();
    }
}

impl GizmoListener for EventLog {
    fn on_event(&mut self, event: &GizmoEvent) {
        self.events.lock().push(*event);
    }

    fn on_property_changed(&mut self, property: Property) {
        self.properties.lock().push(property);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_names() {
        let started = GizmoEvent::Started { axis: Axis::X };
        let delta = GizmoEvent::Delta(DragDelta {
            axis: Axis::Z,
            mode: TransformMode::Local,
            value: 45.0,
            snap_active: true,
        });
        let ended = GizmoEvent::Ended { axis: Axis::Uniform };

        assert_eq!(started.signal_name(GizmoKind::Translation), "translationStarted");
        assert_eq!(delta.signal_name(GizmoKind::Rotation), "rotationDelta");
        assert_eq!(ended.signal_name(GizmoKind::Scale), "scaleEnded");
        assert_eq!(delta.axis(), Axis::Z);
    }

    #[test]
    fn test_closure_listener() {
        let mut seen = Vec::new();
        {
            let mut listener = |event: &GizmoEvent| seen.push(event.axis());
            listener.on_event(&GizmoEvent::Started { axis: Axis::Y });
            listener.on_property_changed(Property::GizmoSize);
        }
        assert_eq!(seen, vec![Axis::Y]);
    }

    #[test]
    fn test_event_log_clones_share_storage() {
        let log = EventLog::new();
        let mut sink = log.clone();
        sink.on_event(&GizmoEvent::Ended { axis: Axis::X });
        sink.on_property_changed(Property::SnapEnabled);

        assert_eq!(log.events(), vec![GizmoEvent::Ended { axis: Axis::X }]);
        assert_eq!(log.properties(), vec![Property::SnapEnabled]);
        assert_eq!(log.count(|e| matches!(e, GizmoEvent::Ended { .. })), 1);

        log.clear();
        assert!(sink.events().is_empty());
    }
}
