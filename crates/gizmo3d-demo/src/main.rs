//! Gizmo3D demo host
//!
//! Runs scripted drags against translation, rotation and scale gizmos bound
//! to one node, printing every event as a JSON line and painting each gizmo
//! into a display list.
//!
//! Usage: `gizmo3d-demo [settings.ron]`

mod controller;

use gizmo3d_core::{
    Axis, Camera, Gizmo, GizmoEvent, GizmoKind, GizmoSettings, HandleShape, NodeTransform,
    SceneNodeRef, TransformNode, Viewport,
};
use gizmo3d_draw::{DisplayList, GizmoPainter};
use glam::{Vec2, Vec3};

use controller::TrivialController;

const VIEWPORT_WIDTH: f32 = 800.0;
const VIEWPORT_HEIGHT: f32 = 600.0;
const DRAG_STEPS: usize = 4;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gizmo3d_core=debug,gizmo3d_demo=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Gizmo3D demo");

    let settings = match std::env::args().nth(1) {
        Some(path) => GizmoSettings::load(&path)?,
        None => GizmoSettings::default(),
    };

    let mut camera = Camera::new(VIEWPORT_WIDTH / VIEWPORT_HEIGHT);
    camera.orbit(0.3, 0.1);
    let viewport = camera.viewport(VIEWPORT_WIDTH, VIEWPORT_HEIGHT);

    let node = TransformNode::new("cube", NodeTransform::from_position(Vec3::new(0.5, 0.0, 0.0)));
    let painter = GizmoPainter::new(settings.colors);

    for kind in [GizmoKind::Translation, GizmoKind::Rotation, GizmoKind::Scale] {
        let mut gizmo = Gizmo::from_settings(kind, &settings);
        gizmo.set_target_node(Some(SceneNodeRef::new(&node)));
        gizmo.add_listener(TrivialController::new(node.clone(), kind));
        gizmo.add_listener(move |event: &GizmoEvent| print_event(kind, event));

        if kind == GizmoKind::Rotation {
            gizmo.set_snap_enabled(true);
        }

        let axes: &[Axis] = match kind {
            GizmoKind::Scale => &[Axis::X, Axis::Uniform],
            GizmoKind::Translation | GizmoKind::Rotation => &[Axis::X, Axis::Y, Axis::Z],
        };
        for &axis in axes {
            run_drag(&mut gizmo, axis, &viewport);
        }

        let mut list = DisplayList::new();
        let painted = painter.paint(Some(&mut list), &gizmo, &viewport);
        tracing::info!(
            "Painted {} {:?} handles with {} draw commands",
            painted,
            kind,
            list.len()
        );
    }

    println!("{}", serde_json::to_string(&node.transform())?);
    Ok(())
}

/// Drag `axis` from its handle along a short scripted path.
fn run_drag(gizmo: &mut Gizmo, axis: Axis, viewport: &Viewport) {
    let Some(path) = drag_path(gizmo, axis, viewport) else {
        tracing::info!("{:?} handle {:?} not visible from this camera", gizmo.kind(), axis);
        return;
    };
    let Some((&grab, moves)) = path.split_first() else {
        return;
    };
    if !gizmo.pointer_down(grab, viewport) {
        tracing::info!("{:?} handle {:?} missed at {:?}", gizmo.kind(), axis, grab);
        return;
    }
    for &pointer in moves {
        gizmo.pointer_move(pointer, viewport);
    }
    gizmo.pointer_up();
}

/// Grab point followed by pointer samples for a drag on `axis`.
fn drag_path(gizmo: &Gizmo, axis: Axis, viewport: &Viewport) -> Option<Vec<Vec2>> {
    let layout = gizmo.handle_layout(viewport)?;
    let handle = layout.handle(axis)?;
    let path = match &handle.shape {
        HandleShape::Segment { start, end } => {
            let grab = start.lerp(*end, 0.7);
            let dir = (*end - *start).normalize_or_zero();
            (0..=DRAG_STEPS)
                .map(|i| grab + dir * 15.0 * i as f32)
                .collect()
        }
        HandleShape::Ring(ring) => {
            // Walk a quarter of the ring's samples
            let quarter = ring.points.len() / 4;
            (0..=DRAG_STEPS)
                .map(|i| ring.points[(i * quarter / DRAG_STEPS) % ring.points.len()])
                .collect()
        }
        HandleShape::Square { center, .. } => {
            let diagonal = Vec2::new(1.0, -1.0).normalize();
            (0..=DRAG_STEPS)
                .map(|i| *center - diagonal * 8.0 * i as f32)
                .collect()
        }
    };
    Some(path)
}

fn print_event(kind: GizmoKind, event: &GizmoEvent) {
    let line = serde_json::json!({
        "signal": event.signal_name(kind),
        "payload": event,
    });
    println!("{line}");
}
