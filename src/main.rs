//! Headless replay of the demo scene: a 100×100 target at (300, 300) with a
//! centered anchor, driven through two scripted gestures. Set `RUST_LOG` or
//! rely on the default subscriber to see the geometry after each step.

use tracing::info;
use transform_controls::headless::{HeadlessTarget, ManualFrames, RecordingLayer};
use transform_controls::{Anchor, Controls, ControlsConfig, ControlsError, HandlePosition, Point, Size};

const DEMO_CONFIG: &str = r#"{
    "cornerColor": 15494144,
    "cornerSize": 20,
    "padding": 20,
    "cornerStyle": "square",
    "cornerStrokeColor": 15494144,
    "borderColor": 15494144,
    "transparentCorners": true,
    "hasBorders": true,
    "centeredScaling": true,
    "controlVisibleList": ["tr", "bl", "br", "mb", "tl", "mt", "mr", "ml"]
}"#;

type DemoControls = Controls<HeadlessTarget, RecordingLayer, ManualFrames>;

fn main() -> Result<(), ControlsError> {
    tracing_subscriber::fmt::init();

    let config = ControlsConfig::from_json(DEMO_CONFIG)?;
    let target =
        HeadlessTarget::new(Point::new(300.0, 300.0), Size::new(100.0, 100.0)).with_anchor(Anchor::CENTER);
    let mut controls = Controls::new(config, target, RecordingLayer::default(), ManualFrames::default())?;
    report(&controls, "initial");

    // Stretch to the right.
    drag(&mut controls, HandlePosition::Mr, &[(10.0, 0.0), (25.0, 0.0), (50.0, 0.0)])?;
    report(&controls, "after mr drag");

    // Pull the bottom-right corner through the center and out the other side.
    drag(&mut controls, HandlePosition::Br, &[(-60.0, -60.0), (-120.0, -120.0), (-160.0, -160.0)])?;
    report(&controls, "after br drag through center");

    let (target, layer, frames) = controls.into_parts();
    info!(
        scale_x = target.scale.x,
        scale_y = target.scale.y,
        shapes = layer.children.len(),
        frames = frames.requests,
        "replay: done"
    );
    Ok(())
}

/// Press `handle`, move by each offset (one frame per move), release.
fn drag(controls: &mut DemoControls, handle: HandlePosition, offsets: &[(f64, f64)]) -> Result<(), ControlsError> {
    let Some(start) = controls.geometry().map(|g| g.handles[handle].center) else {
        return Ok(());
    };

    controls.on_pointer_down(handle, start)?;
    for &(dx, dy) in offsets {
        controls.on_pointer_move(start.offset(dx, dy));
        if controls.frames_mut().fire().is_some() {
            controls.on_frame()?;
        }
    }
    controls.on_pointer_up();
    Ok(())
}

fn report(controls: &DemoControls, label: &str) {
    let scale = controls.transform().scale;
    let Some(geometry) = controls.geometry() else {
        return;
    };
    let border = geometry.border;
    info!(
        label,
        scale_x = scale.x,
        scale_y = scale.y,
        box_width = geometry.box_corners.width(),
        box_height = geometry.box_corners.height(),
        cursor = controls.layer().cursor.css_name(),
        border_tl = ?(border.tl.x, border.tl.y),
        border_br = ?(border.br.x, border.br.y),
        mr = ?(geometry.handles[HandlePosition::Mr].center.x, geometry.handles[HandlePosition::Mr].center.y),
        "replay: geometry"
    );
}
