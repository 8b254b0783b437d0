#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::TRANSPARENT_CORNER_ALPHA;
use crate::config::CornerStyle;
use crate::geometry::{Anchor, Scale, Size};
use crate::headless::{DrawOp, HeadlessTarget, ManualFrames, RecordingLayer};

type TestControls = Controls<HeadlessTarget, RecordingLayer, ManualFrames>;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// 100×100 target centered on (300, 300).
fn centered_target() -> HeadlessTarget {
    HeadlessTarget::new(pt(300.0, 300.0), Size::new(100.0, 100.0)).with_anchor(Anchor::CENTER)
}

/// Square handles of size 20, padding 20, centered scaling.
fn scenario_config() -> ControlsConfig {
    ControlsConfig {
        corner_size: 20.0,
        padding: 20.0,
        corner_style: CornerStyle::Square,
        centered_scaling: true,
        ..Default::default()
    }
}

fn build(config: ControlsConfig, target: HeadlessTarget) -> TestControls {
    Controls::new(config, target, RecordingLayer::default(), ManualFrames::default()).unwrap()
}

fn geometry(controls: &TestControls) -> OverlayGeometry {
    *controls.geometry().unwrap()
}

/// Fire the outstanding frame, if any, and let the overlay apply it.
fn fire(controls: &mut TestControls) {
    if controls.frames_mut().fire().is_some() {
        controls.on_frame().unwrap();
    }
}

// --- Construction ---

#[test]
fn construction_geometry() {
    let controls = build(scenario_config(), centered_target());
    let g = geometry(&controls);
    assert_eq!(g.box_corners.tl, pt(250.0, 250.0));
    assert_eq!(g.box_corners.br, pt(350.0, 350.0));
    assert_eq!(g.border.tl, pt(230.0, 230.0));
    assert_eq!(g.border.br, pt(370.0, 370.0));
    assert_eq!(g.handles[HandlePosition::Mr].center, pt(370.0, 300.0));
    assert_eq!(g.handles[HandlePosition::Mt].center, pt(300.0, 230.0));
}

#[test]
fn construction_draws_hit_area_border_and_handles() {
    let controls = build(scenario_config(), centered_target());
    let layer = controls.layer();
    assert_eq!(layer.children.len(), 10);
    assert_eq!(layer.handle_positions(), HandlePosition::ALL.to_vec());
    assert!(layer.visible);
    assert!(layer.interactive);
}

#[test]
fn hidden_borders_hide_layer() {
    let config = ControlsConfig { has_borders: false, ..scenario_config() };
    let controls = build(config, centered_target());
    assert!(!controls.layer().visible);
}

#[test]
fn only_visible_handles_are_drawn() {
    let config =
        ControlsConfig { control_visible_list: vec![HandlePosition::Br, HandlePosition::Tl], ..scenario_config() };
    let controls = build(config, centered_target());
    assert_eq!(controls.layer().children.len(), 4);
    assert_eq!(controls.layer().handle_positions(), vec![HandlePosition::Tl, HandlePosition::Br]);
}

#[test]
fn invalid_corner_size_leaves_host_untouched() {
    let config = ControlsConfig { corner_size: -5.0, ..scenario_config() };
    let mut target = HeadlessTarget::new(pt(250.0, 250.0), Size::new(100.0, 100.0));
    let original = target;
    let mut layer = RecordingLayer::default();
    let mut frames = ManualFrames::default();

    assert!(matches!(
        Controls::new(config, &mut target, &mut layer, &mut frames),
        Err(ControlsError::InvalidConfig(_))
    ));
    assert_eq!(target, original);
    assert_eq!(layer, RecordingLayer::default());
    assert_eq!(frames.requests, 0);
}

#[test]
fn negative_padding_rejected() {
    let config = ControlsConfig { padding: -1.0, ..scenario_config() };
    let result = Controls::new(config, centered_target(), RecordingLayer::default(), ManualFrames::default());
    assert!(matches!(result, Err(ControlsError::InvalidConfig(_))));
}

#[test]
fn centered_scaling_moves_anchor_to_center() {
    let target = HeadlessTarget::new(pt(250.0, 250.0), Size::new(100.0, 100.0));
    let controls = build(scenario_config(), target);
    assert_eq!(controls.target().anchor, Anchor::CENTER);
    assert_eq!(controls.target().position, pt(300.0, 300.0));
    assert_eq!(geometry(&controls).box_corners.tl, pt(250.0, 250.0));
}

#[test]
fn non_centered_construction_keeps_anchor() {
    let target = HeadlessTarget::new(pt(250.0, 250.0), Size::new(100.0, 100.0));
    let controls = build(ControlsConfig::default(), target);
    assert_eq!(controls.target().anchor, Anchor::TOP_LEFT);
    assert_eq!(controls.transform().origin_x, OriginX::Left);
    assert_eq!(controls.transform().origin_y, OriginY::Top);
}

#[test]
fn construction_reads_existing_scale() {
    let target = centered_target().with_scale(Scale::new(2.0, 1.0));
    let controls = build(scenario_config(), target);
    assert_eq!(controls.transform().scale, Scale::new(2.0, 1.0));
    assert_eq!(geometry(&controls).box_corners.tl, pt(200.0, 250.0));
}

// --- Drawing ---

#[test]
fn hit_area_and_border_shapes() {
    let controls = build(scenario_config(), centered_target());
    let children = &controls.layer().children;
    let config = controls.config();

    let hit = &children[0];
    assert_eq!(hit.fill, Some((config.corner_color, HIT_AREA_ALPHA)));
    assert_eq!(
        hit.ops,
        vec![DrawOp::Polygon(vec![pt(220.0, 220.0), pt(380.0, 220.0), pt(380.0, 380.0), pt(220.0, 380.0)])]
    );
    assert!(hit.interactive);

    let border = &children[1];
    assert_eq!(border.stroke, Some((BORDER_LINE_WIDTH, config.border_color)));
    assert_eq!(border.fill, Some((config.corner_color, BORDER_FILL_ALPHA)));
    assert_eq!(
        border.ops,
        vec![DrawOp::Polygon(vec![pt(230.0, 230.0), pt(370.0, 230.0), pt(370.0, 370.0), pt(230.0, 370.0)])]
    );
}

#[test]
fn square_handles_use_footprint_and_style() {
    let controls = build(scenario_config(), centered_target());
    let footprint = geometry(&controls).handles[HandlePosition::Mr].footprint;
    let shape = controls.layer().handle_shape(HandlePosition::Mr).unwrap();
    assert_eq!(shape.ops, vec![DrawOp::Polygon(footprint.points().to_vec())]);
    assert_eq!(shape.fill, Some((controls.config().corner_color, TRANSPARENT_CORNER_ALPHA)));
    assert_eq!(shape.cursor, Some(Cursor::EwResize));
}

#[test]
fn refresh_is_idempotent() {
    let mut controls = build(scenario_config(), centered_target());
    let before = geometry(&controls);
    let children = controls.layer().children.clone();
    controls.refresh().unwrap();
    assert_eq!(geometry(&controls), before);
    assert_eq!(controls.layer().children, children);
    assert_eq!(controls.layer().clears, 2);
}

#[test]
fn refresh_follows_moved_target() {
    let mut controls = build(scenario_config(), centered_target());
    controls.target_mut().position = pt(400.0, 300.0);
    controls.refresh().unwrap();
    assert_eq!(geometry(&controls).box_corners.tl, pt(350.0, 250.0));
    assert_eq!(geometry(&controls).handles[HandlePosition::Mr].center, pt(470.0, 300.0));
}

#[test]
fn press_after_external_rescale_keeps_box_in_place() {
    let mut controls = build(ControlsConfig::default(), centered_target());
    controls.target_mut().scale = Scale::new(2.0, 1.0);
    controls.refresh().unwrap();
    let before = geometry(&controls).box_corners;
    assert_eq!(before.tl, pt(200.0, 250.0));
    assert_eq!(before.br, pt(400.0, 350.0));

    let mr = geometry(&controls).handles[HandlePosition::Mr].center;
    controls.on_pointer_down(HandlePosition::Mr, mr).unwrap();
    assert_eq!(controls.target().anchor, Anchor::new(0.0, 0.5));
    assert_eq!(controls.target().position, pt(200.0, 300.0));
    assert_eq!(geometry(&controls).box_corners, before);
    assert_eq!(controls.transform().drag_start_scale, Scale::new(2.0, 1.0));

    controls.on_pointer_move(pt(500.0, 300.0));
    fire(&mut controls);
    assert_eq!(controls.target().scale, Scale::new(3.0, 1.0));
    assert_eq!(geometry(&controls).box_corners.br, pt(500.0, 350.0));
}

#[test]
fn press_after_external_mirror_uses_visual_sides() {
    let mut controls = build(ControlsConfig::default(), centered_target());
    controls.target_mut().scale = Scale::new(-1.0, 1.0);
    controls.refresh().unwrap();
    let before = geometry(&controls).box_corners;

    let mr = geometry(&controls).handles[HandlePosition::Mr].center;
    assert_eq!(mr, pt(350.0, 300.0));
    controls.on_pointer_down(HandlePosition::Mr, mr).unwrap();
    assert_eq!(controls.target().anchor, Anchor::new(1.0, 0.5));
    assert_eq!(controls.target().position, pt(250.0, 300.0));
    assert_eq!(geometry(&controls).box_corners, before);

    controls.on_pointer_move(pt(400.0, 300.0));
    fire(&mut controls);
    assert_eq!(controls.target().scale, Scale::new(-1.5, 1.0));
    assert_eq!(geometry(&controls).box_corners.br, pt(400.0, 350.0));
}

// --- Cursor ---

#[test]
fn hover_sets_cursor_while_idle_only() {
    let mut controls = build(scenario_config(), centered_target());
    controls.on_handle_hover(HandlePosition::Tl);
    assert_eq!(controls.layer().cursor, Cursor::NwseResize);

    controls.on_pointer_down(HandlePosition::Mr, pt(370.0, 300.0)).unwrap();
    assert_eq!(controls.layer().cursor, Cursor::EwResize);
    controls.on_handle_hover(HandlePosition::Tl);
    assert_eq!(controls.layer().cursor, Cursor::EwResize);

    controls.on_pointer_up();
    assert_eq!(controls.layer().cursor, Cursor::Auto);
}

#[test]
fn release_outside_ends_gesture() {
    let mut controls = build(scenario_config(), centered_target());
    controls.on_pointer_down(HandlePosition::Br, pt(370.0, 370.0)).unwrap();
    assert!(controls.is_dragging());
    controls.on_pointer_up_outside();
    assert!(!controls.is_dragging());
    assert_eq!(controls.layer().cursor, Cursor::Auto);
}

#[test]
fn release_while_idle_keeps_cursor() {
    let mut controls = build(scenario_config(), centered_target());
    controls.on_handle_hover(HandlePosition::Mt);
    controls.on_pointer_up();
    assert_eq!(controls.layer().cursor, Cursor::NsResize);
}

// --- Gestures ---

#[test]
fn move_while_idle_requests_nothing() {
    let mut controls = build(scenario_config(), centered_target());
    controls.on_pointer_move(pt(420.0, 300.0));
    assert_eq!(controls.frames().requests, 0);
    assert!(!controls.has_pending_frame());
}

#[test]
fn moves_coalesce_into_one_frame() {
    let mut controls = build(scenario_config(), centered_target());
    controls.on_pointer_down(HandlePosition::Mr, pt(370.0, 300.0)).unwrap();
    for x in [380.0, 400.0, 420.0] {
        controls.on_pointer_move(pt(x, 300.0));
    }
    assert_eq!(controls.frames().requests, 1);
    assert!(controls.has_pending_frame());
    assert_eq!(controls.target().scale, Scale::IDENTITY);

    fire(&mut controls);
    assert_eq!(controls.target().scale, Scale::new(2.0, 1.0));
    assert_eq!(controls.transform().scale, Scale::new(2.0, 1.0));
    assert!(!controls.has_pending_frame());

    let g = geometry(&controls);
    assert_eq!(g.box_corners.tl, pt(200.0, 250.0));
    assert_eq!(g.box_corners.br, pt(400.0, 350.0));
    assert_eq!(g.handles[HandlePosition::Mr].center, pt(420.0, 300.0));
}

#[test]
fn frame_without_pending_update_is_noop() {
    let mut controls = build(scenario_config(), centered_target());
    controls.on_frame().unwrap();
    assert_eq!(controls.layer().clears, 1);
    assert_eq!(controls.target().scale, Scale::IDENTITY);
}

#[test]
fn next_move_after_frame_requests_again() {
    let mut controls = build(scenario_config(), centered_target());
    controls.on_pointer_down(HandlePosition::Mr, pt(370.0, 300.0)).unwrap();
    controls.on_pointer_move(pt(400.0, 300.0));
    fire(&mut controls);
    controls.on_pointer_move(pt(420.0, 300.0));
    assert_eq!(controls.frames().requests, 2);
}

#[test]
fn edge_drag_relocates_anchor_to_opposite_edge() {
    let config = ControlsConfig { padding: 20.0, ..ControlsConfig::default() };
    let mut controls = build(config, centered_target());

    controls.on_pointer_down(HandlePosition::Mr, pt(370.0, 300.0)).unwrap();
    assert_eq!(controls.target().anchor, Anchor::new(0.0, 0.5));
    assert_eq!(controls.target().position, pt(250.0, 300.0));
    assert_eq!(geometry(&controls).box_corners.tl, pt(250.0, 250.0));

    controls.on_pointer_move(pt(470.0, 300.0));
    fire(&mut controls);
    assert_eq!(controls.target().scale, Scale::new(2.0, 1.0));
    let g = geometry(&controls);
    assert_eq!(g.box_corners.tl, pt(250.0, 250.0));
    assert_eq!(g.box_corners.br, pt(450.0, 350.0));
}

#[test]
fn dragging_through_anchor_mirrors_then_continues() {
    let mut controls = build(ControlsConfig::default(), centered_target());

    controls.on_pointer_down(HandlePosition::Mr, pt(350.0, 300.0)).unwrap();
    controls.on_pointer_move(pt(150.0, 300.0));
    fire(&mut controls);
    controls.on_pointer_up();
    assert_eq!(controls.target().scale, Scale::new(-1.0, 1.0));
    assert_eq!(controls.transform().origin_x, OriginX::Right);
    let g = geometry(&controls);
    assert_eq!(g.box_corners.tl, pt(150.0, 250.0));
    assert_eq!(g.box_corners.br, pt(250.0, 350.0));

    // The left handle now sits at 150; its opposite edge is the anchor.
    let ml = g.handles[HandlePosition::Ml].center;
    assert_eq!(ml, pt(150.0, 300.0));
    controls.on_pointer_down(HandlePosition::Ml, ml).unwrap();
    assert_eq!(controls.target().anchor, Anchor::new(0.0, 0.5));
    assert_eq!(controls.target().position, pt(250.0, 300.0));

    controls.on_pointer_move(pt(100.0, 300.0));
    fire(&mut controls);
    assert_eq!(controls.target().scale, Scale::new(-1.5, 1.0));
    let g = geometry(&controls);
    assert_eq!(g.box_corners.tl, pt(100.0, 250.0));
    assert_eq!(g.box_corners.br, pt(250.0, 350.0));
}

#[test]
fn pointer_down_flushes_pending_scale() {
    let mut controls = build(scenario_config(), centered_target());
    controls.on_pointer_down(HandlePosition::Mr, pt(370.0, 300.0)).unwrap();
    controls.on_pointer_move(pt(420.0, 300.0));
    assert!(controls.has_pending_frame());

    controls.on_pointer_down(HandlePosition::Mr, pt(420.0, 300.0)).unwrap();
    assert_eq!(controls.frames().cancels, 1);
    assert!(!controls.has_pending_frame());
    assert_eq!(controls.target().scale, Scale::new(2.0, 1.0));
    assert_eq!(controls.transform().drag_start_scale, Scale::new(2.0, 1.0));
}

#[test]
fn apply_scale_merges_axes_until_frame() {
    let mut controls = build(scenario_config(), centered_target());
    controls.apply_scale(Some(1.5), None);
    controls.apply_scale(None, Some(0.5));
    controls.apply_scale(None, None);
    assert_eq!(controls.frames().requests, 1);
    fire(&mut controls);
    assert_eq!(controls.target().scale, Scale::new(1.5, 0.5));
    assert_eq!(controls.transform().scale, Scale::new(1.5, 0.5));
}

#[test]
fn into_parts_cancels_pending_frame() {
    let mut controls = build(scenario_config(), centered_target());
    controls.on_pointer_down(HandlePosition::Mr, pt(370.0, 300.0)).unwrap();
    controls.on_pointer_move(pt(420.0, 300.0));

    let (target, _layer, frames) = controls.into_parts();
    assert_eq!(frames.cancels, 1);
    assert_eq!(frames.outstanding(), None);
    assert_eq!(target.scale, Scale::IDENTITY);
}

#[test]
fn borrowed_host_parts_are_updated_in_place() {
    let mut target = centered_target();
    let mut layer = RecordingLayer::default();
    let mut frames = ManualFrames::default();
    {
        let mut controls = Controls::new(scenario_config(), &mut target, &mut layer, &mut frames).unwrap();
        controls.apply_scale(Some(3.0), None);
        if controls.frames_mut().fire().is_some() {
            controls.on_frame().unwrap();
        }
    }
    assert_eq!(target.scale, Scale::new(3.0, 1.0));
    assert_eq!(layer.children.len(), 10);
    assert_eq!(frames.requests, 1);
}
