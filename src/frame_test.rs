use super::*;
use crate::headless::ManualFrames;

fn x_only(x: f64) -> ScaleUpdate {
    ScaleUpdate::new(Some(x), None)
}

#[test]
fn first_schedule_requests_a_frame() {
    let mut frames = ManualFrames::default();
    let mut slot = FrameSlot::new();
    slot.schedule(x_only(1.5), &mut frames);
    assert_eq!(frames.requests, 1);
    assert!(frames.outstanding().is_some());
    assert!(slot.is_pending());
}

#[test]
fn later_schedules_share_the_frame_and_overwrite() {
    let mut frames = ManualFrames::default();
    let mut slot = FrameSlot::new();
    slot.schedule(x_only(1.5), &mut frames);
    slot.schedule(x_only(1.8), &mut frames);
    slot.schedule(x_only(2.0), &mut frames);
    assert_eq!(frames.requests, 1);
    assert_eq!(slot.take(), Some(x_only(2.0)));
}

#[test]
fn overwrite_is_per_axis() {
    let mut frames = ManualFrames::default();
    let mut slot = FrameSlot::new();
    slot.schedule(ScaleUpdate::new(Some(1.5), Some(1.2)), &mut frames);
    slot.schedule(x_only(2.0), &mut frames);
    assert_eq!(slot.take(), Some(ScaleUpdate::new(Some(2.0), Some(1.2))));
}

#[test]
fn take_clears_slot() {
    let mut frames = ManualFrames::default();
    let mut slot = FrameSlot::new();
    slot.schedule(x_only(1.5), &mut frames);
    assert_eq!(slot.take(), Some(x_only(1.5)));
    assert!(!slot.is_pending());
    assert_eq!(slot.take(), None);
    slot.schedule(x_only(1.7), &mut frames);
    assert_eq!(frames.requests, 2);
}

#[test]
fn schedule_after_take_requests_again() {
    let mut frames = ManualFrames::default();
    let mut slot = FrameSlot::new();
    slot.schedule(x_only(1.5), &mut frames);
    frames.fire();
    slot.take();
    slot.schedule(x_only(1.7), &mut frames);
    assert_eq!(frames.requests, 2);
}

#[test]
fn cancel_releases_frame_and_returns_pending() {
    let mut frames = ManualFrames::default();
    let mut slot = FrameSlot::new();
    slot.schedule(x_only(1.5), &mut frames);
    assert_eq!(slot.cancel(&mut frames), Some(x_only(1.5)));
    assert_eq!(frames.cancels, 1);
    assert!(frames.outstanding().is_none());
    assert!(!slot.is_pending());
}

#[test]
fn cancel_when_idle_does_nothing() {
    let mut frames = ManualFrames::default();
    let mut slot: FrameSlot<u64> = FrameSlot::new();
    assert_eq!(slot.cancel(&mut frames), None);
    assert_eq!(frames.cancels, 0);
}
