//! Per-frame coalescing of scale updates.
//!
//! Pointer moves can arrive many times between paints. Only the latest
//! scale matters, so updates collect in a single slot and at most one frame
//! callback is outstanding at a time.

#[cfg(test)]
#[path = "frame_test.rs"]
mod frame_test;

use crate::drag::ScaleUpdate;
use crate::host::FrameScheduler;

/// One pending scale update plus the frame request that will apply it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSlot<H> {
    request: Option<H>,
    pending: Option<ScaleUpdate>,
}

impl<H> Default for FrameSlot<H> {
    fn default() -> Self {
        Self { request: None, pending: None }
    }
}

impl<H: Copy> FrameSlot<H> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Queue `update`, requesting a frame only if none is outstanding.
    ///
    /// A newer update overwrites the pending value on every axis it sets.
    pub fn schedule<F>(&mut self, update: ScaleUpdate, frames: &mut F)
    where
        F: FrameScheduler<Handle = H> + ?Sized,
    {
        self.pending = Some(match self.pending {
            Some(pending) => pending.merge(update),
            None => update,
        });
        if self.request.is_none() {
            self.request = Some(frames.request_frame());
        }
    }

    /// Take the pending update at the frame boundary.
    pub fn take(&mut self) -> Option<ScaleUpdate> {
        self.request = None;
        self.pending.take()
    }

    /// Cancel the outstanding frame request and return what was pending.
    pub fn cancel<F>(&mut self, frames: &mut F) -> Option<ScaleUpdate>
    where
        F: FrameScheduler<Handle = H> + ?Sized,
    {
        if let Some(handle) = self.request.take() {
            frames.cancel_frame(handle);
        }
        self.pending.take()
    }
}
