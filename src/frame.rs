/// Coalesces bursts of events into at most one pending frame callback.
///
/// The gate owns the handle of the pending frame. While a handle is held,
/// further `schedule` calls are dropped; the frame callback calls
/// `complete` first thing so the next event can schedule again.
pub struct FrameGate<H> {
    pending: Option<H>,
}

impl<H> Default for FrameGate<H> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<H> FrameGate<H> {
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns `false` without calling `request` if a frame is already queued.
    pub fn schedule(&mut self, request: impl FnOnce() -> H) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(request());
        true
    }

    pub fn complete(&mut self) -> Option<H> {
        self.pending.take()
    }
}
