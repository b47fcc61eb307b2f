/// Scheduler state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulerState {
    /// No recomputation pending.
    Idle,
    /// A rendering-frame callback has been requested and not yet fired.
    Pending,
}

/// Coalesces scroll and resize signals into at most one recomputation per
/// rendering frame.
///
/// Any signal while [`SchedulerState::Idle`] transitions to
/// [`SchedulerState::Pending`] and asks the caller to request exactly one
/// future rendering-frame callback; further signals while pending are
/// no-ops. The pending request is uncancellable once made — cancelling
/// would risk permanently stale visuals — so every signal is eventually
/// followed by a pass.
#[derive(Debug)]
pub struct FrameScheduler {
    state: SchedulerState,
}

impl FrameScheduler {
    /// A scheduler in the idle state.
    pub fn new() -> Self {
        Self {
            state: SchedulerState::Idle,
        }
    }

    /// Record a scroll or resize signal.
    ///
    /// Returns `true` when the caller must request a rendering-frame
    /// callback; `false` when one is already pending.
    pub fn signal(&mut self) -> bool {
        match self.state {
            SchedulerState::Idle => {
                self.state = SchedulerState::Pending;
                true
            }
            SchedulerState::Pending => false,
        }
    }

    /// Acknowledge the rendering-frame callback firing.
    ///
    /// Transitions back to idle before the pass runs, so a signal arriving
    /// during the pass schedules the next frame rather than being lost.
    pub fn begin_frame(&mut self) {
        self.state = SchedulerState::Idle;
    }

    /// Current state.
    pub fn state(&self) -> SchedulerState {
        self.state
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/scheduler.rs"]
mod tests;
