/// Opaque id returned by the host when a frame callback is queued.
pub type FrameHandle = i32;

/// Per-frame callback facility. The browser implementation wraps
/// `requestAnimationFrame`; tests drive a fake.
pub trait FrameScheduler {
    /// Queue the owner's frame callback. `None` if the host refused.
    fn request_frame(&mut self) -> Option<FrameHandle>;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// "At most one pending frame" guard for event-driven work such as scroll
/// handling. Events arriving while a frame is queued are coalesced.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Returns true if the caller should queue a frame now.
    #[inline]
    pub fn try_acquire(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Called at the start of the frame callback.
    #[inline]
    pub fn release(&mut self) {
        self.pending = false;
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Uninitialized,
    Running { pending: Option<FrameHandle> },
    Paused,
    Destroyed,
}

/// Continuous frame loop with an explicit pause/resume transition keyed off
/// page visibility.
///
/// The loop never calls back into its owner. The owner's frame callback
/// asks [`AnimationLoop::on_frame`] whether to do work; the answer is `false`
/// for callbacks that slipped through after a pause or teardown.
#[derive(Clone, Copy, Debug)]
pub struct AnimationLoop {
    state: LoopState,
}

impl Default for AnimationLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationLoop {
    pub fn new() -> Self {
        Self {
            state: LoopState::Uninitialized,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, LoopState::Running { .. })
    }

    /// Uninitialized -> Running. A loop started while the page is already
    /// hidden goes straight to Paused.
    pub fn start<S: FrameScheduler>(&mut self, scheduler: &mut S, hidden: bool) {
        if self.state != LoopState::Uninitialized {
            return;
        }
        if hidden {
            self.state = LoopState::Paused;
        } else {
            self.state = LoopState::Running {
                pending: scheduler.request_frame(),
            };
        }
    }

    /// Called from the frame callback. Queues the next frame and returns
    /// true when the owner should update and draw.
    pub fn on_frame<S: FrameScheduler>(&mut self, scheduler: &mut S) -> bool {
        match self.state {
            LoopState::Running { .. } => {
                self.state = LoopState::Running {
                    pending: scheduler.request_frame(),
                };
                true
            }
            _ => false,
        }
    }

    pub fn set_hidden<S: FrameScheduler>(&mut self, scheduler: &mut S, hidden: bool) {
        match (self.state, hidden) {
            (LoopState::Running { pending }, true) => {
                if let Some(h) = pending {
                    scheduler.cancel_frame(h);
                }
                self.state = LoopState::Paused;
            }
            (LoopState::Paused, false) => {
                self.state = LoopState::Running {
                    pending: scheduler.request_frame(),
                };
            }
            _ => {}
        }
    }

    pub fn destroy<S: FrameScheduler>(&mut self, scheduler: &mut S) {
        if let LoopState::Running { pending: Some(h) } = self.state {
            scheduler.cancel_frame(h);
        }
        self.state = LoopState::Destroyed;
    }
}
