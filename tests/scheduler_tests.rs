// Host-side tests for the frame loop state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod scheduler {
    include!("../src/core/scheduler.rs");
}

use scheduler::*;

/// Records requests and cancellations in place of requestAnimationFrame.
#[derive(Default)]
struct FakeScheduler {
    next: FrameHandle,
    pending: Vec<FrameHandle>,
    requested: usize,
    cancelled: Vec<FrameHandle>,
    refuse: bool,
}

impl FrameScheduler for FakeScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        if self.refuse {
            return None;
        }
        self.next += 1;
        self.requested += 1;
        self.pending.push(self.next);
        Some(self.next)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.retain(|h| *h != handle);
        self.cancelled.push(handle);
    }
}

impl FakeScheduler {
    /// Fire the oldest pending frame, as the display would.
    fn fire(&mut self, lp: &mut AnimationLoop) -> Option<bool> {
        if self.pending.is_empty() {
            return None;
        }
        self.pending.remove(0);
        Some(lp.on_frame(self))
    }
}

#[test]
fn start_requests_first_frame() {
    let mut s = FakeScheduler::default();
    let mut lp = AnimationLoop::new();
    assert_eq!(lp.state(), LoopState::Uninitialized);
    lp.start(&mut s, false);
    assert_eq!(lp.state(), LoopState::Running { pending: Some(1) });
    assert_eq!(s.pending, vec![1]);
}

#[test]
fn each_frame_schedules_exactly_one_more() {
    let mut s = FakeScheduler::default();
    let mut lp = AnimationLoop::new();
    lp.start(&mut s, false);
    for _ in 0..10 {
        assert_eq!(s.fire(&mut lp), Some(true));
        assert_eq!(s.pending.len(), 1);
    }
    assert_eq!(s.requested, 11);
}

#[test]
fn hidden_page_cancels_pending_frame_until_visible() {
    let mut s = FakeScheduler::default();
    let mut lp = AnimationLoop::new();
    lp.start(&mut s, false);
    s.fire(&mut lp);

    lp.set_hidden(&mut s, true);
    assert_eq!(lp.state(), LoopState::Paused);
    assert!(s.pending.is_empty(), "no callback may fire while hidden");
    assert_eq!(s.cancelled, vec![2]);
    assert_eq!(s.fire(&mut lp), None);

    // repeated hidden notifications change nothing
    lp.set_hidden(&mut s, true);
    assert_eq!(s.cancelled.len(), 1);

    lp.set_hidden(&mut s, false);
    assert!(lp.is_running());
    assert_eq!(s.pending.len(), 1);
    assert_eq!(s.fire(&mut lp), Some(true));
}

#[test]
fn stale_callback_after_pause_does_no_work() {
    let mut s = FakeScheduler::default();
    let mut lp = AnimationLoop::new();
    lp.start(&mut s, false);
    lp.set_hidden(&mut s, true);
    let before = s.requested;
    // host delivered a frame that was already in flight
    assert!(!lp.on_frame(&mut s));
    assert_eq!(s.requested, before);
    assert_eq!(lp.state(), LoopState::Paused);
}

#[test]
fn start_while_hidden_waits_for_visibility() {
    let mut s = FakeScheduler::default();
    let mut lp = AnimationLoop::new();
    lp.start(&mut s, true);
    assert_eq!(lp.state(), LoopState::Paused);
    assert_eq!(s.requested, 0);
    lp.set_hidden(&mut s, false);
    assert_eq!(s.requested, 1);
}

#[test]
fn start_is_one_shot() {
    let mut s = FakeScheduler::default();
    let mut lp = AnimationLoop::new();
    lp.start(&mut s, false);
    lp.start(&mut s, false);
    assert_eq!(s.requested, 1);
}

#[test]
fn destroy_cancels_and_is_terminal() {
    let mut s = FakeScheduler::default();
    let mut lp = AnimationLoop::new();
    lp.start(&mut s, false);
    lp.destroy(&mut s);
    assert_eq!(lp.state(), LoopState::Destroyed);
    assert!(s.pending.is_empty());

    lp.set_hidden(&mut s, false);
    lp.start(&mut s, false);
    assert!(!lp.on_frame(&mut s));
    assert_eq!(s.requested, 1);
}

#[test]
fn refused_request_keeps_loop_running_without_handle() {
    let mut s = FakeScheduler {
        refuse: true,
        ..Default::default()
    };
    let mut lp = AnimationLoop::new();
    lp.start(&mut s, false);
    assert_eq!(lp.state(), LoopState::Running { pending: None });
    // pausing with nothing queued cancels nothing
    lp.set_hidden(&mut s, true);
    assert!(s.cancelled.is_empty());
}

#[test]
fn frame_gate_allows_one_pending_frame() {
    let mut gate = FrameGate::default();
    assert!(!gate.is_pending());
    assert!(gate.try_acquire());
    assert!(gate.is_pending());
    assert!(!gate.try_acquire());
    gate.release();
    assert!(gate.try_acquire());
}
