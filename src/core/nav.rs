use super::constants::DEFAULT_SECTION;
use super::profile::{DeviceProfile, Tuning};
use super::scheduler::FrameGate;
use super::scroll::{ScrollAnimation, ScrollStep};
use super::sections::SectionOffsets;

/// How the user asked to navigate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavInput {
    Pointer,
    Touch,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavOutcome {
    pub target: f64,
    pub duration_ms: f64,
    /// Host should fire a short vibration if it can.
    pub haptic: bool,
}

/// Section tracking, active highlight state and the smooth-scroll animation.
///
/// Host-agnostic: the web layer feeds it element tops, scroll positions and
/// frame timestamps, and applies whatever it returns to the DOM.
#[derive(Debug)]
pub struct NavController {
    tuning: Tuning,
    offsets: SectionOffsets,
    active: String,
    animation: Option<ScrollAnimation>,
    loaded: bool,
    pub scroll_gate: FrameGate,
    pub active_gate: FrameGate,
}

impl NavController {
    pub fn new(profile: &DeviceProfile) -> Self {
        Self {
            tuning: profile.tuning(),
            offsets: SectionOffsets::new(),
            active: DEFAULT_SECTION.to_string(),
            animation: None,
            loaded: false,
            scroll_gate: FrameGate::default(),
            active_gate: FrameGate::default(),
        }
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn offsets(&self) -> &SectionOffsets {
        &self.offsets
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn mark_loaded(&mut self) {
        self.loaded = true;
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// `(id, element_top)` pairs in document order.
    pub fn precompute_offsets<'a, I>(&mut self, sections: I)
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let header = self.tuning.header_offset;
        self.offsets.precompute(sections, header);
    }

    /// Start scrolling toward `section_id`. Unknown ids are a silent miss:
    /// nothing is animated and the highlight stays as it was.
    pub fn navigate_to(
        &mut self,
        section_id: &str,
        current_scroll: f64,
        now_ms: f64,
        input: NavInput,
    ) -> Option<NavOutcome> {
        let target = self.offsets.offset_of(section_id)?;
        let anim = ScrollAnimation::new(current_scroll, target, now_ms, &self.tuning);
        self.animation = Some(anim);
        if self.active != section_id {
            self.active = section_id.to_string();
        }
        Some(NavOutcome {
            target,
            duration_ms: anim.duration_ms,
            haptic: input == NavInput::Touch,
        })
    }

    /// Advance the running scroll animation to `now_ms`.
    pub fn tick_scroll(&mut self, now_ms: f64) -> Option<ScrollStep> {
        let step = self.animation?.step(now_ms);
        if step.finished {
            self.animation = None;
        }
        Some(step)
    }

    pub fn cancel_scroll(&mut self) {
        self.animation = None;
    }

    /// Recompute the active section for `scroll_y`. Returns the new id only
    /// when it differs from the current highlight.
    pub fn update_active_section(&mut self, scroll_y: f64) -> Option<&str> {
        if !self.loaded {
            return None;
        }
        let probe = scroll_y + self.tuning.lookahead;
        let next = self.offsets.active_at(probe, DEFAULT_SECTION);
        if next == self.active {
            return None;
        }
        self.active = next.to_string();
        Some(self.active.as_str())
    }
}
