use super::profile::DeviceProfile;
use smallvec::SmallVec;

/// One-time setup steps run after the load gate opens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetupStep {
    DeviceFlags,
    Cursor,
    DynamicIsland,
    Navigation,
    ScrollReveal,
    Particles,
    TouchTweaks,
    Hero,
}

impl SetupStep {
    pub fn name(&self) -> &'static str {
        match self {
            SetupStep::DeviceFlags => "device-flags",
            SetupStep::Cursor => "cursor",
            SetupStep::DynamicIsland => "dynamic-island",
            SetupStep::Navigation => "navigation",
            SetupStep::ScrollReveal => "scroll-reveal",
            SetupStep::Particles => "particles",
            SetupStep::TouchTweaks => "touch-tweaks",
            SetupStep::Hero => "hero",
        }
    }
}

/// Ordered setup plan for `profile`; gated steps are left out entirely.
pub fn setup_plan(profile: &DeviceProfile) -> SmallVec<[SetupStep; 8]> {
    let mut plan = SmallVec::new();
    plan.push(SetupStep::DeviceFlags);
    if profile.cursor_enabled() {
        plan.push(SetupStep::Cursor);
    }
    plan.push(SetupStep::DynamicIsland);
    plan.push(SetupStep::Navigation);
    plan.push(SetupStep::ScrollReveal);
    if profile.particles_enabled() {
        plan.push(SetupStep::Particles);
    }
    if profile.is_mobile {
        plan.push(SetupStep::TouchTweaks);
    }
    plan.push(SetupStep::Hero);
    plan
}
