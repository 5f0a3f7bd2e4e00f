// Host-side tests for setup sequencing and the cursor follower.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod profile {
        include!("../src/core/profile.rs");
    }
    pub mod startup {
        include!("../src/core/startup.rs");
    }
    pub mod cursor {
        include!("../src/core/cursor.rs");
    }
}

use crate::core::cursor::CursorFollower;
use crate::core::profile::DeviceProfile;
use crate::core::startup::*;
use crate::core::startup::SetupStep::*;

#[test]
fn desktop_mouse_runs_every_desktop_step_in_order() {
    let profile = DeviceProfile::detect(1440.0, false, Some("4g"));
    let plan = setup_plan(&profile);
    assert_eq!(
        plan.as_slice(),
        &[
            DeviceFlags,
            Cursor,
            DynamicIsland,
            Navigation,
            ScrollReveal,
            Particles,
            Hero
        ]
    );
}

#[test]
fn mobile_skips_cursor_and_particles_and_adds_touch_tweaks() {
    let profile = DeviceProfile::detect(390.0, true, Some("4g"));
    let plan = setup_plan(&profile);
    assert_eq!(
        plan.as_slice(),
        &[
            DeviceFlags,
            DynamicIsland,
            Navigation,
            ScrollReveal,
            TouchTweaks,
            Hero
        ]
    );
}

#[test]
fn slow_desktop_skips_particles() {
    let profile = DeviceProfile::detect(1440.0, false, Some("slow-2g"));
    let plan = setup_plan(&profile);
    assert!(!plan.contains(&Particles));
    assert!(plan.contains(&Cursor));
}

#[test]
fn plan_always_starts_with_flags_and_ends_with_hero() {
    for width in [320.0, 768.0, 769.0, 2560.0] {
        for touch in [false, true] {
            let plan = setup_plan(&DeviceProfile::detect(width, touch, None));
            assert_eq!(plan.first(), Some(&DeviceFlags));
            assert_eq!(plan.last(), Some(&Hero));
            let nav = plan.iter().position(|s| *s == Navigation).unwrap();
            let reveal = plan.iter().position(|s| *s == ScrollReveal).unwrap();
            assert!(nav < reveal);
        }
    }
}

#[test]
fn step_names_are_distinct() {
    let all = [
        DeviceFlags,
        Cursor,
        DynamicIsland,
        Navigation,
        ScrollReveal,
        Particles,
        TouchTweaks,
        Hero,
    ];
    let mut names: Vec<&str> = all.iter().map(|s| s.name()).collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), all.len());
}

#[test]
fn cursor_becomes_visible_on_first_move_only() {
    let mut c = CursorFollower::default();
    assert!(!c.visible);
    assert!(c.pointer_moved(10.0, 20.0));
    assert!(c.visible);
    assert!(!c.pointer_moved(30.0, 40.0));
}

#[test]
fn cursor_follower_eases_toward_pointer() {
    let mut c = CursorFollower::default();
    c.pointer_moved(100.0, 200.0);
    let first = c.step();
    assert!((first.x - 15.0).abs() < 1e-4);
    assert!((first.y - 30.0).abs() < 1e-4);

    let mut prev_gap = (c.target - c.current).length();
    for _ in 0..100 {
        c.step();
        let gap = (c.target - c.current).length();
        assert!(gap <= prev_gap);
        prev_gap = gap;
    }
    assert!(prev_gap < 0.01);
}
