// Host-side tests for device classification and tier tuning.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod profile {
        include!("../src/core/profile.rs");
    }
}

use crate::core::profile::*;

#[test]
fn mobile_boundary_is_inclusive() {
    assert!(is_mobile_width(320.0));
    assert!(is_mobile_width(767.0));
    assert!(is_mobile_width(768.0));
    assert!(!is_mobile_width(768.5));
    assert!(!is_mobile_width(769.0));
    assert!(!is_mobile_width(1920.0));
}

#[test]
fn detect_reads_width_touch_and_network() {
    let p = DeviceProfile::detect(400.0, true, Some("4g"));
    assert_eq!(
        p,
        DeviceProfile {
            is_mobile: true,
            is_touch: true,
            slow_connection: false,
        }
    );

    let p = DeviceProfile::detect(1280.0, false, Some("2g"));
    assert!(!p.is_mobile);
    assert!(p.slow_connection);

    let p = DeviceProfile::detect(1280.0, false, Some("slow-2g"));
    assert!(p.slow_connection);

    // No Network Information API at all
    let p = DeviceProfile::detect(1280.0, false, None);
    assert!(!p.slow_connection);
}

#[test]
fn only_2g_variants_count_as_slow() {
    assert!(is_slow_connection("2g"));
    assert!(is_slow_connection("slow-2g"));
    assert!(!is_slow_connection("3g"));
    assert!(!is_slow_connection("4g"));
    assert!(!is_slow_connection(""));
}

#[test]
fn tuning_follows_mobile_flag() {
    let mobile = DeviceProfile::detect(768.0, true, None).tuning();
    assert_eq!(mobile.header_offset, 80.0);
    assert_eq!(mobile.lookahead, 100.0);
    assert_eq!(mobile.scroll_rate, 0.3);
    assert_eq!(mobile.scroll_cap_ms, 400.0);
    assert_eq!(mobile.settle_delay_ms, 100);

    let desktop = DeviceProfile::detect(1024.0, false, None).tuning();
    assert_eq!(desktop.header_offset, 100.0);
    assert_eq!(desktop.lookahead, 150.0);
    assert_eq!(desktop.scroll_rate, 0.5);
    assert_eq!(desktop.scroll_cap_ms, 800.0);
    assert_eq!(desktop.settle_delay_ms, 200);
    assert_eq!(desktop.reveal_root_margin, "0px 0px -50px 0px");
}

#[test]
fn feature_gates_per_profile() {
    let desktop_mouse = DeviceProfile::detect(1440.0, false, Some("4g"));
    assert!(desktop_mouse.cursor_enabled());
    assert!(desktop_mouse.particles_enabled());

    // Touch laptop: particles yes, cursor no
    let desktop_touch = DeviceProfile::detect(1440.0, true, None);
    assert!(!desktop_touch.cursor_enabled());
    assert!(desktop_touch.particles_enabled());

    let desktop_slow = DeviceProfile::detect(1440.0, false, Some("2g"));
    assert!(!desktop_slow.particles_enabled());

    let phone = DeviceProfile::detect(390.0, true, Some("4g"));
    assert!(!phone.cursor_enabled());
    assert!(!phone.particles_enabled());
}
