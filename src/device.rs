use crate::constants::*;
use crate::core::constants::LOW_BATTERY_LEVEL;
use crate::core::DeviceProfile;
use crate::dom::{self, get_prop, has_prop};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// `navigator.connection.effectiveType`, where the browser exposes it.
fn effective_connection_type(navigator: &web::Navigator) -> Option<String> {
    let conn = get_prop(navigator, "connection")?;
    get_prop(&conn, "effectiveType")?.as_string()
}

pub fn detect_profile(window: &web::Window) -> DeviceProfile {
    let (width, _) = dom::viewport_size(window);
    let navigator = window.navigator();
    let is_touch = has_prop(window, "ontouchstart") || navigator.max_touch_points() > 0;
    let effective = effective_connection_type(&navigator);
    DeviceProfile::detect(width, is_touch, effective.as_deref())
}

/// Body classes and CSS variables that let the stylesheet scale effects
/// down per tier.
pub fn apply_device_flags(
    window: &web::Window,
    document: &web::Document,
    profile: &DeviceProfile,
) {
    if profile.is_mobile {
        dom::set_root_var(document, DEVICE_MULTIPLIER_VAR);
        dom::set_root_var(document, ANIMATION_DURATION_VAR);
        register_service_worker(&window.navigator());
    }
    if profile.slow_connection {
        dom::body_class(document, SLOW_CONNECTION_CLASS, true);
        for el in dom::query_all_html(document, PARTICLES_CANVAS_SELECTOR) {
            _ = el.style().set_property("display", "none");
        }
        log::info!("[device] slow connection, heavy effects disabled");
    }
    check_battery(window.navigator(), document.clone());
}

fn check_battery(navigator: web::Navigator, document: web::Document) {
    let Some(get_battery) =
        get_prop(&navigator, "getBattery").and_then(|f| f.dyn_into::<js_sys::Function>().ok())
    else {
        log::debug!("[device] battery api unavailable");
        return;
    };
    spawn_local(async move {
        let Some(promise) = get_battery
            .call0(&navigator)
            .ok()
            .and_then(|p| p.dyn_into::<js_sys::Promise>().ok())
        else {
            return;
        };
        let Ok(battery) = JsFuture::from(promise).await else {
            return;
        };
        let level = get_prop(&battery, "level").and_then(|v| v.as_f64());
        if level.is_some_and(|l| l < LOW_BATTERY_LEVEL) {
            dom::body_class(&document, POWER_SAVE_CLASS, true);
            log::info!("[device] low battery ({:?}), power-save on", level);
        }
    });
}

fn register_service_worker(navigator: &web::Navigator) {
    if !has_prop(navigator, "serviceWorker") {
        return;
    }
    let promise = navigator.service_worker().register(SERVICE_WORKER_URL);
    spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            log::debug!("[device] service worker not registered: {:?}", e);
        }
    });
}

/// Short haptic pulse. Browsers without the vibration API are skipped.
pub fn vibrate(window: &web::Window, ms: u32) {
    let navigator = window.navigator();
    if has_prop(&navigator, "vibrate") {
        _ = navigator.vibrate_with_duration(ms);
    }
}

/// Mobile-only touch handling and safe-area variables.
pub fn apply_touch_tweaks(document: &web::Document) {
    dom::listen_with_passive(document, "touchstart", true, |_| {});
    dom::listen_with_passive(document, "touchmove", true, |_| {});

    // A tap fires the click right away instead of waiting for the
    // double-tap-zoom timeout.
    for el in dom::query_all_html(document, TAP_TO_CLICK_SELECTOR) {
        let target = el.clone();
        dom::listen(&el, "touchend", move |ev| {
            ev.prevent_default();
            target.click();
        });
    }

    if web::css::supports_with_condition(SAFE_AREA_QUERY).unwrap_or(false) {
        dom::set_root_var(document, SAFE_AREA_TOP_VAR);
        dom::set_root_var(document, SAFE_AREA_BOTTOM_VAR);
    }
}
