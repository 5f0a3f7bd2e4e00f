#![cfg(target_arch = "wasm32")]
use crate::core::{setup_plan, DeviceProfile, SetupStep, Tuning};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod cursor;
mod device;
mod dom;
mod events;
mod frame;
mod loading;
mod nav;
mod overlay;
mod particles;
mod reveal;

/// Page-lifetime application context.
///
/// Built once after the device profile is known and torn down once on
/// `beforeunload`. Every subsystem gets what it needs from here rather than
/// from globals.
struct App {
    window: web::Window,
    document: web::Document,
    profile: DeviceProfile,
    tuning: Tuning,
    loaded: Rc<Cell<bool>>,
    nav: RefCell<Option<Rc<nav::NavContext>>>,
    observers: RefCell<Vec<web::IntersectionObserver>>,
    cursor: RefCell<Option<Rc<cursor::CursorRuntime>>>,
    particles: RefCell<Option<Rc<particles::ParticleRuntime>>>,
}

impl App {
    fn new(window: web::Window, document: web::Document, profile: DeviceProfile) -> Self {
        Self {
            window,
            document,
            tuning: profile.tuning(),
            profile,
            loaded: Rc::new(Cell::new(false)),
            nav: RefCell::new(None),
            observers: RefCell::new(Vec::new()),
            cursor: RefCell::new(None),
            particles: RefCell::new(None),
        }
    }

    fn mark_loaded(&self) {
        self.loaded.set(true);
        if let Some(nav) = self.nav.borrow().as_ref() {
            nav.controller.borrow_mut().mark_loaded();
        }
    }

    fn run_step(&self, step: SetupStep) -> anyhow::Result<()> {
        match step {
            SetupStep::DeviceFlags => {
                device::apply_device_flags(&self.window, &self.document, &self.profile);
            }
            SetupStep::Cursor => {
                if let Some(rt) = cursor::start(&self.window, &self.document) {
                    events::wire_cursor_move(&self.document, &rt);
                    *self.cursor.borrow_mut() = Some(rt);
                }
            }
            SetupStep::DynamicIsland => {
                overlay::schedule_island(&self.window, &self.document, &self.tuning);
            }
            SetupStep::Navigation => self.start_navigation(),
            SetupStep::ScrollReveal => {
                let observer = reveal::observe(&self.document, &self.tuning, self.loaded.clone())?;
                self.observers.borrow_mut().push(observer);
            }
            SetupStep::Particles => {
                *self.particles.borrow_mut() = particles::start(&self.window, &self.document);
            }
            SetupStep::TouchTweaks => device::apply_touch_tweaks(&self.document),
            SetupStep::Hero => overlay::schedule_hero(&self.window, &self.document, &self.tuning),
        }
        Ok(())
    }

    fn start_navigation(&self) {
        let nav = nav::NavContext::new(self.window.clone(), &self.document, &self.profile);
        nav.recompute_offsets();
        if self.loaded.get() {
            nav.controller.borrow_mut().mark_loaded();
        }
        events::wire_nav_links(&nav, self.profile.is_touch);
        events::wire_scroll(&self.window, &nav);
        events::wire_resize_offsets(&self.window, &nav);
        nav.update_active_section();
        nav.sync_highlight();
        log::info!(
            "[nav] tracking {} sections, {} links",
            nav.controller.borrow().offsets().len(),
            nav.links().len()
        );
        *self.nav.borrow_mut() = Some(nav);
    }

    fn teardown(&self) {
        for observer in self.observers.borrow_mut().drain(..) {
            observer.disconnect();
        }
        if let Some(p) = self.particles.borrow_mut().take() {
            p.destroy();
        }
        if let Some(c) = self.cursor.borrow_mut().take() {
            c.destroy();
        }
        if let Some(nav) = self.nav.borrow().as_ref() {
            nav.controller.borrow_mut().cancel_scroll();
        }
        log::debug!("[setup] torn down");
    }
}

/// Runtime errors anywhere on the page are logged and swallowed so one
/// broken script does not take the rest down.
fn install_error_handler(window: &web::Window) {
    dom::listen(window, "error", |ev| {
        let msg = ev
            .dyn_ref::<web::ErrorEvent>()
            .map(|e| e.message())
            .unwrap_or_default();
        log::warn!("handled gracefully: {}", msg);
        ev.prevent_default();
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    install_error_handler(&window);

    let profile = device::detect_profile(&window);
    log::info!(
        "[setup] mobile={} touch={} slow={}",
        profile.is_mobile,
        profile.is_touch,
        profile.slow_connection
    );
    let app = Rc::new(App::new(window.clone(), document.clone(), profile));

    let app_unload = app.clone();
    dom::listen(&window, "beforeunload", move |_| app_unload.teardown());

    loading::wait_for_load_complete(&window, &document, app.tuning.settle_delay_ms).await?;
    app.mark_loaded();

    for step in setup_plan(&profile) {
        if let Err(e) = app.run_step(step) {
            log::warn!("[setup] {} skipped: {:?}", step.name(), e);
        }
    }
    Ok(())
}
