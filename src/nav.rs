use crate::constants::*;
use crate::core::constants::HAPTIC_PULSE_MS;
use crate::core::{DeviceProfile, NavController, NavInput};
use crate::device;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM side of the section tracker: owns the nav links, the section
/// elements and the two frame callbacks (scroll animation, active update).
pub struct NavContext {
    window: web::Window,
    links: Vec<web::Element>,
    sections: Vec<web::HtmlElement>,
    pub controller: RefCell<NavController>,
    scroll_tick: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    active_tick: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl NavContext {
    pub fn new(window: web::Window, document: &web::Document, profile: &DeviceProfile) -> Rc<Self> {
        let ctx = Rc::new(Self {
            window,
            links: dom::query_all(document, NAV_LINK_SELECTOR),
            sections: dom::query_all_html(document, SECTION_SELECTOR),
            controller: RefCell::new(NavController::new(profile)),
            scroll_tick: RefCell::new(None),
            active_tick: RefCell::new(None),
        });

        let c = ctx.clone();
        *ctx.scroll_tick.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
            c.on_scroll_frame(ts);
        }) as Box<dyn FnMut(f64)>));
        let c = ctx.clone();
        *ctx.active_tick.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
            c.on_active_frame();
        }) as Box<dyn FnMut(f64)>));
        ctx
    }

    pub fn recompute_offsets(&self) {
        let ids: Vec<(String, f64)> = self
            .sections
            .iter()
            .map(|s| (s.id(), s.offset_top() as f64))
            .collect();
        self.controller
            .borrow_mut()
            .precompute_offsets(ids.iter().map(|(id, top)| (id.as_str(), *top)));
    }

    /// Mark exactly the link for `section_id` as active.
    fn highlight(&self, section_id: &str) {
        for link in &self.links {
            let cl = link.class_list();
            _ = cl.remove_1(ACTIVE_CLASS);
            if link.get_attribute(NAV_SECTION_ATTR).as_deref() == Some(section_id) {
                _ = cl.add_1(ACTIVE_CLASS);
            }
        }
    }

    pub fn navigate(&self, section_id: &str, input: NavInput) {
        let current = dom::scroll_y(&self.window);
        let now = dom::now_ms(&self.window);
        let outcome = self
            .controller
            .borrow_mut()
            .navigate_to(section_id, current, now, input);
        let Some(outcome) = outcome else {
            log::debug!("[nav] unknown section '{}'", section_id);
            return;
        };
        self.highlight(section_id);
        if outcome.haptic {
            device::vibrate(&self.window, HAPTIC_PULSE_MS);
        }
        log::debug!(
            "[nav] -> {} ({:.0}px in {:.0}ms)",
            section_id,
            outcome.target,
            outcome.duration_ms
        );
        self.request_scroll_frame();
    }

    fn request_scroll_frame(&self) {
        if !self.controller.borrow_mut().scroll_gate.try_acquire() {
            return;
        }
        if let Some(cb) = self.scroll_tick.borrow().as_ref() {
            _ = self
                .window
                .request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }

    fn on_scroll_frame(&self, ts: f64) {
        let step = {
            let mut nav = self.controller.borrow_mut();
            nav.scroll_gate.release();
            nav.tick_scroll(ts)
        };
        if let Some(step) = step {
            self.window.scroll_to_with_x_and_y(0.0, step.position);
            if !step.finished {
                self.request_scroll_frame();
            }
        }
    }

    /// Scroll events coalesce into at most one active-section update per
    /// frame.
    pub fn on_scroll(&self) {
        if !self.controller.borrow_mut().active_gate.try_acquire() {
            return;
        }
        if let Some(cb) = self.active_tick.borrow().as_ref() {
            _ = self
                .window
                .request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }

    fn on_active_frame(&self) {
        self.controller.borrow_mut().active_gate.release();
        self.update_active_section();
    }

    pub fn update_active_section(&self) {
        let scroll = dom::scroll_y(&self.window);
        let changed = self
            .controller
            .borrow_mut()
            .update_active_section(scroll)
            .map(str::to_string);
        if let Some(id) = changed {
            self.highlight(&id);
        }
    }

    /// Apply the controller's current highlight regardless of change
    /// tracking; used once the tracker first starts.
    pub fn sync_highlight(&self) {
        let active = self.controller.borrow().active().to_string();
        self.highlight(&active);
    }

    pub fn links(&self) -> &[web::Element] {
        &self.links
    }
}
