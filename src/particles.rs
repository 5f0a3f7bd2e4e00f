use crate::constants::PARTICLES_CANVAS_ID;
use crate::core::constants::PARTICLE_COUNT;
use crate::core::{AnimationLoop, ParticleField};
use crate::dom;
use crate::frame::{self, RafScheduler};
use glam::Vec2;
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Decorative particle canvas: simulation, draw, and its frame loop.
pub struct ParticleRuntime {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    field: RefCell<ParticleField>,
    animation: RefCell<AnimationLoop>,
    scheduler: RefCell<RafScheduler>,
}

fn canvas_and_context(
    document: &web::Document,
) -> Option<(web::HtmlCanvasElement, web::CanvasRenderingContext2d)> {
    let canvas = document
        .get_element_by_id(PARTICLES_CANVAS_ID)?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()?;
    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .ok()?;
    Some((canvas, ctx))
}

fn fit_to_viewport(window: &web::Window, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let (w, h) = dom::viewport_size(window);
    canvas.set_width(w.max(0.0) as u32);
    canvas.set_height(h.max(0.0) as u32);
    Vec2::new(canvas.width() as f32, canvas.height() as f32)
}

/// Build the field and start its loop. `None` when the canvas or its 2D
/// context is unavailable; the page simply has no particles then.
pub fn start(window: &web::Window, document: &web::Document) -> Option<Rc<ParticleRuntime>> {
    let Some((canvas, ctx)) = canvas_and_context(document) else {
        log::debug!("[particles] no canvas or 2d context, skipping");
        return None;
    };
    let bounds = fit_to_viewport(window, &canvas);
    let field = ParticleField::new(PARTICLE_COUNT, bounds, &mut rand::thread_rng());

    let rt = Rc::new(ParticleRuntime {
        canvas,
        ctx,
        field: RefCell::new(field),
        animation: RefCell::new(AnimationLoop::new()),
        scheduler: RefCell::new(RafScheduler::new(window.clone())),
    });

    let r = rt.clone();
    rt.scheduler.borrow().set_callback(move |_ts| r.frame());

    let r = rt.clone();
    let win = window.clone();
    dom::listen(window, "resize", move |_| {
        let bounds = fit_to_viewport(&win, &r.canvas);
        r.field.borrow_mut().resize(bounds);
    });

    let r = rt.clone();
    frame::watch_visibility(document, move |hidden| r.set_hidden(hidden));

    rt.animation
        .borrow_mut()
        .start(&mut *rt.scheduler.borrow_mut(), document.hidden());
    log::info!(
        "[particles] {} particles on {}x{}",
        PARTICLE_COUNT,
        bounds.x,
        bounds.y
    );
    Some(rt)
}

impl ParticleRuntime {
    fn frame(&self) {
        let proceed = self
            .animation
            .borrow_mut()
            .on_frame(&mut *self.scheduler.borrow_mut());
        if !proceed {
            return;
        }
        let mut field = self.field.borrow_mut();
        field.step();
        self.draw(&field);
    }

    fn draw(&self, field: &ParticleField) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, w, h);
        for p in field.particles() {
            self.ctx.begin_path();
            _ = self
                .ctx
                .arc(p.pos.x as f64, p.pos.y as f64, p.radius as f64, 0.0, TAU);
            self.ctx.set_fill_style_str(&p.fill_style());
            self.ctx.fill();
        }
    }

    pub fn set_hidden(&self, hidden: bool) {
        self.animation
            .borrow_mut()
            .set_hidden(&mut *self.scheduler.borrow_mut(), hidden);
    }

    pub fn destroy(&self) {
        self.animation
            .borrow_mut()
            .destroy(&mut *self.scheduler.borrow_mut());
    }
}
