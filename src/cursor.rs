use crate::constants::{CURSOR_FOLLOWER_ID, CURSOR_ID, VISIBLE_CLASS};
use crate::core::{AnimationLoop, CursorFollower};
use crate::dom;
use crate::frame::{self, RafScheduler};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct CursorRuntime {
    cursor: web::HtmlElement,
    follower: web::HtmlElement,
    state: RefCell<CursorFollower>,
    animation: RefCell<AnimationLoop>,
    scheduler: RefCell<RafScheduler>,
}

#[inline]
fn place(el: &web::HtmlElement, x: f32, y: f32) {
    let style = el.style();
    _ = style.set_property("left", &format!("{}px", x));
    _ = style.set_property("top", &format!("{}px", y));
}

/// Both `#cursor` and `#cursor-follower` must exist, otherwise no cursor.
pub fn start(window: &web::Window, document: &web::Document) -> Option<Rc<CursorRuntime>> {
    let (Some(cursor), Some(follower)) = (
        dom::html_by_id(document, CURSOR_ID),
        dom::html_by_id(document, CURSOR_FOLLOWER_ID),
    ) else {
        log::debug!("[cursor] elements missing, skipping");
        return None;
    };
    let rt = Rc::new(CursorRuntime {
        cursor,
        follower,
        state: RefCell::new(CursorFollower::default()),
        animation: RefCell::new(AnimationLoop::new()),
        scheduler: RefCell::new(RafScheduler::new(window.clone())),
    });

    let r = rt.clone();
    rt.scheduler.borrow().set_callback(move |_ts| r.frame());
    let r = rt.clone();
    frame::watch_visibility(document, move |hidden| {
        r.animation
            .borrow_mut()
            .set_hidden(&mut *r.scheduler.borrow_mut(), hidden);
    });
    rt.animation
        .borrow_mut()
        .start(&mut *rt.scheduler.borrow_mut(), document.hidden());
    Some(rt)
}

impl CursorRuntime {
    pub fn pointer_moved(&self, x: f32, y: f32) {
        if self.state.borrow_mut().pointer_moved(x, y) {
            _ = self.cursor.class_list().add_1(VISIBLE_CLASS);
        }
    }

    fn frame(&self) {
        let proceed = self
            .animation
            .borrow_mut()
            .on_frame(&mut *self.scheduler.borrow_mut());
        if !proceed {
            return;
        }
        let (target, current) = {
            let mut s = self.state.borrow_mut();
            let current = s.step();
            (s.target, current)
        };
        place(&self.cursor, target.x, target.y);
        place(&self.follower, current.x, current.y);
    }

    pub fn destroy(&self) {
        self.animation
            .borrow_mut()
            .destroy(&mut *self.scheduler.borrow_mut());
    }
}
