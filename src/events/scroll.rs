use crate::dom;
use crate::nav::NavContext;
use std::rc::Rc;
use web_sys as web;

pub fn wire_scroll(window: &web::Window, nav: &Rc<NavContext>) {
    let nav = nav.clone();
    dom::listen_with_passive(window, "scroll", true, move |_| nav.on_scroll());
}

/// Layout changes move section tops, so offsets are recomputed on resize.
pub fn wire_resize_offsets(window: &web::Window, nav: &Rc<NavContext>) {
    let nav = nav.clone();
    dom::listen(window, "resize", move |_| nav.recompute_offsets());
}
