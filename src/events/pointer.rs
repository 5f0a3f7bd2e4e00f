use crate::constants::NAV_SECTION_ATTR;
use crate::core::NavInput;
use crate::cursor::CursorRuntime;
use crate::dom;
use crate::nav::NavContext;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Nav links navigate on `touchstart` for touch devices and on `click`
/// otherwise. The touch listener must be non-passive so it can cancel the
/// synthetic click and the native anchor jump.
pub fn wire_nav_links(nav: &Rc<NavContext>, is_touch: bool) {
    let (event, input) = if is_touch {
        ("touchstart", NavInput::Touch)
    } else {
        ("click", NavInput::Pointer)
    };
    for link in nav.links() {
        let Some(section) = link.get_attribute(NAV_SECTION_ATTR) else {
            continue;
        };
        let nav = nav.clone();
        dom::listen_with_passive(link, event, false, move |ev| {
            ev.prevent_default();
            ev.stop_propagation();
            nav.navigate(&section, input);
        });
    }
}

pub fn wire_cursor_move(document: &web::Document, cursor: &Rc<CursorRuntime>) {
    let cursor = cursor.clone();
    dom::listen(document, "mousemove", move |ev| {
        if let Some(mev) = ev.dyn_ref::<web::MouseEvent>() {
            cursor.pointer_moved(mev.client_x() as f32, mev.client_y() as f32);
        }
    });
}
