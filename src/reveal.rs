use crate::constants::{ANIMATE_CLASS, REVEAL_SELECTOR};
use crate::core::Tuning;
use crate::dom;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// One-shot reveal: each `.animate-on-scroll` element gets `animate` the
/// first time it intersects after load, then stops being observed.
pub fn observe(
    document: &web::Document,
    tuning: &Tuning,
    loaded: Rc<Cell<bool>>,
) -> anyhow::Result<web::IntersectionObserver> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() && loaded.get() {
                    let target = entry.target();
                    _ = target.class_list().add_1(ANIMATE_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(tuning.reveal_threshold));
    options.set_root_margin(tuning.reveal_root_margin);
    let observer = web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    )
    .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    callback.forget();

    let targets = dom::query_all(document, REVEAL_SELECTOR);
    for el in &targets {
        observer.observe(el);
    }
    log::debug!("[reveal] observing {} elements", targets.len());
    Ok(observer)
}
