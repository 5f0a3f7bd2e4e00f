use crate::constants::LOADING_CLASS;
use crate::dom;
use instant::Instant;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Resolves once the document has finished loading.
fn document_complete(window: &web::Window, document: &web::Document) -> js_sys::Promise {
    if document.ready_state() == "complete" {
        return js_sys::Promise::resolve(&JsValue::UNDEFINED);
    }
    let window = window.clone();
    js_sys::Promise::new(&mut |resolve, _reject| {
        let opts = web::AddEventListenerOptions::new();
        opts.set_once(true);
        _ = window.add_event_listener_with_callback_and_add_event_listener_options(
            "load", &resolve, &opts,
        );
    })
}

/// `document.fonts.ready`, or `None` on browsers without the Font Loading API.
fn fonts_ready(document: &web::Document) -> Option<js_sys::Promise> {
    if !dom::has_prop(document, "fonts") {
        return None;
    }
    document.fonts().ready().ok()
}

pub async fn sleep(window: &web::Window, ms: i32) {
    let window = window.clone();
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
    });
    _ = JsFuture::from(promise).await;
}

/// Wait for the load event and web fonts, then give layout `settle_ms` to
/// finish shifting before dropping the `loading` body class. Section offsets
/// are only trustworthy after this returns.
pub async fn wait_for_load_complete(
    window: &web::Window,
    document: &web::Document,
    settle_ms: i32,
) -> anyhow::Result<()> {
    let started = Instant::now();
    let gates = js_sys::Array::new();
    gates.push(&document_complete(window, document));
    if let Some(fonts) = fonts_ready(document) {
        gates.push(&fonts);
    }
    JsFuture::from(js_sys::Promise::all(&gates))
        .await
        .map_err(|e| anyhow::anyhow!("load gate rejected: {:?}", e))?;

    sleep(window, settle_ms).await;
    dom::body_class(document, LOADING_CLASS, false);
    log::info!(
        "[load] ready after {:.0} ms (settle {} ms)",
        started.elapsed().as_secs_f64() * 1000.0,
        settle_ms
    );
    Ok(())
}
