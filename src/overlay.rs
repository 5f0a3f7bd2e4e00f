use crate::constants::{HERO_TITLE_SELECTOR, ISLAND_ID, SHOW_CLASS};
use crate::core::Tuning;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn show_island(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(ISLAND_ID) {
        _ = el.class_list().add_1(SHOW_CLASS);
    }
}

#[inline]
pub fn hide_island(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(ISLAND_ID) {
        _ = el.class_list().remove_1(SHOW_CLASS);
    }
}

/// Flash the dynamic-island banner once after load.
pub fn schedule_island(window: &web::Window, document: &web::Document, tuning: &Tuning) {
    let doc = document.clone();
    dom::set_timeout(window, tuning.island_show_ms, move || show_island(&doc));
    let doc = document.clone();
    dom::set_timeout(window, tuning.island_hide_ms, move || hide_island(&doc));
}

pub fn reveal_hero(document: &web::Document) {
    let Ok(Some(el)) = document.query_selector(HERO_TITLE_SELECTOR) else {
        return;
    };
    if let Some(hero) = el.dyn_ref::<web::HtmlElement>() {
        let style = hero.style();
        _ = style.set_property("opacity", "1");
        _ = style.set_property("transform", "translateY(0)");
    }
}

pub fn schedule_hero(window: &web::Window, document: &web::Document, tuning: &Tuning) {
    let doc = document.clone();
    dom::set_timeout(window, tuning.hero_delay_ms, move || reveal_hero(&doc));
}
