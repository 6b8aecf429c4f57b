//! Thin DOM binding for the navigation bar and mobile menu.

use crate::constants::*;
use crate::dom::EventListener;
use folio_core::{ScrollUpdate, SectionId};
use wasm_bindgen::JsCast;
use web_sys as web;

fn elements(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

/// Wire a click listener on every `[data-section]` element. Links that
/// refuse a listener are logged and left unwired.
pub fn wire_section_links(
    document: &web::Document,
    on_navigate: impl Fn(&str) + Clone + 'static,
) -> Vec<EventListener> {
    let mut listeners = Vec::new();
    for el in elements(document, SECTION_SELECTOR) {
        let Some(target) = el.get_attribute(SECTION_ATTR) else {
            continue;
        };
        let on_navigate = on_navigate.clone();
        let id = target.clone();
        match EventListener::new(el.as_ref(), "click", move |_| on_navigate(&id)) {
            Ok(listener) => listeners.push(listener),
            Err(e) => log::warn!("[nav] link to {} not wired: {:?}", target, e),
        }
    }
    log::info!("[nav] wired {} section links", listeners.len());
    listeners
}

pub fn set_active(document: &web::Document, active: SectionId) {
    for el in elements(document, NAV_ITEM_SELECTOR) {
        let is_active = el.get_attribute(SECTION_ATTR).as_deref() == Some(active.as_str());
        _ = el.class_list().toggle_with_force(ACTIVE_CLASS, is_active);
        if is_active {
            _ = el.set_attribute("aria-current", "true");
        } else {
            _ = el.remove_attribute("aria-current");
        }
    }
}

pub fn set_header_scrolled(document: &web::Document, scrolled: bool) {
    if let Some(el) = document.get_element_by_id(NAV_ID) {
        _ = el.class_list().toggle_with_force(SCROLLED_CLASS, scrolled);
    }
}

pub fn set_menu_open(document: &web::Document, open: bool) {
    if let Some(el) = document.get_element_by_id(MENU_ID) {
        _ = el.class_list().toggle_with_force(OPEN_CLASS, open);
    }
    if let Some(el) = document.get_element_by_id(MENU_TOGGLE_ID) {
        _ = el.set_attribute("aria-expanded", if open { "true" } else { "false" });
    }
}

/// Reflect a tracker update in the DOM.
pub fn apply(document: &web::Document, update: &ScrollUpdate) {
    if let Some(active) = update.active {
        set_active(document, active);
    }
    if let Some(scrolled) = update.header_scrolled {
        set_header_scrolled(document, scrolled);
    }
}
