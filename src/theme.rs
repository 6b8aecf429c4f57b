//! Colour scheme: resolved once at mount, reflected as a class on `<html>`,
//! persisted in localStorage.

use crate::constants::{COLOR_SCHEME_QUERY, DARK_CLASS, THEME_STORAGE_KEY};
use folio_core::{resolve_theme, Theme};
use wasm_bindgen::JsValue;
use web_sys as web;

fn storage(window: &web::Window) -> Result<web::Storage, JsValue> {
    window
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

fn prefers_dark(window: &web::Window) -> Option<bool> {
    let mq = window.match_media(COLOR_SCHEME_QUERY).ok().flatten()?;
    Some(mq.matches())
}

pub fn initial(window: &web::Window) -> Theme {
    let stored = storage(window).and_then(|s| s.get_item(THEME_STORAGE_KEY));
    let theme = resolve_theme(stored, || prefers_dark(window));
    log::info!("[theme] initial={}", theme);
    theme
}

/// Toggle the root `dark` class and remember the choice. Storage failures
/// (private mode, quota) are ignored.
pub fn apply(window: &web::Window, document: &web::Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        _ = root.class_list().toggle_with_force(DARK_CLASS, theme.is_dark());
    }
    if let Err(e) = storage(window).and_then(|s| s.set_item(THEME_STORAGE_KEY, theme.as_str())) {
        log::debug!("[theme] not persisted: {:?}", e);
    }
}
