use crate::constants::HIDDEN_CLASS;
use folio_core::BackgroundVariant;
use web_sys as web;

/// Reveal the decorative background, preferring the grid over the globe.
pub fn mount(document: &web::Document) {
    let Some(variant) =
        BackgroundVariant::choose(|v| document.get_element_by_id(v.container_id()).is_some())
    else {
        log::info!("[background] no container in page");
        return;
    };
    if let Some(el) = document.get_element_by_id(variant.container_id()) {
        _ = el.class_list().remove_1(HIDDEN_CLASS);
        _ = el.set_attribute("data-active", "true");
        log::info!("[background] mounted {:?}", variant);
    }
}
