//! Browser capability detection.

use crate::constants::{REDUCED_MOTION_QUERY, WEBGL_CONTEXT_IDS};
use crate::dom::EventListener;
use folio_core::{Cancel, CapabilityProbe};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct BrowserProbe {
    window: web::Window,
}

impl BrowserProbe {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }

    fn reduced_motion_query(&self) -> Option<web::MediaQueryList> {
        self.window.match_media(REDUCED_MOTION_QUERY).ok().flatten()
    }
}

impl CapabilityProbe for BrowserProbe {
    fn webgl_supported(&self) -> bool {
        let Some(document) = self.window.document() else {
            return false;
        };
        let Some(canvas) = document
            .create_element("canvas")
            .ok()
            .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
        else {
            return false;
        };
        let supported = WEBGL_CONTEXT_IDS
            .iter()
            .any(|id| matches!(canvas.get_context(id), Ok(Some(_))));
        log::info!("[probe] webgl={}", supported);
        supported
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion_query()
            .map(|mq| mq.matches())
            .unwrap_or(false)
    }
}

/// Legacy `MediaQueryList.addListener` registration, for engines whose
/// media query lists are not event targets.
pub struct MediaQueryListener {
    query: web::MediaQueryList,
    callback: Option<Closure<dyn FnMut(web::Event)>>,
}

impl Cancel for MediaQueryListener {
    #[allow(deprecated)]
    fn cancel(&mut self) {
        if let Some(callback) = self.callback.take() {
            _ = self
                .query
                .remove_listener_with_opt_callback(Some(callback.as_ref().unchecked_ref()));
        }
    }
}

impl Drop for MediaQueryListener {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Call `on_change` whenever the reduced-motion preference flips.
///
/// Returns `None` when the platform has no media query support. Prefers
/// `addEventListener("change")` and falls back to `addListener`.
pub fn watch_reduced_motion(
    window: &web::Window,
    on_change: impl FnMut(bool) + 'static,
) -> anyhow::Result<Option<Box<dyn Cancel>>> {
    let Some(mq) = window.match_media(REDUCED_MOTION_QUERY).ok().flatten() else {
        log::info!("[probe] matchMedia unavailable; reduced motion assumed off");
        return Ok(None);
    };
    let on_change = Rc::new(RefCell::new(on_change));

    let query = mq.clone();
    let handler = on_change.clone();
    match EventListener::new(mq.as_ref(), "change", move |_| {
        (*handler.borrow_mut())(query.matches())
    }) {
        Ok(listener) => return Ok(Some(Box::new(listener))),
        Err(e) => log::warn!("[probe] change listener rejected, trying addListener: {:?}", e),
    }

    let query = mq.clone();
    let callback = Closure::wrap(Box::new(move |_: web::Event| {
        (*on_change.borrow_mut())(query.matches())
    }) as Box<dyn FnMut(web::Event)>);
    #[allow(deprecated)]
    let added = mq.add_listener_with_opt_callback(Some(callback.as_ref().unchecked_ref()));
    added.map_err(|e| anyhow::anyhow!("addListener error: {:?}", e))?;
    Ok(Some(Box::new(MediaQueryListener {
        query: mq,
        callback: Some(callback),
    })))
}
