use folio_core::Cancel;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// An event listener that is removed when cancelled or dropped.
pub struct EventListener {
    target: web::EventTarget,
    event: &'static str,
    callback: Option<Closure<dyn FnMut(web::Event)>>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        mut handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let callback =
            Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", event, e))?;
        Ok(Self {
            target: target.clone(),
            event,
            callback: Some(callback),
        })
    }

    /// Click listener on the element with `element_id`, if present.
    pub fn click(
        document: &web::Document,
        element_id: &str,
        mut handler: impl FnMut() + 'static,
    ) -> anyhow::Result<Option<Self>> {
        match document.get_element_by_id(element_id) {
            Some(el) => Self::new(el.as_ref(), "click", move |_| handler()).map(Some),
            None => Ok(None),
        }
    }
}

impl Cancel for EventListener {
    fn cancel(&mut self) {
        if let Some(callback) = self.callback.take() {
            _ = self
                .target
                .remove_event_listener_with_callback(self.event, callback.as_ref().unchecked_ref());
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        self.cancel();
    }
}
