use crate::dom;
use folio_core::{PageHost, SectionId, SectionRegion};
use web_sys as web;

/// Sections looked up live by DOM id (`#hero`, `#about`, ...).
pub struct DomSections {
    document: web::Document,
}

impl DomSections {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }
}

impl PageHost for DomSections {
    type Element = web::HtmlElement;

    fn element(&self, id: SectionId) -> Option<web::HtmlElement> {
        dom::html_element_by_id(&self.document, id.as_str())
    }

    fn region(&self, element: &web::HtmlElement) -> SectionRegion {
        SectionRegion::new(element.offset_top() as f64, element.offset_height() as f64)
    }
}
