//! Smooth scrolling to a section.

use crate::layout::PageHost;
use crate::section::SectionId;

/// Anything that can move the viewport to an element.
pub trait ScrollDriver<E> {
    fn scroll_to(&mut self, target: &E);
}

/// Routes navigation requests to the enhanced engine when one is registered,
/// otherwise to the native animated scroll.
pub struct ScrollController<E> {
    engine: Option<Box<dyn ScrollDriver<E>>>,
    native: Box<dyn ScrollDriver<E>>,
}

impl<E> ScrollController<E> {
    pub fn new(native: Box<dyn ScrollDriver<E>>) -> Self {
        Self {
            engine: None,
            native,
        }
    }

    /// Returns the engine it replaced, if any.
    pub fn register_engine(
        &mut self,
        engine: Box<dyn ScrollDriver<E>>,
    ) -> Option<Box<dyn ScrollDriver<E>>> {
        self.engine.replace(engine)
    }

    pub fn unregister_engine(&mut self) -> Option<Box<dyn ScrollDriver<E>>> {
        self.engine.take()
    }

    #[inline]
    pub fn has_engine(&self) -> bool {
        self.engine.is_some()
    }

    /// Scroll to the section named `id`. Unknown ids and unmounted sections are ignored.
    pub fn scroll_to_section<H>(&mut self, host: &H, id: &str)
    where
        H: PageHost<Element = E> + ?Sized,
    {
        match id.parse::<SectionId>() {
            Ok(section) => self.scroll_to(host, section),
            Err(e) => log::debug!("[scroll] ignored: {}", e),
        }
    }

    pub fn scroll_to<H>(&mut self, host: &H, section: SectionId)
    where
        H: PageHost<Element = E> + ?Sized,
    {
        let Some(element) = host.element(section) else {
            log::debug!("[scroll] {} not mounted", section);
            return;
        };
        match self.engine.as_mut() {
            Some(engine) => engine.scroll_to(&element),
            None => self.native.scroll_to(&element),
        }
    }
}
