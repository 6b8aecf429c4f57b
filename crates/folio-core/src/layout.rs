use crate::section::{SectionId, SectionRegion};

/// Live view of the rendered page.
///
/// Regions are read on every call; implementations must not cache them,
/// since layout can reflow at any time.
pub trait PageHost {
    type Element;

    /// The mounted element for `id`, or `None` if it is not in the page yet.
    fn element(&self, id: SectionId) -> Option<Self::Element>;

    /// Current offset and height of a mounted element.
    fn region(&self, element: &Self::Element) -> SectionRegion;

    /// Convenience: the live region for `id`, if mounted.
    fn section_region(&self, id: SectionId) -> Option<SectionRegion> {
        self.element(id).map(|el| self.region(&el))
    }
}
