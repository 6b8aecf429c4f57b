//! Maps the scroll offset to the section the navigation should highlight.

use crate::config::PageConfig;
use crate::layout::PageHost;
use crate::section::SectionId;

/// First section, in fixed order, whose region contains `scroll_offset + lookahead`.
///
/// Unmounted sections are skipped. `None` means no region matched.
pub fn resolve_active<H: PageHost + ?Sized>(
    host: &H,
    scroll_offset: f64,
    lookahead: f64,
) -> Option<SectionId> {
    let position = scroll_offset + lookahead;
    SectionId::ALL.into_iter().find(|&id| {
        host.section_region(id)
            .map(|r| r.contains(position))
            .unwrap_or(false)
    })
}

/// What changed as a result of one scroll signal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollUpdate {
    pub active: Option<SectionId>,
    pub header_scrolled: Option<bool>,
}

impl ScrollUpdate {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.active.is_none() && self.header_scrolled.is_none()
    }
}

pub struct ScrollTracker {
    active: SectionId,
    header_scrolled: bool,
    lookahead: f64,
    scrolled_threshold: f64,
    attached: bool,
}

impl ScrollTracker {
    pub fn new(config: &PageConfig) -> Self {
        Self {
            active: SectionId::default(),
            header_scrolled: false,
            lookahead: config.lookahead_px,
            scrolled_threshold: config.header_scrolled_threshold_px,
            attached: true,
        }
    }

    #[inline]
    pub fn active(&self) -> SectionId {
        self.active
    }

    #[inline]
    pub fn header_scrolled(&self) -> bool {
        self.header_scrolled
    }

    #[inline]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Handle one scroll signal. Writes only when a value actually changes.
    pub fn on_scroll<H: PageHost + ?Sized>(&mut self, host: &H, scroll_offset: f64) -> ScrollUpdate {
        let mut update = ScrollUpdate::default();
        if !self.attached {
            return update;
        }

        if let Some(id) = resolve_active(host, scroll_offset, self.lookahead) {
            if id != self.active {
                log::debug!("[tracker] active {} -> {} at y={:.0}", self.active, id, scroll_offset);
                self.active = id;
                update.active = Some(id);
            }
        }

        let scrolled = scroll_offset > self.scrolled_threshold;
        if scrolled != self.header_scrolled {
            self.header_scrolled = scrolled;
            update.header_scrolled = Some(scrolled);
        }

        update
    }

    /// Stop reacting to scroll signals. Irreversible.
    pub fn detach(&mut self) {
        if self.attached {
            log::info!("[tracker] detached");
        }
        self.attached = false;
    }
}
