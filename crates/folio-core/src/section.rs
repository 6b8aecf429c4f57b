use crate::error::FolioError;
use std::fmt;
use std::str::FromStr;

/// The fixed, ordered set of page sections.
///
/// Declaration order is the priority order used when regions overlap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SectionId {
    #[default]
    Hero,
    About,
    Projects,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// Identifier used for DOM ids and `data-section` attributes.
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    /// Navigation label.
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::About => "About",
            SectionId::Projects => "Work",
            SectionId::Contact => "Contact",
        }
    }
}

impl FromStr for SectionId {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| FolioError::unknown_section(s))
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vertical pixel range `[top, top + height)` occupied by a section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionRegion {
    pub top: f64,
    pub height: f64,
}

impl SectionRegion {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[inline]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.bottom()
    }
}
