/// Background renderings, in order of preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackgroundVariant {
    Grid,
    Globe,
}

impl BackgroundVariant {
    pub const PREFERENCE: [BackgroundVariant; 2] = [BackgroundVariant::Grid, BackgroundVariant::Globe];

    #[inline]
    pub fn container_id(self) -> &'static str {
        match self {
            BackgroundVariant::Grid => "hero-grid",
            BackgroundVariant::Globe => "hero-globe",
        }
    }

    /// The preferred variant the page can host; the globe is the fallback.
    pub fn choose(mut available: impl FnMut(BackgroundVariant) -> bool) -> Option<Self> {
        Self::PREFERENCE.into_iter().find(|&v| available(v))
    }
}
