//! Light/dark colour scheme resolution.

use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    #[inline]
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick the initial theme.
///
/// Order: a valid stored choice, then the system colour-scheme preference,
/// then dark. Unreadable storage means dark without consulting the system;
/// an unknown stored value is ignored. `prefers_dark` returns `None` when
/// the media query cannot be evaluated and is only called when needed.
pub fn resolve_theme<E: fmt::Debug>(
    stored: Result<Option<String>, E>,
    prefers_dark: impl FnOnce() -> Option<bool>,
) -> Theme {
    let stored = match stored {
        Ok(stored) => stored,
        Err(e) => {
            log::warn!("[theme] storage unavailable: {:?}", e);
            return Theme::default();
        }
    };
    if let Some(theme) = stored.as_deref().and_then(|s| s.parse().ok()) {
        return theme;
    }
    match prefers_dark() {
        Some(true) => Theme::Dark,
        Some(false) => Theme::Light,
        None => Theme::default(),
    }
}
