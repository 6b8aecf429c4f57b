use crate::constants::*;
use crate::error::{FolioError, FolioResult};

/// Tuning knobs for one page session. `Default` matches the shipped site.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageConfig {
    pub lookahead_px: f64,
    pub header_scrolled_threshold_px: f64,
    pub idle_timeout_ms: u32,
    pub fallback_delay_ms: u32,
    pub eased_scroll_duration_sec: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            lookahead_px: LOOKAHEAD_PX,
            header_scrolled_threshold_px: HEADER_SCROLLED_THRESHOLD_PX,
            idle_timeout_ms: IDLE_TIMEOUT_MS,
            fallback_delay_ms: FALLBACK_DELAY_MS,
            eased_scroll_duration_sec: EASED_SCROLL_DURATION_SEC,
        }
    }
}

impl PageConfig {
    pub fn validate(&self) -> FolioResult<()> {
        if !self.lookahead_px.is_finite() || self.lookahead_px < 0.0 {
            return Err(FolioError::invalid_config(format!(
                "lookahead_px must be finite and >= 0, got {}",
                self.lookahead_px
            )));
        }
        if !self.header_scrolled_threshold_px.is_finite() || self.header_scrolled_threshold_px < 0.0
        {
            return Err(FolioError::invalid_config(format!(
                "header_scrolled_threshold_px must be finite and >= 0, got {}",
                self.header_scrolled_threshold_px
            )));
        }
        if self.idle_timeout_ms == 0 {
            return Err(FolioError::invalid_config("idle_timeout_ms must be > 0"));
        }
        if !self.eased_scroll_duration_sec.is_finite() || self.eased_scroll_duration_sec <= 0.0 {
            return Err(FolioError::invalid_config(format!(
                "eased_scroll_duration_sec must be finite and > 0, got {}",
                self.eased_scroll_duration_sec
            )));
        }
        Ok(())
    }
}
