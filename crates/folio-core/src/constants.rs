// Tuning constants for the page orchestration core.

// Scroll tracking
pub const LOOKAHEAD_PX: f64 = 100.0; // bias added to scrollY to clear the fixed header
pub const HEADER_SCROLLED_THRESHOLD_PX: f64 = 50.0; // header switches to its solid style past this

// Deferred background activation
pub const IDLE_TIMEOUT_MS: u32 = 1000; // upper bound on the idle-callback wait
pub const FALLBACK_DELAY_MS: u32 = 250; // plain timeout when idle callbacks are missing

// Eased scrolling
pub const EASED_SCROLL_DURATION_SEC: f64 = 1.2;
