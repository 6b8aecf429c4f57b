// DOM contract between the page markup and the wasm frontend.

// Navigation
pub const NAV_ID: &str = "site-nav";
pub const MENU_ID: &str = "mobile-menu";
pub const MENU_TOGGLE_ID: &str = "menu-toggle";
pub const SECTION_ATTR: &str = "data-section"; // on every nav button, value = section id
pub const SECTION_SELECTOR: &str = "[data-section]"; // anything that navigates
pub const NAV_ITEM_SELECTOR: &str = "#site-nav [data-section]"; // only these are highlighted

// State classes
pub const ACTIVE_CLASS: &str = "active";
pub const SCROLLED_CLASS: &str = "scrolled";
pub const OPEN_CLASS: &str = "open";
pub const HIDDEN_CLASS: &str = "hidden";

// Capability probing
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const WEBGL_CONTEXT_IDS: [&str; 2] = ["webgl", "experimental-webgl"];
pub const IDLE_CALLBACK_PROPERTY: &str = "requestIdleCallback";

// Theme
pub const THEME_STORAGE_KEY: &str = "theme"; // localStorage key, value "light" | "dark"
pub const THEME_TOGGLE_ID: &str = "theme-toggle"; // optional button
pub const DARK_CLASS: &str = "dark"; // on <html>
pub const COLOR_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

// Any of these cancels a running eased scroll
pub const USER_SCROLL_EVENTS: [&str; 3] = ["wheel", "touchstart", "keydown"];
