#![cfg(target_arch = "wasm32")]
use folio_core::{CachedProbe, PageConfig, PageSession};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod background;
mod constants;
mod dom;
mod nav;
mod probe;
mod scheduler;
mod scroll;
mod sections;
mod theme;

type Session = PageSession<sections::DomSections>;

thread_local! {
    static SESSION: RefCell<Option<Rc<RefCell<Session>>>> = const { RefCell::new(None) };
}

fn with_session<R>(f: impl FnOnce(&mut Session) -> R) -> Option<R> {
    let session = SESSION.with(|s| s.borrow().clone())?;
    let mut session = session.borrow_mut();
    Some(f(&mut session))
}

fn sync_scroll(session: &Weak<RefCell<Session>>, window: &web::Window, document: &web::Document) {
    let Some(session) = session.upgrade() else {
        return;
    };
    let offset = window.scroll_y().unwrap_or(0.0);
    let update = session.borrow_mut().on_scroll(offset);
    if !update.is_empty() {
        nav::apply(document, &update);
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    if let Err(e) = mount() {
        log::error!("mount error: {:?}", e);
    }
    Ok(())
}

fn mount() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = PageConfig::default();
    let session = PageSession::mount(
        config,
        sections::DomSections::new(document.clone()),
        Box::new(scroll::NativeScroll),
    )?;
    let session = Rc::new(RefCell::new(session));
    let weak = Rc::downgrade(&session);

    session.borrow_mut().register_engine(Box::new(scroll::EasedScroll::new(
        window.clone(),
        config.eased_scroll_duration_sec,
    )));

    // Active-section tracking
    let scroll_listener = {
        let weak = weak.clone();
        let window_scroll = window.clone();
        let document_scroll = document.clone();
        dom::EventListener::new(window.as_ref(), "scroll", move |_| {
            sync_scroll(&weak, &window_scroll, &document_scroll)
        })?
    };
    session.borrow_mut().hold(Box::new(scroll_listener));

    // Navigation links and mobile menu. The page still scrolls and tracks
    // without them, so failures here are logged rather than fatal.
    let on_navigate = {
        let weak = weak.clone();
        let document_nav = document.clone();
        move |id: &str| {
            if let Some(s) = weak.upgrade() {
                s.borrow_mut().navigate(id);
                nav::set_menu_open(&document_nav, false);
            }
        }
    };
    for listener in nav::wire_section_links(&document, on_navigate) {
        session.borrow_mut().hold(Box::new(listener));
    }
    let menu_toggle = {
        let weak = weak.clone();
        let document_menu = document.clone();
        dom::EventListener::click(&document, constants::MENU_TOGGLE_ID, move || {
            if let Some(s) = weak.upgrade() {
                let open = s.borrow_mut().toggle_menu();
                nav::set_menu_open(&document_menu, open);
            }
        })
    };
    session.borrow_mut().hold_optional("menu toggle", menu_toggle);

    // Colour scheme
    {
        let theme = theme::initial(&window);
        session.borrow_mut().set_theme(theme);
        theme::apply(&window, &document, theme);
    }
    let theme_toggle = {
        let weak = weak.clone();
        let window_theme = window.clone();
        let document_theme = document.clone();
        dom::EventListener::click(&document, constants::THEME_TOGGLE_ID, move || {
            if let Some(s) = weak.upgrade() {
                let theme = s.borrow_mut().toggle_theme();
                theme::apply(&window_theme, &document_theme, theme);
            }
        })
    };
    session.borrow_mut().hold_optional("theme toggle", theme_toggle);

    // Optional 3D background
    let probe = CachedProbe::new(probe::BrowserProbe::new(window.clone()));
    let deferred = scheduler::select(&window, &config);
    {
        let document_bg = document.clone();
        session
            .borrow_mut()
            .start_enhancement(&probe, deferred.as_ref(), move || {
                background::mount(&document_bg)
            });
    }
    let motion_watch = {
        let weak = weak.clone();
        probe::watch_reduced_motion(&window, move |reduced| {
            if let Some(s) = weak.upgrade() {
                s.borrow_mut().on_motion_preference_change(reduced);
            }
        })
    };
    session
        .borrow_mut()
        .hold_optional("reduced-motion watch", motion_watch);

    // Initial state before the first scroll event
    {
        let mut s = session.borrow_mut();
        s.on_scroll(window.scroll_y().unwrap_or(0.0));
        nav::set_active(&document, s.active_section());
        nav::set_header_scrolled(&document, s.header_scrolled());
    }

    SESSION.with(|s| *s.borrow_mut() = Some(session));
    Ok(())
}

/// Smooth-scroll to a section by id (`hero`, `about`, `projects`, `contact`).
#[wasm_bindgen]
pub fn scroll_to_section(id: &str) {
    with_session(|s| s.scroll_to_section(id));
}

#[wasm_bindgen]
pub fn active_section() -> String {
    with_session(|s| s.active_section().as_str().to_string()).unwrap_or_default()
}

#[wasm_bindgen]
pub fn enhancement_active() -> bool {
    with_session(|s| s.enhancement_active()).unwrap_or(false)
}

#[wasm_bindgen]
pub fn prefers_reduced_motion() -> bool {
    with_session(|s| s.prefers_reduced_motion()).unwrap_or(false)
}

#[wasm_bindgen]
pub fn header_scrolled() -> bool {
    with_session(|s| s.header_scrolled()).unwrap_or(false)
}

#[wasm_bindgen]
pub fn toggle_menu() -> bool {
    let open = with_session(|s| s.toggle_menu()).unwrap_or(false);
    if let Some(document) = dom::window_document() {
        nav::set_menu_open(&document, open);
    }
    open
}

/// Current colour scheme, `light` or `dark`.
#[wasm_bindgen]
pub fn theme() -> String {
    with_session(|s| s.theme().as_str().to_string()).unwrap_or_default()
}

/// Flip between light and dark; returns the new scheme.
#[wasm_bindgen]
pub fn toggle_theme() -> String {
    let Some(theme) = with_session(|s| s.toggle_theme()) else {
        return String::new();
    };
    if let (Some(window), Some(document)) = (web::window(), dom::window_document()) {
        theme::apply(&window, &document, theme);
    }
    theme.as_str().to_string()
}

/// Tear the page session down: listeners removed, pending work cancelled.
#[wasm_bindgen]
pub fn unmount() {
    if let Some(session) = SESSION.with(|s| s.borrow_mut().take()) {
        session.borrow_mut().unmount();
    }
}
