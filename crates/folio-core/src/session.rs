//! Page-lifetime owner of all orchestration state.
//!
//! A `PageSession` is created when the page view mounts and torn down when it
//! unmounts. Everything that used to be ambient (active section, enhancement
//! flag, the smooth-scroll engine) lives here and is handed out explicitly.

use crate::capability::{Capabilities, CapabilityProbe, MotionPreference};
use crate::config::PageConfig;
use crate::error::FolioResult;
use crate::gate::{EnhancementFlag, EnhancementGate, GateState};
use crate::layout::PageHost;
use crate::schedule::{Cancel, DeferredScheduler};
use crate::scroll::{ScrollController, ScrollDriver};
use crate::section::SectionId;
use crate::theme::Theme;
use crate::tracker::{ScrollTracker, ScrollUpdate};
use std::fmt;

pub struct PageSession<H: PageHost> {
    config: PageConfig,
    host: H,
    tracker: ScrollTracker,
    gate: EnhancementGate,
    controller: ScrollController<H::Element>,
    motion: MotionPreference,
    menu_open: bool,
    theme: Theme,
    subscriptions: Vec<Box<dyn Cancel>>,
    mounted: bool,
}

impl<H: PageHost> PageSession<H> {
    pub fn mount(
        config: PageConfig,
        host: H,
        native: Box<dyn ScrollDriver<H::Element>>,
    ) -> FolioResult<Self> {
        config.validate()?;
        log::info!("[session] mounted (lookahead={}px)", config.lookahead_px);
        Ok(Self {
            tracker: ScrollTracker::new(&config),
            config,
            host,
            gate: EnhancementGate::new(),
            controller: ScrollController::new(native),
            motion: MotionPreference::default(),
            menu_open: false,
            theme: Theme::default(),
            subscriptions: Vec::new(),
            mounted: true,
        })
    }

    #[inline]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    #[inline]
    pub fn host(&self) -> &H {
        &self.host
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[inline]
    pub fn active_section(&self) -> SectionId {
        self.tracker.active()
    }

    #[inline]
    pub fn header_scrolled(&self) -> bool {
        self.tracker.header_scrolled()
    }

    pub fn enhancement_flag(&self) -> EnhancementFlag {
        self.gate.flag()
    }

    #[inline]
    pub fn enhancement_active(&self) -> bool {
        self.gate.flag().is_set()
    }

    #[inline]
    pub fn gate_state(&self) -> GateState {
        self.gate.state()
    }

    #[inline]
    pub fn prefers_reduced_motion(&self) -> bool {
        self.motion.reduced()
    }

    #[inline]
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    #[inline]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        if self.theme != theme {
            log::info!("[session] theme -> {}", theme);
        }
        self.theme = theme;
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.set_theme(self.theme.toggled());
        self.theme
    }

    pub fn register_engine(&mut self, engine: Box<dyn ScrollDriver<H::Element>>) {
        if self.controller.register_engine(engine).is_some() {
            log::info!("[session] replaced smooth-scroll engine");
        }
    }

    pub fn unregister_engine(&mut self) -> Option<Box<dyn ScrollDriver<H::Element>>> {
        self.controller.unregister_engine()
    }

    #[inline]
    pub fn has_engine(&self) -> bool {
        self.controller.has_engine()
    }

    /// Keep `subscription` alive until the session unmounts.
    pub fn hold(&mut self, mut subscription: Box<dyn Cancel>) {
        if self.mounted {
            self.subscriptions.push(subscription);
        } else {
            subscription.cancel();
        }
    }

    /// Like [`hold`](Self::hold), for subscriptions the page can live without.
    /// A failure to set one up is logged and the session keeps running.
    /// Returns whether a subscription is now held.
    pub fn hold_optional<C, E>(&mut self, what: &str, subscription: Result<Option<C>, E>) -> bool
    where
        C: Cancel + 'static,
        E: fmt::Debug,
    {
        match subscription {
            Ok(Some(sub)) => {
                self.hold(Box::new(sub));
                self.mounted
            }
            Ok(None) => {
                log::info!("[session] {} not available", what);
                false
            }
            Err(e) => {
                log::warn!("[session] {} failed, continuing without it: {:?}", what, e);
                false
            }
        }
    }

    /// Probe the platform and run the enhancement gate once.
    pub fn start_enhancement<P, S, F>(&mut self, probe: &P, scheduler: &S, on_activate: F) -> GateState
    where
        P: CapabilityProbe + ?Sized,
        S: DeferredScheduler + ?Sized,
        F: FnOnce() + 'static,
    {
        if !self.mounted {
            return self.gate.state();
        }
        let caps = Capabilities::probe(probe);
        self.motion.set(caps.prefers_reduced_motion);
        self.gate.evaluate(caps, scheduler, on_activate)
    }

    pub fn on_scroll(&mut self, scroll_offset: f64) -> ScrollUpdate {
        if !self.mounted {
            return ScrollUpdate::default();
        }
        self.tracker.on_scroll(&self.host, scroll_offset)
    }

    /// Live reduced-motion updates. Turning it on while activation is still
    /// pending cancels the activation for good.
    pub fn on_motion_preference_change(&mut self, reduced: bool) {
        if !self.motion.set(reduced) {
            return;
        }
        log::info!("[session] reduced motion -> {}", reduced);
        if reduced && self.gate.state() == GateState::Pending {
            self.gate.cancel();
        }
    }

    pub fn scroll_to_section(&mut self, id: &str) {
        if !self.mounted {
            return;
        }
        self.controller.scroll_to_section(&self.host, id);
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// Menu navigation: scroll, then close the mobile menu.
    pub fn navigate(&mut self, id: &str) {
        self.scroll_to_section(id);
        self.menu_open = false;
    }

    /// Tear everything down. Safe to call more than once.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.tracker.detach();
        self.gate.cancel();
        for mut sub in self.subscriptions.drain(..) {
            sub.cancel();
        }
        drop(self.controller.unregister_engine());
        log::info!("[session] unmounted");
    }
}

impl<H: PageHost> Drop for PageSession<H> {
    fn drop(&mut self) {
        self.unmount();
    }
}
