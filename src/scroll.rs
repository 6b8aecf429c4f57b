//! Viewport scrolling: the native fallback and the eased engine.

use crate::constants::USER_SCROLL_EVENTS;
use crate::dom::EventListener;
use folio_core::{ScrollDriver, ScrollEasing};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `element.scrollIntoView({ behavior: "smooth" })`.
pub struct NativeScroll;

impl ScrollDriver<web::HtmlElement> for NativeScroll {
    fn scroll_to(&mut self, target: &web::HtmlElement) {
        let options = web::ScrollIntoViewOptions::new();
        options.set_behavior(web::ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

struct EaseState {
    easing: ScrollEasing,
    frame: Option<i32>,
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Eased scrolling driven by requestAnimationFrame. A new request re-targets
/// the running animation from its current position; wheel, touch or key
/// input hands the page back to the user.
pub struct EasedScroll {
    window: web::Window,
    state: Rc<RefCell<EaseState>>,
    tick: FrameCallback,
    _interrupts: Vec<EventListener>,
}

#[inline]
fn now_sec() -> f64 {
    instant::now() / 1000.0
}

fn request_frame(window: &web::Window, tick: &FrameCallback) -> Option<i32> {
    let tick = tick.borrow();
    let callback = tick.as_ref()?;
    match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::error!("requestAnimationFrame error: {:?}", e);
            None
        }
    }
}

fn stop(window: &web::Window, state: &RefCell<EaseState>) -> bool {
    let mut st = state.borrow_mut();
    if let Some(id) = st.frame.take() {
        _ = window.cancel_animation_frame(id);
    }
    st.easing.interrupt()
}

impl EasedScroll {
    pub fn new(window: web::Window, duration_sec: f64) -> Self {
        let state = Rc::new(RefCell::new(EaseState {
            easing: ScrollEasing::new(duration_sec),
            frame: None,
        }));
        let tick: FrameCallback = Rc::new(RefCell::new(None));

        let window_tick = window.clone();
        let state_tick = state.clone();
        let tick_clone = tick.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let sample = {
                let mut st = state_tick.borrow_mut();
                st.frame = None;
                match st.easing.tick(now_sec()) {
                    Some(sample) => sample,
                    None => return,
                }
            };
            window_tick.scroll_to_with_x_and_y(window_tick.scroll_x().unwrap_or(0.0), sample.position);
            if !sample.done {
                let frame = request_frame(&window_tick, &tick_clone);
                state_tick.borrow_mut().frame = frame;
            }
        }) as Box<dyn FnMut()>));

        let mut interrupts = Vec::new();
        for event in USER_SCROLL_EVENTS {
            let window_input = window.clone();
            let state_input = Rc::downgrade(&state);
            let listener = EventListener::new(window.as_ref(), event, move |_| {
                let Some(state) = state_input.upgrade() else {
                    return;
                };
                if stop(&window_input, &state) {
                    log::debug!("[scroll] eased scroll interrupted by {}", event);
                }
            });
            match listener {
                Ok(listener) => interrupts.push(listener),
                Err(e) => log::warn!("[scroll] {} interrupt not wired: {:?}", event, e),
            }
        }

        Self {
            window,
            state,
            tick,
            _interrupts: interrupts,
        }
    }
}

impl ScrollDriver<web::HtmlElement> for EasedScroll {
    fn scroll_to(&mut self, target: &web::HtmlElement) {
        let current = self.window.scroll_y().unwrap_or(0.0);
        let to = (target.get_bounding_client_rect().top() + current).max(0.0);

        let mut st = self.state.borrow_mut();
        st.easing.request(now_sec(), current, to);
        if st.frame.is_none() {
            st.frame = request_frame(&self.window, &self.tick);
        }
        log::debug!("[scroll] eased {:.0} -> {:.0}", current, to);
    }
}

impl Drop for EasedScroll {
    fn drop(&mut self) {
        stop(&self.window, &self.state);
        // breaks the closure's reference back to itself
        drop(self.tick.borrow_mut().take());
    }
}
