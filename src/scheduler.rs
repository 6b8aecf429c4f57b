//! Idle-callback and timeout schedulers for deferred work.

use crate::constants::IDLE_CALLBACK_PROPERTY;
use folio_core::{Cancel, DeferPolicy, DeferredScheduler, PageConfig, Task};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Pick the scheduler once, based on what the browser offers.
pub fn select(window: &web::Window, config: &PageConfig) -> Box<dyn DeferredScheduler> {
    let idle_available =
        js_sys::Reflect::has(window.as_ref(), &JsValue::from_str(IDLE_CALLBACK_PROPERTY))
            .unwrap_or(false);
    let policy = DeferPolicy::select(idle_available, config);
    let window = window.clone();
    let config = *config;
    match policy {
        DeferPolicy::Idle { timeout_ms } => Box::new(IdleScheduler {
            window,
            timeout_ms,
            config,
        }),
        DeferPolicy::Delay { delay_ms } => Box::new(TimeoutScheduler {
            window,
            delay_ms,
            config,
        }),
    }
}

type TaskSlot = Rc<RefCell<Option<Task>>>;

fn once_closure(slot: TaskSlot) -> Closure<dyn FnMut()> {
    Closure::wrap(Box::new(move || {
        let task = slot.borrow_mut().take();
        if let Some(task) = task {
            task();
        }
    }) as Box<dyn FnMut()>)
}

#[derive(Clone, Copy, Debug)]
enum Pending {
    Idle(u32),
    Timeout(i32),
}

fn request(
    window: &web::Window,
    policy: DeferPolicy,
    callback: &Closure<dyn FnMut()>,
) -> Result<Pending, JsValue> {
    match policy {
        DeferPolicy::Idle { timeout_ms } => {
            let options = web::IdleRequestOptions::new();
            options.set_timeout(timeout_ms);
            window
                .request_idle_callback_with_options(callback.as_ref().unchecked_ref(), &options)
                .map(Pending::Idle)
        }
        DeferPolicy::Delay { delay_ms } => window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                delay_ms as i32,
            )
            .map(Pending::Timeout),
    }
}

/// Schedule `task` with `policy`, walking its fallbacks on failure. When no
/// primitive accepts the callback the task runs before this returns, so the
/// caller never waits on work that was never queued.
fn defer_with(
    window: &web::Window,
    mut policy: DeferPolicy,
    config: &PageConfig,
    task: Task,
) -> Box<dyn Cancel> {
    let slot: TaskSlot = Rc::new(RefCell::new(Some(task)));
    let callback = once_closure(slot.clone());
    loop {
        match request(window, policy, &callback) {
            Ok(pending) => {
                return Box::new(DeferredHandle {
                    window: window.clone(),
                    pending: Some(pending),
                    callback: Some(callback),
                    slot,
                });
            }
            Err(e) => {
                log::error!("[scheduler] {:?} rejected: {:?}", policy, e);
                match policy.fallback(config) {
                    Some(next) => policy = next,
                    None => break,
                }
            }
        }
    }
    log::warn!("[scheduler] nothing accepted the task; running it now");
    let task = slot.borrow_mut().take();
    if let Some(task) = task {
        task();
    }
    Box::new(DeferredHandle {
        window: window.clone(),
        pending: None,
        callback: None,
        slot,
    })
}

pub struct IdleScheduler {
    window: web::Window,
    timeout_ms: u32,
    config: PageConfig,
}

impl DeferredScheduler for IdleScheduler {
    fn policy(&self) -> DeferPolicy {
        DeferPolicy::Idle {
            timeout_ms: self.timeout_ms,
        }
    }

    fn defer(&self, task: Task) -> Box<dyn Cancel> {
        defer_with(&self.window, self.policy(), &self.config, task)
    }
}

pub struct TimeoutScheduler {
    window: web::Window,
    delay_ms: u32,
    config: PageConfig,
}

impl DeferredScheduler for TimeoutScheduler {
    fn policy(&self) -> DeferPolicy {
        DeferPolicy::Delay {
            delay_ms: self.delay_ms,
        }
    }

    fn defer(&self, task: Task) -> Box<dyn Cancel> {
        defer_with(&self.window, self.policy(), &self.config, task)
    }
}

struct DeferredHandle {
    window: web::Window,
    pending: Option<Pending>,
    callback: Option<Closure<dyn FnMut()>>,
    slot: TaskSlot,
}

impl Cancel for DeferredHandle {
    fn cancel(&mut self) {
        match self.pending.take() {
            Some(Pending::Idle(id)) => self.window.cancel_idle_callback(id),
            Some(Pending::Timeout(id)) => self.window.clear_timeout_with_handle(id),
            None => {}
        }
        drop(self.slot.borrow_mut().take());
        self.callback = None;
    }
}

impl Drop for DeferredHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
