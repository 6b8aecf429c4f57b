//! One-shot gate for the decorative 3D background.

use crate::capability::Capabilities;
use crate::schedule::{Cancel, DeferredScheduler};
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GateState {
    #[default]
    Unevaluated,
    /// Capabilities ruled the background out for this session.
    Skipped,
    /// Activation is scheduled but has not fired.
    Pending,
    Active,
    /// Torn down before the activation fired.
    Cancelled,
}

impl GateState {
    /// No further transition can happen from this state.
    #[inline]
    pub fn is_final(self) -> bool {
        matches!(self, GateState::Skipped | GateState::Active | GateState::Cancelled)
    }
}

/// Write-once flag: starts false, may become true once, never goes back.
#[derive(Clone, Debug, Default)]
pub struct EnhancementFlag(Rc<Cell<bool>>);

impl EnhancementFlag {
    #[inline]
    pub fn is_set(&self) -> bool {
        self.0.get()
    }

    /// Returns true only for the call that flipped it.
    fn raise(&self) -> bool {
        !self.0.replace(true)
    }
}

pub struct EnhancementGate {
    state: Rc<Cell<GateState>>,
    flag: EnhancementFlag,
    pending: Option<Box<dyn Cancel>>,
}

impl Default for EnhancementGate {
    fn default() -> Self {
        Self::new()
    }
}

impl EnhancementGate {
    pub fn new() -> Self {
        Self {
            state: Rc::new(Cell::new(GateState::Unevaluated)),
            flag: EnhancementFlag::default(),
            pending: None,
        }
    }

    #[inline]
    pub fn state(&self) -> GateState {
        self.state.get()
    }

    /// Read handle for the background decoration.
    pub fn flag(&self) -> EnhancementFlag {
        self.flag.clone()
    }

    /// Decide once whether the background may run and, if so, schedule it.
    ///
    /// `on_activate` runs at most once, from the scheduler callback, right
    /// after the flag flips. Later calls return the current state unchanged.
    pub fn evaluate<S, F>(&mut self, caps: Capabilities, scheduler: &S, on_activate: F) -> GateState
    where
        S: DeferredScheduler + ?Sized,
        F: FnOnce() + 'static,
    {
        if self.state.get() != GateState::Unevaluated {
            return self.state.get();
        }
        if !caps.allows_enhancement() {
            log::info!(
                "[gate] background skipped (webgl={}, reduced_motion={})",
                caps.webgl_supported,
                caps.prefers_reduced_motion
            );
            self.state.set(GateState::Skipped);
            return GateState::Skipped;
        }

        self.state.set(GateState::Pending);
        let state = Rc::clone(&self.state);
        let flag = self.flag.clone();
        let handle = scheduler.defer(Box::new(move || {
            if state.get() != GateState::Pending {
                return;
            }
            state.set(GateState::Active);
            if flag.raise() {
                log::info!("[gate] background activated");
                on_activate();
            }
        }));
        log::info!("[gate] activation scheduled ({:?})", scheduler.policy());

        // Synchronous schedulers may have run the task already.
        if self.state.get() == GateState::Pending {
            self.pending = Some(handle);
        }
        self.state.get()
    }

    /// Cancel a pending activation. Has no effect once activated.
    pub fn cancel(&mut self) {
        if let Some(mut handle) = self.pending.take() {
            handle.cancel();
        }
        if self.state.get() == GateState::Pending {
            log::info!("[gate] pending activation cancelled");
            self.state.set(GateState::Cancelled);
        }
    }
}

impl Drop for EnhancementGate {
    fn drop(&mut self) {
        self.cancel();
    }
}
