//! Deferred work and cancellation handles.

use crate::config::PageConfig;

/// Something that can be stopped: a pending task or a live subscription.
///
/// `cancel` must be idempotent.
pub trait Cancel {
    fn cancel(&mut self);
}

impl<C: Cancel + ?Sized> Cancel for Box<C> {
    fn cancel(&mut self) {
        (**self).cancel()
    }
}

pub type Task = Box<dyn FnOnce()>;

/// How deferred work gets scheduled on this platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeferPolicy {
    /// Run when the event loop is idle, but no later than `timeout_ms`.
    Idle { timeout_ms: u32 },
    /// Run after a fixed delay.
    Delay { delay_ms: u32 },
}

impl DeferPolicy {
    pub fn select(idle_available: bool, config: &PageConfig) -> Self {
        if idle_available {
            DeferPolicy::Idle {
                timeout_ms: config.idle_timeout_ms,
            }
        } else {
            DeferPolicy::Delay {
                delay_ms: config.fallback_delay_ms,
            }
        }
    }

    /// What to try when this policy cannot be scheduled: idle callbacks fall
    /// back to the plain delay, and the delay has nothing behind it.
    pub fn fallback(self, config: &PageConfig) -> Option<Self> {
        match self {
            DeferPolicy::Idle { .. } => Some(DeferPolicy::Delay {
                delay_ms: config.fallback_delay_ms,
            }),
            DeferPolicy::Delay { .. } => None,
        }
    }
}

pub trait DeferredScheduler {
    fn policy(&self) -> DeferPolicy;

    /// Queue `task`. Once the returned handle is cancelled the task must not run.
    fn defer(&self, task: Task) -> Box<dyn Cancel>;
}
