// Host-side tests for the enhancement gate and capability probing.

mod common;

use common::{FixedProbe, ImmediateScheduler, ManualScheduler};
use folio_core::*;
use std::cell::Cell;
use std::rc::Rc;

fn caps(webgl: bool, reduced: bool) -> Capabilities {
    Capabilities {
        webgl_supported: webgl,
        prefers_reduced_motion: reduced,
    }
}

fn counter() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
    let count = Rc::new(Cell::new(0));
    let c = count.clone();
    (count, move || c.set(c.get() + 1))
}

#[test]
fn capable_environment_activates_once_after_deferral() {
    let scheduler = ManualScheduler::default();
    let mut gate = EnhancementGate::new();
    let flag = gate.flag();
    let (activations, on_activate) = counter();

    assert_eq!(gate.evaluate(caps(true, false), &scheduler, on_activate), GateState::Pending);
    assert!(!flag.is_set(), "flag must not flip before the deferred task runs");
    assert_eq!(scheduler.pending(), 1);

    scheduler.fire_all();
    assert!(flag.is_set());
    assert_eq!(gate.state(), GateState::Active);
    assert_eq!(activations.get(), 1);
}

#[test]
fn second_evaluation_does_not_reschedule() {
    let scheduler = ManualScheduler::default();
    let mut gate = EnhancementGate::new();
    let (activations, first) = counter();
    gate.evaluate(caps(true, false), &scheduler, first);
    scheduler.fire_all();

    let (again, second) = counter();
    assert_eq!(gate.evaluate(caps(true, false), &scheduler, second), GateState::Active);
    assert_eq!(scheduler.pending(), 0);
    scheduler.fire_all();
    assert_eq!(activations.get(), 1);
    assert_eq!(again.get(), 0);
}

#[test]
fn reduced_motion_skips_for_the_session() {
    let scheduler = ManualScheduler::default();
    let mut gate = EnhancementGate::new();
    let (activations, on_activate) = counter();

    assert_eq!(gate.evaluate(caps(true, true), &scheduler, on_activate), GateState::Skipped);
    assert_eq!(scheduler.pending(), 0);

    // preference later turns off: still no retry
    let (_, retry) = counter();
    assert_eq!(gate.evaluate(caps(true, false), &scheduler, retry), GateState::Skipped);
    scheduler.fire_all();
    assert!(!gate.flag().is_set());
    assert_eq!(activations.get(), 0);
}

#[test]
fn missing_webgl_skips_regardless_of_motion() {
    for reduced in [false, true] {
        let scheduler = ManualScheduler::default();
        let mut gate = EnhancementGate::new();
        assert_eq!(gate.evaluate(caps(false, reduced), &scheduler, || {}), GateState::Skipped);
        scheduler.fire_all();
        assert!(!gate.flag().is_set());
    }
}

#[test]
fn cancel_before_fire_prevents_activation() {
    let scheduler = ManualScheduler::default();
    let mut gate = EnhancementGate::new();
    let flag = gate.flag();
    let (activations, on_activate) = counter();

    gate.evaluate(caps(true, false), &scheduler, on_activate);
    gate.cancel();
    assert_eq!(gate.state(), GateState::Cancelled);
    assert_eq!(scheduler.pending(), 0);

    scheduler.fire_all();
    assert!(!flag.is_set());
    assert_eq!(activations.get(), 0);
}

#[test]
fn dropping_the_gate_cancels_pending_activation() {
    let scheduler = ManualScheduler::default();
    let mut gate = EnhancementGate::new();
    let flag = gate.flag();
    gate.evaluate(caps(true, false), &scheduler, || {});
    drop(gate);

    scheduler.fire_all();
    assert!(!flag.is_set());
}

#[test]
fn cancel_after_activation_keeps_flag_set() {
    let scheduler = ManualScheduler::default();
    let mut gate = EnhancementGate::new();
    let flag = gate.flag();
    gate.evaluate(caps(true, false), &scheduler, || {});
    scheduler.fire_all();

    gate.cancel();
    assert_eq!(gate.state(), GateState::Active);
    assert!(flag.is_set());
}

#[test]
fn synchronous_scheduler_activates_immediately() {
    let mut gate = EnhancementGate::new();
    let (activations, on_activate) = counter();
    assert_eq!(gate.evaluate(caps(true, false), &ImmediateScheduler, on_activate), GateState::Active);
    assert!(gate.flag().is_set());
    assert_eq!(activations.get(), 1);
}

#[test]
fn final_states_are_terminal() {
    assert!(!GateState::Unevaluated.is_final());
    assert!(!GateState::Pending.is_final());
    assert!(GateState::Skipped.is_final());
    assert!(GateState::Active.is_final());
    assert!(GateState::Cancelled.is_final());
}

#[test]
fn defer_policy_prefers_idle_callbacks() {
    let config = PageConfig::default();
    assert_eq!(
        DeferPolicy::select(true, &config),
        DeferPolicy::Idle { timeout_ms: 1000 }
    );
    assert_eq!(
        DeferPolicy::select(false, &config),
        DeferPolicy::Delay { delay_ms: 250 }
    );
}

struct CountingProbe {
    webgl_queries: Rc<Cell<u32>>,
    reduced: Rc<Cell<bool>>,
}

impl CapabilityProbe for CountingProbe {
    fn webgl_supported(&self) -> bool {
        self.webgl_queries.set(self.webgl_queries.get() + 1);
        true
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced.get()
    }
}

#[test]
fn cached_probe_detects_webgl_once_but_motion_live() {
    let queries = Rc::new(Cell::new(0));
    let reduced = Rc::new(Cell::new(false));
    let probe = CachedProbe::new(CountingProbe {
        webgl_queries: queries.clone(),
        reduced: reduced.clone(),
    });

    assert!(probe.webgl_supported());
    assert!(probe.webgl_supported());
    assert_eq!(queries.get(), 1);

    assert!(!probe.prefers_reduced_motion());
    reduced.set(true);
    assert!(probe.prefers_reduced_motion());
    assert!(!Capabilities::probe(&probe).allows_enhancement());
    assert_eq!(queries.get(), 1);
}

#[test]
fn capabilities_from_probe() {
    let caps = Capabilities::probe(&FixedProbe {
        webgl: true,
        reduced_motion: true,
    });
    assert!(caps.webgl_supported);
    assert!(caps.prefers_reduced_motion);
    assert!(!caps.allows_enhancement());
}

#[test]
fn motion_preference_reports_changes() {
    let pref = MotionPreference::new(false);
    let shared = pref.clone();
    assert!(!pref.set(false));
    assert!(pref.set(true));
    assert!(shared.reduced());
}

#[test]
fn defer_policy_falls_back_from_idle_to_delay_then_stops() {
    let config = PageConfig::default();
    let idle = DeferPolicy::select(true, &config);
    let delay = idle.fallback(&config);
    assert_eq!(delay, Some(DeferPolicy::Delay { delay_ms: 250 }));
    assert_eq!(delay.and_then(|p| p.fallback(&config)), None);
}

/// Scheduler whose preferred primitive is broken: it walks the policy
/// fallbacks and, when none is usable, runs the task straight away.
struct DegradingScheduler {
    working: Option<DeferPolicy>,
    inner: ManualScheduler,
}

impl DeferredScheduler for DegradingScheduler {
    fn policy(&self) -> DeferPolicy {
        DeferPolicy::Idle { timeout_ms: 1000 }
    }

    fn defer(&self, task: Task) -> Box<dyn Cancel> {
        let config = PageConfig::default();
        let mut policy = Some(self.policy());
        while let Some(p) = policy {
            if Some(p) == self.working {
                return self.inner.defer(task);
            }
            policy = p.fallback(&config);
        }
        ImmediateScheduler.defer(task)
    }
}

#[test]
fn rejected_idle_request_still_activates_via_delay() {
    let inner = ManualScheduler::default();
    let scheduler = DegradingScheduler {
        working: Some(DeferPolicy::Delay { delay_ms: 250 }),
        inner: inner.clone(),
    };
    let mut gate = EnhancementGate::new();
    let (activations, on_activate) = counter();

    assert_eq!(gate.evaluate(caps(true, false), &scheduler, on_activate), GateState::Pending);
    assert_eq!(inner.pending(), 1);
    inner.fire_all();
    assert_eq!(gate.state(), GateState::Active);
    assert_eq!(activations.get(), 1);
}

#[test]
fn no_usable_deferral_activates_instead_of_hanging() {
    let scheduler = DegradingScheduler {
        working: None,
        inner: ManualScheduler::default(),
    };
    let mut gate = EnhancementGate::new();
    let (activations, on_activate) = counter();

    assert_eq!(gate.evaluate(caps(true, false), &scheduler, on_activate), GateState::Active);
    assert!(gate.flag().is_set());
    assert_eq!(activations.get(), 1);
}
