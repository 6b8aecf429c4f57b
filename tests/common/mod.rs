// Test doubles shared by the host-side integration tests.

#![allow(dead_code)]

use folio_core::*;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// Layout with regions that can be changed mid-test to simulate reflow.
#[derive(Default)]
pub struct FakeLayout {
    regions: RefCell<HashMap<SectionId, SectionRegion>>,
}

impl FakeLayout {
    /// hero:[0,800) about:[800,1600) projects:[1600,2400) contact:[2400,3200)
    pub fn standard() -> Self {
        let layout = Self::default();
        for (i, id) in SectionId::ALL.into_iter().enumerate() {
            layout.set(id, i as f64 * 800.0, 800.0);
        }
        layout
    }

    pub fn set(&self, id: SectionId, top: f64, height: f64) {
        self.regions
            .borrow_mut()
            .insert(id, SectionRegion::new(top, height));
    }

    pub fn unmount(&self, id: SectionId) {
        self.regions.borrow_mut().remove(&id);
    }
}

impl PageHost for FakeLayout {
    type Element = SectionId;

    fn element(&self, id: SectionId) -> Option<SectionId> {
        self.regions.borrow().contains_key(&id).then_some(id)
    }

    fn region(&self, element: &SectionId) -> SectionRegion {
        self.regions.borrow()[element]
    }
}

/// Records every scroll target it is asked for.
#[derive(Clone, Default)]
pub struct Recorder(pub Rc<RefCell<Vec<SectionId>>>);

impl Recorder {
    pub fn calls(&self) -> Vec<SectionId> {
        self.0.borrow().clone()
    }
}

impl ScrollDriver<SectionId> for Recorder {
    fn scroll_to(&mut self, target: &SectionId) {
        self.0.borrow_mut().push(*target);
    }
}

#[derive(Clone, Copy)]
pub struct FixedProbe {
    pub webgl: bool,
    pub reduced_motion: bool,
}

impl FixedProbe {
    pub fn capable() -> Self {
        Self {
            webgl: true,
            reduced_motion: false,
        }
    }
}

impl CapabilityProbe for FixedProbe {
    fn webgl_supported(&self) -> bool {
        self.webgl
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }
}

struct Queued {
    task: Option<Task>,
    cancelled: Rc<Cell<bool>>,
}

/// Scheduler whose tasks only run when the test says so.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<Vec<Queued>>>,
}

impl ManualScheduler {
    pub fn pending(&self) -> usize {
        self.queue
            .borrow()
            .iter()
            .filter(|q| q.task.is_some() && !q.cancelled.get())
            .count()
    }

    /// Run every queued task that was not cancelled, as the event loop would.
    pub fn fire_all(&self) {
        let queued: Vec<Queued> = self.queue.borrow_mut().drain(..).collect();
        for mut q in queued {
            if q.cancelled.get() {
                continue;
            }
            if let Some(task) = q.task.take() {
                task();
            }
        }
    }
}

struct ManualHandle(Rc<Cell<bool>>);

impl Cancel for ManualHandle {
    fn cancel(&mut self) {
        self.0.set(true);
    }
}

impl DeferredScheduler for ManualScheduler {
    fn policy(&self) -> DeferPolicy {
        DeferPolicy::Delay { delay_ms: 0 }
    }

    fn defer(&self, task: Task) -> Box<dyn Cancel> {
        let cancelled = Rc::new(Cell::new(false));
        self.queue.borrow_mut().push(Queued {
            task: Some(task),
            cancelled: cancelled.clone(),
        });
        Box::new(ManualHandle(cancelled))
    }
}

/// Scheduler that runs the task before `defer` returns.
pub struct ImmediateScheduler;

struct NoopHandle;

impl Cancel for NoopHandle {
    fn cancel(&mut self) {}
}

impl DeferredScheduler for ImmediateScheduler {
    fn policy(&self) -> DeferPolicy {
        DeferPolicy::Delay { delay_ms: 0 }
    }

    fn defer(&self, task: Task) -> Box<dyn Cancel> {
        task();
        Box::new(NoopHandle)
    }
}

/// Subscription that counts how often it was cancelled.
#[derive(Clone, Default)]
pub struct CountingSubscription(pub Rc<Cell<u32>>);

impl Cancel for CountingSubscription {
    fn cancel(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
