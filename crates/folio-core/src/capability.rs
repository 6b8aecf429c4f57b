//! Environment capabilities that decide whether the 3D background may run.

use std::cell::{Cell, OnceCell};
use std::rc::Rc;

/// Feature detection for the current platform.
///
/// Implementations must not fail: anything that cannot be determined is
/// reported as `false`.
pub trait CapabilityProbe {
    fn webgl_supported(&self) -> bool;
    fn prefers_reduced_motion(&self) -> bool;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub webgl_supported: bool,
    pub prefers_reduced_motion: bool,
}

impl Capabilities {
    pub fn probe<P: CapabilityProbe + ?Sized>(probe: &P) -> Self {
        Self {
            webgl_supported: probe.webgl_supported(),
            prefers_reduced_motion: probe.prefers_reduced_motion(),
        }
    }

    #[inline]
    pub fn allows_enhancement(&self) -> bool {
        self.webgl_supported && !self.prefers_reduced_motion
    }
}

/// Wraps a probe so WebGL is only detected once per session.
/// Motion preference is always forwarded live.
pub struct CachedProbe<P> {
    inner: P,
    webgl: OnceCell<bool>,
}

impl<P: CapabilityProbe> CachedProbe<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            webgl: OnceCell::new(),
        }
    }
}

impl<P: CapabilityProbe> CapabilityProbe for CachedProbe<P> {
    fn webgl_supported(&self) -> bool {
        *self.webgl.get_or_init(|| self.inner.webgl_supported())
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.inner.prefers_reduced_motion()
    }
}

/// Shared, live reduced-motion preference.
#[derive(Clone, Debug, Default)]
pub struct MotionPreference(Rc<Cell<bool>>);

impl MotionPreference {
    pub fn new(reduced: bool) -> Self {
        Self(Rc::new(Cell::new(reduced)))
    }

    #[inline]
    pub fn reduced(&self) -> bool {
        self.0.get()
    }

    /// Returns true if the stored value changed.
    pub fn set(&self, reduced: bool) -> bool {
        self.0.replace(reduced) != reduced
    }
}
