//! Eased scroll animation math used by the enhanced scroll engine.

/// Exponential ease-out, saturating at 1.
#[inline]
pub fn ease_out_expo(t: f64) -> f64 {
    (1.001 - 2f64.powf(-10.0 * t)).min(1.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSample {
    pub position: f64,
    pub done: bool,
}

/// A single scroll from `from` to `to`, timed in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollAnimation {
    from: f64,
    to: f64,
    started_at: f64,
    duration: f64,
}

impl ScrollAnimation {
    pub fn new(from: f64, to: f64, started_at: f64, duration: f64) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
        }
    }

    #[inline]
    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn sample(&self, now: f64) -> ScrollSample {
        let elapsed = now - self.started_at;
        if self.duration <= 0.0 || elapsed >= self.duration {
            return ScrollSample {
                position: self.to,
                done: true,
            };
        }
        if elapsed <= 0.0 {
            return ScrollSample {
                position: self.from,
                done: false,
            };
        }
        let k = ease_out_expo(elapsed / self.duration);
        ScrollSample {
            position: self.from + (self.to - self.from) * k,
            done: false,
        }
    }

    /// Restart towards `to` from wherever this animation is at `now`.
    pub fn retarget(&self, now: f64, to: f64) -> Self {
        let from = self.sample(now).position;
        Self::new(from, to, now, self.duration)
    }
}

/// The eased engine's animation slot: at most one scroll in flight.
///
/// A request while running re-targets from the current eased position. User
/// input interrupts the animation so the page never fights the wheel; the
/// next request then starts fresh from wherever the user left the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollEasing {
    animation: Option<ScrollAnimation>,
    duration: f64,
}

impl ScrollEasing {
    pub fn new(duration: f64) -> Self {
        Self {
            animation: None,
            duration,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.animation.is_some()
    }

    pub fn target(&self) -> Option<f64> {
        self.animation.map(|a| a.target())
    }

    /// Start (or re-target) a scroll to `to`. `current` is the live viewport
    /// offset, used only when nothing is running.
    pub fn request(&mut self, now: f64, current: f64, to: f64) {
        self.animation = Some(match self.animation {
            Some(anim) => anim.retarget(now, to),
            None => ScrollAnimation::new(current, to, now, self.duration),
        });
    }

    /// Next position to apply, or `None` when idle. Finishing clears the slot.
    pub fn tick(&mut self, now: f64) -> Option<ScrollSample> {
        let sample = self.animation?.sample(now);
        if sample.done {
            self.animation = None;
        }
        Some(sample)
    }

    /// Drop the running animation. Returns whether one was running.
    pub fn interrupt(&mut self) -> bool {
        self.animation.take().is_some()
    }
}
