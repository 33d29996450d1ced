use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;

/// Monotonic time source, in seconds since an arbitrary fixed origin.
///
/// `Timer` reads time only through this trait so loops can be driven by a fake
/// clock in tests.
pub trait TimeSource {
    fn now(&self) -> f64;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    #[inline]
    fn now(&self) -> f64 {
        (**self).now()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for Rc<T> {
    #[inline]
    fn now(&self) -> f64 {
        (**self).now()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for Arc<T> {
    #[inline]
    fn now(&self) -> f64 {
        (**self).now()
    }
}

/// Wall clock backed by `Instant`; reads seconds since the clock was created.
#[derive(Debug, Copy, Clone)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for MonotonicClock {
    #[inline]
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Hand-driven clock for deterministic tests and replays.
///
/// Time only moves through [`set`](Self::set), [`advance`](Self::advance), or the
/// optional per-read step. A non-zero step makes every `now()` return the current
/// reading and then move forward, so busy-wait loops terminate.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
    step: f64,
}

impl ManualClock {
    /// Clock frozen at 0.0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clock starting at 0.0 that moves forward by `step` seconds after each read.
    pub fn stepping(step: f64) -> Self {
        Self { now: Cell::new(0.0), step }
    }

    pub fn set(&self, seconds: f64) {
        self.now.set(seconds);
    }

    pub fn advance(&self, seconds: f64) {
        self.now.set(self.now.get() + seconds);
    }

    /// Current reading without triggering the per-read step.
    pub fn peek(&self) -> f64 {
        self.now.get()
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> f64 {
        let t = self.now.get();
        if self.step != 0.0 {
            self.now.set(t + self.step);
        }
        t
    }
}
