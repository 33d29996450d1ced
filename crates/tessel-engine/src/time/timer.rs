use std::time::Duration;

use super::{MonotonicClock, TimeSource};

/// How [`Timer::sync`] waits for the target frame time.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum SyncStrategy {
    /// Spin, yielding the thread between clock reads. Lowest latency; burns a core.
    #[default]
    Yield,
    /// Sleep for the remaining time, then re-check. Cheaper on CPU, subject to
    /// scheduler granularity.
    Sleep,
}

/// Timer configuration.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TimerConfig {
    /// Target loop rate in Hz for `sync()`. `0` means uncapped.
    pub sync_interval: u32,
    pub strategy: SyncStrategy,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            sync_interval: 60,
            strategy: SyncStrategy::Yield,
        }
    }
}

/// Frame timer: delta time, UPS/FPS counters and a rate limiter.
///
/// Intended host loop:
/// - `sync()` to cap the iteration rate
/// - `delta_time()` once per iteration
/// - `update_count_for_ups()` per logical update, `update_count_for_fps()` per frame
/// - `update()` once per iteration to publish the rates once a second has accumulated
///
/// Rollover subtracts exactly one second from the accumulator instead of zeroing
/// it, so the fractional overshoot counts toward the next second and the reported
/// rates do not drift.
#[derive(Debug)]
pub struct Timer<C: TimeSource = MonotonicClock> {
    clock: C,
    sync_interval: u32,
    strategy: SyncStrategy,

    current_ups: u32,
    current_fps: u32,
    count_for_ups: u32,
    count_for_fps: u32,

    /// Seconds accumulated by `delta_time()` since the last rollover.
    count_for_time: f32,

    /// Clock reading at construction or at the last `delta_time()`.
    last_time: f64,
}

impl Timer<MonotonicClock> {
    /// Timer on the process wall clock.
    pub fn monotonic(sync_interval: u32) -> Self {
        Self::new(sync_interval, MonotonicClock::new())
    }
}

impl<C: TimeSource> Timer<C> {
    pub fn new(sync_interval: u32, clock: C) -> Self {
        Self::with_config(
            TimerConfig {
                sync_interval,
                ..TimerConfig::default()
            },
            clock,
        )
    }

    pub fn with_config(config: TimerConfig, clock: C) -> Self {
        if config.sync_interval == 0 {
            log::warn!("timer sync interval is 0; sync() will not cap the loop rate");
        }

        let last_time = clock.now();
        log::debug!(
            "timer created: sync_interval={}Hz strategy={:?} t0={last_time:.6}",
            config.sync_interval,
            config.strategy
        );

        Self {
            clock,
            sync_interval: config.sync_interval,
            strategy: config.strategy,
            current_ups: 0,
            current_fps: 0,
            count_for_ups: 0,
            count_for_fps: 0,
            count_for_time: 0.0,
            last_time,
        }
    }

    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    #[inline]
    pub fn sync_interval(&self) -> u32 {
        self.sync_interval
    }

    pub fn set_sync_interval(&mut self, sync_interval: u32) {
        if sync_interval == 0 {
            log::warn!("timer sync interval set to 0; sync() will not cap the loop rate");
        }
        self.sync_interval = sync_interval;
    }

    #[inline]
    pub fn sync_strategy(&self) -> SyncStrategy {
        self.strategy
    }

    pub fn set_sync_strategy(&mut self, strategy: SyncStrategy) {
        self.strategy = strategy;
    }

    /// Last published UPS, or the live count while nothing has been published.
    #[inline]
    pub fn current_ups(&self) -> u32 {
        if self.current_ups > 0 {
            self.current_ups
        } else {
            self.count_for_ups
        }
    }

    /// Last published FPS, or the live count while nothing has been published.
    #[inline]
    pub fn current_fps(&self) -> u32 {
        if self.current_fps > 0 {
            self.current_fps
        } else {
            self.count_for_fps
        }
    }

    #[inline]
    pub fn count_for_ups(&self) -> u32 {
        self.count_for_ups
    }

    #[inline]
    pub fn count_for_fps(&self) -> u32 {
        self.count_for_fps
    }

    #[inline]
    pub fn count_for_time(&self) -> f32 {
        self.count_for_time
    }

    #[inline]
    pub fn last_time(&self) -> f64 {
        self.last_time
    }

    /// Current clock reading in seconds.
    #[inline]
    pub fn current_time(&self) -> f64 {
        self.clock.now()
    }

    /// Seconds since the previous call (or since construction).
    ///
    /// Moves the baseline to now and adds the elapsed time to the one-second
    /// accumulator used by [`update`](Self::update).
    pub fn delta_time(&mut self) -> f32 {
        let now = self.current_time();
        let delta = (now - self.last_time) as f32;
        self.last_time = now;
        self.count_for_time += delta;
        delta
    }

    #[inline]
    pub fn update_count_for_ups(&mut self) {
        self.count_for_ups = self.count_for_ups.saturating_add(1);
    }

    #[inline]
    pub fn update_count_for_fps(&mut self) {
        self.count_for_fps = self.count_for_fps.saturating_add(1);
    }

    /// Publishes the counters once more than one second has accumulated.
    ///
    /// Returns `true` if the rates were published. At most one second is consumed
    /// per call.
    pub fn update(&mut self) -> bool {
        if self.count_for_time <= 1.0 {
            return false;
        }

        self.current_ups = self.count_for_ups;
        self.count_for_ups = 0;
        self.current_fps = self.count_for_fps;
        self.count_for_fps = 0;
        self.count_for_time -= 1.0;

        log::trace!(
            "timer rollover: ups={} fps={} carry={:.4}s",
            self.current_ups,
            self.current_fps,
            self.count_for_time
        );
        true
    }

    /// Target seconds per iteration, or `None` when uncapped.
    pub fn target_frame_time(&self) -> Option<f64> {
        (self.sync_interval > 0).then(|| f64::from(1.0f32 / self.sync_interval as f32))
    }

    /// Blocks the calling thread until `1 / sync_interval` seconds have passed since
    /// the last `delta_time()` baseline.
    ///
    /// Does not move the baseline. Cannot be interrupted. Returns immediately when
    /// the sync interval is 0.
    pub fn sync(&self) {
        let Some(target) = self.target_frame_time() else {
            return;
        };

        let mut now = self.current_time();
        while now - self.last_time < target {
            match self.strategy {
                SyncStrategy::Yield => std::thread::yield_now(),
                SyncStrategy::Sleep => {
                    // At most one frame; the clock may have jumped backwards.
                    let remaining = (target - (now - self.last_time)).min(target);
                    std::thread::sleep(Duration::from_secs_f64(remaining));
                }
            }
            now = self.current_time();
        }
    }
}
