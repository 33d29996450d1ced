//! Time subsystem.
//!
//! Loop timing decoupled from any windowing runtime.
//! Intended usage:
//! - one `Timer` per host loop, fed by a `TimeSource`
//! - `MonotonicClock` in production, `ManualClock` in tests and replays

mod clock;
mod timer;

pub use clock::{ManualClock, MonotonicClock, TimeSource};
pub use timer::{SyncStrategy, Timer, TimerConfig};
