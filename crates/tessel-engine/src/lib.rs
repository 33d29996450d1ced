//! Tessel engine crate.
//!
//! Fixed-size single-precision vectors and matrices, float buffers for handing
//! them to a renderer, and a frame timer for pacing a host loop. Windowing and
//! rendering stay with the host.

pub mod logging;
pub mod math;
pub mod time;

pub use math::{FloatBuffer, Mat2, Mat3, Mat4, MathError, Matrix, Vec2, Vec3, Vec4, Vector};
pub use time::{ManualClock, MonotonicClock, SyncStrategy, TimeSource, Timer, TimerConfig};
