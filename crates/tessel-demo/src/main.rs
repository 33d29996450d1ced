use anyhow::{bail, Context, Result};

use tessel_engine::logging::{init_logging, LoggingConfig};
use tessel_engine::math::{FloatBuffer, Mat4, Matrix, Vec3, Vector};
use tessel_engine::time::{MonotonicClock, SyncStrategy, Timer, TimerConfig};

/// Logical updates per second, independent of the frame rate.
const UPDATE_RATE: f32 = 30.0;

const VIEWPORT: (i32, i32) = (1280, 720);

struct DemoArgs {
    seconds: f64,
    sync_hz: u32,
    strategy: SyncStrategy,
}

fn parse_args() -> Result<DemoArgs> {
    const USAGE: &str = "usage: tessel-demo [SECONDS] [SYNC_HZ] [yield|sleep]";

    let mut args = std::env::args().skip(1);

    let seconds = match args.next() {
        Some(s) => s.parse::<f64>().with_context(|| format!("invalid duration {s:?}; {USAGE}"))?,
        None => 3.0,
    };
    let sync_hz = match args.next() {
        Some(s) => s.parse::<u32>().with_context(|| format!("invalid sync rate {s:?}; {USAGE}"))?,
        None => TimerConfig::default().sync_interval,
    };
    let strategy = match args.next().as_deref() {
        None | Some("yield") => SyncStrategy::Yield,
        Some("sleep") => SyncStrategy::Sleep,
        Some(other) => bail!("unknown sync strategy {other:?}; {USAGE}"),
    };
    if args.next().is_some() {
        bail!(USAGE);
    }

    Ok(DemoArgs { seconds, sync_hz, strategy })
}

/// A cube spinning in front of a camera that orbits slowly around it.
struct Scene {
    spin_degrees: f32,
    orbit_degrees: f32,
}

impl Scene {
    fn step(&mut self, dt: f32) {
        self.spin_degrees = (self.spin_degrees + 90.0 * dt) % 360.0;
        self.orbit_degrees = (self.orbit_degrees + 15.0 * dt) % 360.0;
    }

    fn model(&self, out: &mut Mat4) {
        out.recreate_into_transformation(
            Vec3::new(0.0, 0.0, -6.0),
            Vec3::new(self.spin_degrees * 0.5, self.spin_degrees, 0.0),
            Vec3::ONE,
        );
    }

    fn view(&self, out: &mut Mat4) {
        let radians = self.orbit_degrees.to_radians();
        let mut eye = Vec3::new(radians.sin(), 0.5, radians.cos());
        eye.set_normalized().mul_scalar(2.0);
        out.recreate_into_view(eye, Vec3::new(0.0, self.orbit_degrees, 0.0));
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    let args = parse_args()?;

    println!();
    println!(
        "  tessel demo  ·  {:.1}s at {} Hz ({:?})",
        args.seconds, args.sync_hz, args.strategy
    );
    println!();

    let mut timer = Timer::with_config(
        TimerConfig {
            sync_interval: args.sync_hz,
            strategy: args.strategy,
        },
        MonotonicClock::new(),
    );

    let mut projection = Mat4::identity();
    projection
        .try_recreate_into_perspective(VIEWPORT.0, VIEWPORT.1, 70.0, 0.1, 1000.0)
        .context("building projection matrix")?;

    let mut scene = Scene { spin_degrees: 0.0, orbit_degrees: 0.0 };
    let mut model = Mat4::identity();
    let mut view = Mat4::identity();

    // Stands in for a uniform buffer: one matrix staged at a time.
    let mut staging = FloatBuffer::allocate(16);
    let mut staged_bytes = 0usize;

    let fixed_step = 1.0 / UPDATE_RATE;
    let mut accumulator = 0.0f32;
    let start = timer.current_time();

    while timer.current_time() - start < args.seconds {
        timer.sync();
        accumulator += timer.delta_time();

        while accumulator >= fixed_step {
            scene.step(fixed_step);
            timer.update_count_for_ups();
            accumulator -= fixed_step;
        }

        scene.model(&mut model);
        scene.view(&mut view);

        for matrix in [&model, &view, &projection] {
            staging.clear();
            matrix.store(&mut staging).context("staging frame matrix")?;
            staged_bytes += staging.as_bytes().len();
        }

        let mvp = projection * view * model;
        if !mvp.is_finite() {
            log::warn!("non-finite model-view-projection matrix: {mvp:?}");
        }
        timer.update_count_for_fps();

        if timer.update() {
            log::info!("ups={} fps={}", timer.current_ups(), timer.current_fps());
        }
    }

    log::info!(
        "finished: last ups={} fps={}, {} KiB staged",
        timer.current_ups(),
        timer.current_fps(),
        staged_bytes / 1024
    );
    Ok(())
}
