//! Headless CLI that runs the ember simulation without a browser
//!
//! Run with: cargo run --features cli --bin ember-cli
//!
//! Environment:
//! - `EMBER_CONFIG`: path to a JSON config file
//! - `EMBER_SEED`: RNG seed (overrides the config)
//! - `EMBER_DURATION_SECS`: stop after this many seconds (default: run until Ctrl-C)

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use ember_mesh::core::{build_mesh_into, spawn, Command, Config, Event, FrameStats, Model, Viewport};
    use ember_mesh::time::now_ms;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::VecDeque;
    use std::time::Duration;
    use tracing::{info, warn};
    use tracing_subscriber::{fmt, EnvFilter};

    /// Fixed canvas size for headless runs
    const VIEWPORT: Viewport = Viewport { width: 1280.0, height: 720.0 };
    const FRAME: Duration = Duration::from_micros(16_667);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,ember_mesh=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let mut config = match std::env::var("EMBER_CONFIG") {
        Ok(path) => {
            info!(path = %path, "Loading config");
            Config::from_path(&path)?
        }
        Err(_) => Config::default(),
    };
    if let Ok(seed) = std::env::var("EMBER_SEED") {
        config.seed = Some(seed.parse()?);
    }
    let duration = match std::env::var("EMBER_DURATION_SECS") {
        Ok(secs) => Some(Duration::from_secs_f64(secs.parse::<f64>()?.max(0.0))),
        Err(_) => None,
    };

    let mut rng = match config.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    info!(seed = ?config.seed, ?duration, "Starting headless simulation");

    let mut frame_interval = tokio::time::interval(FRAME);
    let mut spawn_interval =
        tokio::time::interval(Duration::from_millis(config.spawn_interval_ms as u64));
    let mut stats_interval = tokio::time::interval(Duration::from_secs(1));
    let deadline = async {
        match duration {
            Some(d) => tokio::time::sleep(d).await,
            None => std::future::pending().await,
        }
    };
    tokio::pin!(deadline);

    let mut model = Model::new(config);
    let mut queue: VecDeque<Event> = VecDeque::from([Event::Resized]);
    let mut mesh = Vec::new();
    let mut stats = FrameStats::new();
    let mut last_frame = now_ms();

    loop {
        // Drain queued events; command results are queued behind them
        while let Some(event) = queue.pop_front() {
            let (next, command) = model.update(event);
            model = next;
            match command {
                Some(Command::MeasureViewport) => {
                    queue.push_back(Event::ViewportMeasured(Ok(VIEWPORT)));
                }
                Some(Command::Spawn { count, bounds }) => {
                    queue.push_back(Event::Spawned(spawn(count, bounds, model.config(), &mut rng)));
                }
                None => {}
            }
        }

        tokio::select! {
            _ = frame_interval.tick() => {
                let now = now_ms();
                let dt = (now - last_frame) as f32;
                last_frame = now;

                let (next, _) = model.update(Event::Frame { dt });
                model = next;

                let segments = if model.viewport().is_measured() {
                    let config = model.config();
                    build_mesh_into(&mut mesh, model.particles(), config.max_particle_range, config.max_particle_life);
                    mesh.len()
                } else {
                    0
                };
                stats.tick(now, model.particles().len(), segments);
            }
            _ = spawn_interval.tick() => queue.push_back(Event::SpawnTick),
            _ = stats_interval.tick() => {
                info!(
                    fps = format!("{:.1}", stats.fps()),
                    particles = stats.particles,
                    segments = stats.segments,
                    "stats"
                );
            }
            _ = tokio::signal::ctrl_c() => {
                warn!("Interrupted");
                break;
            }
            _ = &mut deadline => {
                info!("Duration elapsed");
                break;
            }
        }
    }

    info!(particles = model.particles().len(), "Simulation stopped");
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
