//! Event-driven application model shared by the browser app and the CLI
//!
//! The whole state lives in one [`Model`] value. Each [`Event`] consumes the
//! model and returns its replacement plus at most one [`Command`] for the
//! host to run. Command results come back later as new events, so the host
//! only needs a single-threaded FIFO queue.

use tracing::{debug, info, trace, warn};

use super::{sim, Config, Particle, Viewport, ViewportError, ViewportState};

/// Something that happened to the app, processed strictly in arrival order.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Window resized (or first layout finished): re-query the viewport
    Resized,
    /// Result of a viewport query
    ViewportMeasured(Result<Viewport, ViewportError>),
    /// Animation frame with elapsed ms since the previous one
    Frame { dt: f32 },
    /// Spawn timer fired
    SpawnTick,
    /// A spawn request delivered its particles
    Spawned(Vec<Particle>),
}

/// Side effect the host must perform on behalf of the model.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    MeasureViewport,
    Spawn { count: usize, bounds: Viewport },
}

/// Complete application state.
#[derive(Clone, Debug, Default)]
pub struct Model {
    config: Config,
    viewport: ViewportState,
    particles: Vec<Particle>,
    /// Elapsed ms reported by the most recent frame
    dt: f32,
}

impl Model {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Consume the model and produce its successor.
    pub fn update(self, event: Event) -> (Self, Option<Command>) {
        match event {
            Event::Resized => {
                debug!("Viewport re-query requested");
                (self, Some(Command::MeasureViewport))
            }
            Event::ViewportMeasured(Ok(viewport)) => {
                if self.viewport.viewport() != Some(viewport) {
                    info!(width = viewport.width, height = viewport.height, "Viewport measured");
                }
                (
                    Self {
                        viewport: ViewportState::Measured(viewport),
                        ..self
                    },
                    None,
                )
            }
            Event::ViewportMeasured(Err(e)) => {
                warn!(error = %e, "Viewport measurement failed, canvas hidden until next resize");
                (
                    Self {
                        viewport: ViewportState::Unmeasured,
                        ..self
                    },
                    None,
                )
            }
            Event::Frame { dt } => {
                let particles = sim::step(dt, self.particles, &self.config);
                trace!(dt, live = particles.len(), "Frame stepped");
                (
                    Self {
                        particles,
                        dt,
                        ..self
                    },
                    None,
                )
            }
            Event::SpawnTick => match self.viewport {
                ViewportState::Measured(bounds) => {
                    let count = self.config.spawn_batch;
                    (self, Some(Command::Spawn { count, bounds }))
                }
                ViewportState::Unmeasured if self.config.retry_measure_on_tick => {
                    (self, Some(Command::MeasureViewport))
                }
                ViewportState::Unmeasured => {
                    trace!("Spawn tick skipped, viewport unmeasured");
                    (self, None)
                }
            },
            Event::Spawned(batch) => {
                let mut particles = self.particles;
                particles.extend(batch);
                (Self { particles, ..self }, None)
            }
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn last_dt(&self) -> f32 {
        self.dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    const VIEW: Viewport = Viewport { width: 800.0, height: 600.0 };

    fn measured() -> Model {
        let (model, cmd) = Model::default().update(Event::ViewportMeasured(Ok(VIEW)));
        assert_eq!(cmd, None);
        model
    }

    #[test]
    fn test_starts_unmeasured_and_empty() {
        let model = Model::default();
        assert_eq!(model.viewport(), ViewportState::Unmeasured);
        assert!(model.particles().is_empty());
    }

    #[test]
    fn test_resize_requests_measurement() {
        let (_, cmd) = Model::default().update(Event::Resized);
        assert_eq!(cmd, Some(Command::MeasureViewport));
    }

    #[test]
    fn test_viewport_lifecycle() {
        let model = measured();
        assert_eq!(model.viewport(), ViewportState::Measured(VIEW));

        let bigger = Viewport { width: 1024.0, height: 768.0 };
        let (model, _) = model.update(Event::ViewportMeasured(Ok(bigger)));
        assert_eq!(model.viewport(), ViewportState::Measured(bigger));

        let (model, _) = model.update(Event::ViewportMeasured(Err(
            ViewportError::ElementNotFound("canvas".into()),
        )));
        assert_eq!(model.viewport(), ViewportState::Unmeasured);
    }

    #[test]
    fn test_spawn_tick_skipped_while_unmeasured() {
        let (model, cmd) = Model::default().update(Event::SpawnTick);
        assert_eq!(cmd, None);
        assert!(model.particles().is_empty());
    }

    #[test]
    fn test_spawn_tick_retries_measurement_when_configured() {
        let config = Config {
            retry_measure_on_tick: true,
            ..Config::default()
        };
        let (_, cmd) = Model::new(config).update(Event::SpawnTick);
        assert_eq!(cmd, Some(Command::MeasureViewport));
    }

    #[test]
    fn test_spawn_tick_requests_batch_with_bounds() {
        let (_, cmd) = measured().update(Event::SpawnTick);
        assert_eq!(cmd, Some(Command::Spawn { count: 2, bounds: VIEW }));
    }

    #[test]
    fn test_spawned_batch_is_appended() {
        let p = Particle::new(Vec2::new(1.0, 650.0), Vec2::new(0.0, -0.1));
        let (model, _) = measured().update(Event::Spawned(vec![p, p]));
        let (model, _) = model.update(Event::Spawned(vec![p]));
        assert_eq!(model.particles().len(), 3);
    }

    #[test]
    fn test_frame_steps_particles() {
        let p = Particle::new(Vec2::new(1.0, 650.0), Vec2::new(0.0, -0.1));
        let (model, _) = measured().update(Event::Spawned(vec![p]));
        let (model, cmd) = model.update(Event::Frame { dt: 16.0 });

        assert_eq!(cmd, None);
        assert_eq!(model.last_dt(), 16.0);
        assert_eq!(model.particles()[0].life, 16.0);
        assert!((model.particles()[0].position.y - 648.4).abs() < 1e-4);
    }

    #[test]
    fn test_frames_step_even_while_unmeasured() {
        let mut p = Particle::new(Vec2::ZERO, Vec2::ZERO);
        p.life = 4990.0;
        let (model, _) = Model::default().update(Event::Spawned(vec![p]));
        let (model, _) = model.update(Event::Frame { dt: 20.0 });
        assert!(model.particles().is_empty());
    }
}
