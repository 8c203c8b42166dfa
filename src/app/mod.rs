//! Browser app: drives the [`Model`] from browser events and draws the mesh
//!
//! Timer and resize callbacks only enqueue events. `update()` drains the
//! queue in arrival order, runs the model's commands (their results are
//! enqueued as further events), steps one frame and submits the mesh.

mod banner;

use eframe::egui;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::core::{
    build_mesh_into, spawn, Command, Config, Event, FrameStats, LineSegment, Model, Viewport,
};
use crate::gpu::{MeshCallback, MeshRenderer, Uniforms};
use crate::theme::{colors, minimal_visuals};
use crate::time::now_ms;
use crate::web::{config_json, measure_viewport, EventQueue, EventSources};

/// Id of the canvas element eframe renders into
pub const CANVAS_ID: &str = "ember_canvas";

/// Ember mesh app
pub struct EmberApp {
    /// Single owner of all simulation state, replaced on every event
    model: Model,
    /// Randomness for the spawner
    rng: SmallRng,
    /// Events pushed by browser callbacks
    queue: EventQueue,
    /// Timer and resize listener (kept alive)
    #[allow(dead_code)]
    sources: Option<EventSources>,
    /// Per-frame segment buffer, shared with the paint callback
    mesh: Arc<Vec<LineSegment>>,
    /// Mesh renderer registered with egui_wgpu
    gpu_ready: bool,
    pub(crate) stats: FrameStats,
    stats_last_log: f64,
}

/// Config from `window.__ember_config`, falling back to defaults
pub fn load_config() -> Config {
    match config_json() {
        None => Config::default(),
        Some(json) => Config::from_json(&json).unwrap_or_else(|e| {
            warn!(error = %e, "Ignoring invalid window.__ember_config");
            Config::default()
        }),
    }
}

impl EmberApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        cc.egui_ctx.set_visuals(minimal_visuals());

        // Register mesh renderer (wgpu backend)
        let gpu_ready = if let Some(render_state) = cc.wgpu_render_state.as_ref() {
            let renderer = MeshRenderer::new(&render_state.device, render_state.target_format);
            render_state
                .renderer
                .write()
                .callback_resources
                .insert(renderer);
            true
        } else {
            error!("wgpu render state unavailable, mesh will not be drawn");
            false
        };

        let queue: EventQueue = Rc::new(RefCell::new(VecDeque::new()));
        let sources = EventSources::install(queue.clone(), config.spawn_interval_ms)
            .map_err(|e| error!(?e, "Failed to install event sources"))
            .ok();

        // The first layout pass counts as a resize
        queue.borrow_mut().push_back(Event::Resized);

        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        info!(seed = ?config.seed, banner = %config.banner, "Ember mesh starting");

        Self {
            model: Model::new(config),
            rng,
            queue,
            sources,
            mesh: Arc::new(Vec::new()),
            gpu_ready,
            stats: FrameStats::new(),
            stats_last_log: 0.0,
        }
    }

    /// Feed one event to the model and run whatever it asks for
    fn dispatch(&mut self, event: Event) {
        let (model, command) = std::mem::take(&mut self.model).update(event);
        self.model = model;
        if let Some(command) = command {
            self.run(command);
        }
    }

    /// Perform a command; its result arrives later as a queued event
    fn run(&mut self, command: Command) {
        let event = match command {
            Command::MeasureViewport => Event::ViewportMeasured(measure_viewport(CANVAS_ID)),
            Command::Spawn { count, bounds } => {
                Event::Spawned(spawn(count, bounds, self.model.config(), &mut self.rng))
            }
        };
        self.queue.borrow_mut().push_back(event);
    }

    /// Drain queued events in arrival order
    fn process_events(&mut self) {
        loop {
            let next = self.queue.borrow_mut().pop_front();
            let Some(event) = next else {
                break;
            };
            self.dispatch(event);
        }
    }

    /// Rebuild this frame's mesh and hand it to the GPU. Returns the segment count.
    fn render_mesh(&mut self, ui: &mut egui::Ui, viewport: Viewport) -> usize {
        let config = self.model.config();
        build_mesh_into(
            Arc::make_mut(&mut self.mesh),
            self.model.particles(),
            config.max_particle_range,
            config.max_particle_life,
        );

        if self.gpu_ready {
            let rect = egui::Rect::from_min_size(
                ui.max_rect().min,
                egui::vec2(viewport.width, viewport.height),
            );
            ui.painter().add(egui_wgpu::Callback::new_paint_callback(
                rect,
                MeshCallback {
                    segments: self.mesh.clone(),
                    uniforms: Uniforms::from_projection(viewport.projection()),
                },
            ));
        }
        self.mesh.len()
    }

    /// Once-per-second stats line in the console
    fn log_stats(&mut self, now: f64) {
        if now - self.stats_last_log >= 1000.0 {
            debug!(
                fps = format!("{:.1}", self.stats.fps()),
                particles = self.stats.particles,
                segments = self.stats.segments,
                dt = self.model.last_dt(),
                "stats"
            );
            self.stats_last_log = now;
        }
    }
}

impl eframe::App for EmberApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Request continuous repaint for animation
        ctx.request_repaint();

        self.process_events();

        let dt = ctx.input(|i| i.unstable_dt) * 1000.0;
        self.dispatch(Event::Frame { dt });

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(colors::BG_PRIMARY))
            .show(ctx, |ui| {
                // Nothing is drawn until the canvas has been measured
                let segments = match self.model.viewport().viewport() {
                    Some(viewport) => self.render_mesh(ui, viewport),
                    None => 0,
                };
                let now = now_ms();
                self.stats.tick(now, self.model.particles().len(), segments);
                self.render_banner(ui);
                self.log_stats(now);
            });
    }
}
