//! Platform-agnostic core - shared between the WASM app and the CLI

pub mod config;
pub mod driver;
pub mod mesh;
pub mod particle;
pub mod sim;
pub mod spawner;
pub mod stats;
pub mod viewport;

pub use config::{Config, ConfigError};
pub use driver::{Command, Event, Model};
pub use mesh::{build_mesh, build_mesh_into, LineSegment, MeshVertex};
pub use particle::Particle;
pub use sim::step;
pub use spawner::spawn;
pub use stats::FrameStats;
pub use viewport::{Viewport, ViewportError, ViewportState};
