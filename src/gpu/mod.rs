//! GPU renderer for the proximity mesh
//!
//! Draws the per-frame segment list as a wgpu line list in canvas pixel
//! space, composited into egui through a paint callback.

mod renderer;

pub use renderer::{MeshCallback, MeshRenderer, Uniforms};
